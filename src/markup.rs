// webfont-kit/src/markup.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Locates the stylesheets of an HTML page.

use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref STYLE: Selector = Selector::parse("style").unwrap();
    static ref LINK: Selector = Selector::parse("link[href]").unwrap();
}

/// A parsed HTML page.
#[derive(Debug)]
pub struct Markup {
    document: Html,
}

impl Markup {
    /// Parses an HTML document. Parsing never fails; malformed markup is repaired the way a
    /// browser would.
    pub fn parse(html: &str) -> Markup {
        Markup {
            document: Html::parse_document(html),
        }
    }

    /// Returns the text of every non-empty `<style>` element, in document order.
    pub fn inline_styles(&self) -> Vec<String> {
        self.document
            .select(&STYLE)
            .map(|style| style.text().collect::<String>())
            .filter(|css| !css.trim().is_empty())
            .collect()
    }

    /// Returns the unresolved `href` of every stylesheet `<link>`.
    ///
    /// Links with a `stylesheet` token in `rel` come first, in document order, followed by the
    /// remaining links with `type="text/css"`. Empty hrefs are skipped.
    pub fn stylesheet_hrefs(&self) -> Vec<String> {
        let links: Vec<ElementRef> = self.document.select(&LINK).collect();
        let by_rel = links.iter().filter(|link| has_stylesheet_rel(link));
        let by_type = links
            .iter()
            .filter(|link| !has_stylesheet_rel(link) && has_css_type(link));
        by_rel
            .chain(by_type)
            .filter_map(|link| link.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

fn has_stylesheet_rel(link: &ElementRef) -> bool {
    link.value().attr("rel").map_or(false, |rel| {
        rel.split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}

fn has_css_type(link: &ElementRef) -> bool {
    link.value()
        .attr("type")
        .map_or(false, |ty| ty.trim().eq_ignore_ascii_case("text/css"))
}

#[cfg(test)]
mod test {
    use super::Markup;

    #[test]
    fn finds_inline_styles_in_order() {
        let markup = Markup::parse(
            "<html><head><style>a{}</style><style>   </style></head>\
             <body><style>b{}</style></body></html>",
        );
        assert_eq!(markup.inline_styles(), vec!["a{}", "b{}"]);
    }

    #[test]
    fn rel_links_come_before_type_links() {
        let markup = Markup::parse(
            r#"<head>
                <link type="text/css" href="typed.css">
                <link rel="icon" href="favicon.ico">
                <link rel="alternate Stylesheet" href="/alt.css">
                <link rel="stylesheet" type="text/css" href="both.css">
                <link rel="stylesheet" href="">
            </head>"#,
        );
        assert_eq!(markup.stylesheet_hrefs(), vec!["/alt.css", "both.css", "typed.css"]);
    }
}
