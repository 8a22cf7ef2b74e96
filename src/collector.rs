// webfont-kit/src/collector.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Collects every font face referenced by a web page.
//!
//! The page is fetched, then its inline `<style>` blocks are scanned, then each external
//! stylesheet is fetched and scanned, followed by the stylesheets it `@import`s. Imports are
//! followed one level deep only: an imported sheet's own imports are not fetched. Everything
//! happens sequentially, one request at a time.

use url::Url;

use crate::error::FetchError;
use crate::face::FontFace;
use crate::fetcher::Fetcher;
use crate::markup::Markup;
use crate::scanner;

/// Collects the font faces referenced by the page at `page_url`, in discovery order.
///
/// Faces from inline styles come first, then, for each external stylesheet, its own faces
/// followed by those of its imports. The result may contain duplicates.
///
/// Human-readable progress is reported through `log`. Only a failure to fetch the page itself is
/// returned as an error; a stylesheet or import that cannot be fetched is reported through `log`
/// and skipped.
pub fn collect_fonts<F>(
    page_url: &Url,
    fetcher: &F,
    log: &mut dyn FnMut(&str),
) -> Result<Vec<FontFace>, FetchError>
where
    F: Fetcher + ?Sized,
{
    let mut fonts = vec![];

    log(&format!("Fetching page: {}", page_url));
    let html = fetcher.fetch_text(page_url)?;
    let markup = Markup::parse(&html);

    for (index, css) in markup.inline_styles().iter().enumerate() {
        log(&format!("Parsing inline style block {}", index + 1));
        fonts.extend(scanner::scan(css, page_url));
    }

    let stylesheet_urls = resolve_stylesheets(page_url, &markup.stylesheet_hrefs());
    log(&format!("Found {} external stylesheet(s)", stylesheet_urls.len()));

    for stylesheet_url in &stylesheet_urls {
        log(&format!("Fetching CSS: {}", stylesheet_url));
        let css = match fetcher.fetch_text(stylesheet_url) {
            Ok(css) => css,
            Err(error) => {
                log(&format!("  Failed to fetch CSS: {}", error));
                continue;
            }
        };
        fonts.extend(scanner::scan(&css, stylesheet_url));

        for import_url in scanner::find_imports(&css, stylesheet_url) {
            log(&format!("Following @import: {}", import_url));
            match fetcher.fetch_text(&import_url) {
                Ok(imported_css) => fonts.extend(scanner::scan(&imported_css, &import_url)),
                Err(error) => log(&format!("  Failed to fetch @import: {}", error)),
            }
        }
    }

    Ok(fonts)
}

// Resolves hrefs against the page, dropping unresolvable ones and later duplicates.
fn resolve_stylesheets(page_url: &Url, hrefs: &[String]) -> Vec<Url> {
    let mut urls: Vec<Url> = vec![];
    for href in hrefs {
        match page_url.join(href) {
            Ok(url) => {
                if !urls.contains(&url) {
                    urls.push(url)
                }
            }
            Err(error) => warn!("ignoring unresolvable stylesheet href `{}`: {}", href, error),
        }
    }
    urls
}
