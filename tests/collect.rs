// webfont-kit/tests/collect.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Page crawling tests, run against canned responses.

use url::Url;
use webfont_kit::category::{Categories, Category};
use webfont_kit::collector;
use webfont_kit::error::FetchError;
use webfont_kit::face::FontFace;
use webfont_kit::fetchers::MemFetcher;
use webfont_kit::set;

static PAGE_URL: &str = "https://site.test/blog/post.html";

fn page_url() -> Url {
    Url::parse(PAGE_URL).unwrap()
}

fn collect(fetcher: &MemFetcher) -> (Result<Vec<FontFace>, FetchError>, Vec<String>) {
    let mut messages = vec![];
    let result = collector::collect_fonts(&page_url(), fetcher, &mut |message: &str| {
        messages.push(message.to_owned())
    });
    (result, messages)
}

fn urls(fonts: &[FontFace]) -> Vec<&str> {
    fonts.iter().map(|font| font.url().as_str()).collect()
}

#[test]
pub fn inline_and_external_faces_are_merged() {
    let mut fetcher = MemFetcher::new();
    fetcher
        .insert(
            PAGE_URL,
            r#"<html><head>
                <style>@font-face { font-family: "Fira Code"; src: url(/f/fira.woff2); }</style>
                <link rel="stylesheet" href="../css/site.css">
            </head><body></body></html>"#,
        )
        .insert(
            "https://site.test/css/site.css",
            "@font-face { font-family: 'Fira Code Copy'; src: url(/f/fira.woff2); }\n\
             @font-face { font-family: Lora; font-weight: 700; src: url(../f/lora.woff); }",
        );

    let (result, _) = collect(&fetcher);
    let fonts = result.unwrap();
    assert_eq!(
        urls(&fonts),
        vec![
            "https://site.test/f/fira.woff2",
            "https://site.test/f/fira.woff2",
            "https://site.test/f/lora.woff",
        ]
    );

    let fonts = set::deduplicate(fonts);
    assert_eq!(fonts.len(), 2);
    assert_eq!(fonts[0].family(), "Fira Code");
    assert_eq!(fonts[0].category(), Category::Monospace);
    assert_eq!(fonts[1].family(), "Lora");
    assert_eq!(fonts[1].weight(), "700");
}

#[test]
pub fn imports_are_followed_one_level_deep() {
    let mut fetcher = MemFetcher::new();
    fetcher
        .insert(PAGE_URL, r#"<link rel="stylesheet" href="/main.css">"#)
        .insert(
            "https://site.test/main.css",
            "@import url(\"fonts/a.css\");\n@font-face { font-family: Main; src: url(main.woff2); }",
        )
        .insert(
            "https://site.test/fonts/a.css",
            "@import 'b.css';\n@font-face { font-family: Imported; src: url(a.woff2); }",
        )
        .insert(
            "https://site.test/fonts/b.css",
            "@font-face { font-family: TooDeep; src: url(b.woff2); }",
        );

    let (result, messages) = collect(&fetcher);
    let fonts = result.unwrap();
    let families: Vec<&str> = fonts.iter().map(|font| font.family()).collect();
    assert_eq!(families, vec!["Main", "Imported"]);
    assert_eq!(fonts[1].url().as_str(), "https://site.test/fonts/a.woff2");
    assert!(messages.contains(&"Following @import: https://site.test/fonts/a.css".to_owned()));

    let requested: Vec<String> = fetcher.requests().into_iter().map(String::from).collect();
    assert_eq!(
        requested,
        vec![
            "https://site.test/blog/post.html",
            "https://site.test/main.css",
            "https://site.test/fonts/a.css",
        ]
    );
}

#[test]
pub fn stylesheet_failures_are_logged_and_skipped() {
    let mut fetcher = MemFetcher::new();
    fetcher
        .insert(
            PAGE_URL,
            r#"<link rel="stylesheet" href="/missing.css">
               <link rel="stylesheet" href="/ok.css">"#,
        )
        .insert(
            "https://site.test/ok.css",
            "@import url(gone.css);\n@font-face { font-family: 'Baskerville Old Face'; src: url(m.ttf); }",
        );

    let (result, messages) = collect(&fetcher);
    let fonts = result.unwrap();
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].category(), Category::Serif);
    assert_eq!(
        messages,
        vec![
            "Fetching page: https://site.test/blog/post.html".to_owned(),
            "Found 2 external stylesheet(s)".to_owned(),
            "Fetching CSS: https://site.test/missing.css".to_owned(),
            "  Failed to fetch CSS: no resource at https://site.test/missing.css".to_owned(),
            "Fetching CSS: https://site.test/ok.css".to_owned(),
            "Following @import: https://site.test/gone.css".to_owned(),
            "  Failed to fetch @import: no resource at https://site.test/gone.css".to_owned(),
        ]
    );
}

#[test]
pub fn page_failure_is_fatal() {
    let fetcher = MemFetcher::new();
    let (result, messages) = collect(&fetcher);
    match result {
        Err(FetchError::NotFound { ref url }) => assert_eq!(url.as_str(), PAGE_URL),
        other => panic!("expected a not-found error, got {:?}", other),
    }
    assert_eq!(messages, vec!["Fetching page: https://site.test/blog/post.html"]);
}

#[test]
pub fn duplicate_links_are_fetched_once() {
    let mut fetcher = MemFetcher::new();
    fetcher
        .insert(
            PAGE_URL,
            r#"<link type="text/css" href="/typed.css">
               <link rel="stylesheet" href="/a.css">
               <link rel="stylesheet" href="https://site.test/a.css">"#,
        )
        .insert("https://site.test/a.css", "body { margin: 0 }")
        .insert("https://site.test/typed.css", "p { margin: 0 }");

    let (result, messages) = collect(&fetcher);
    assert!(result.unwrap().is_empty());
    assert!(messages.contains(&"Found 2 external stylesheet(s)".to_owned()));

    let requested: Vec<String> = fetcher.requests().into_iter().map(String::from).collect();
    assert_eq!(
        requested,
        vec![
            "https://site.test/blog/post.html",
            "https://site.test/a.css",
            "https://site.test/typed.css",
        ]
    );
}

#[test]
pub fn category_filter_after_collection() {
    let mut fetcher = MemFetcher::new();
    fetcher.insert(
        PAGE_URL,
        r#"<style>
            @font-face { font-family: "JetBrains Mono"; src: url(/jb.woff2); }
            @font-face { font-family: "Helvetica Neue"; src: url(/hn.woff2); }
            @font-face { font-family: "Libre Baskerville"; src: url(/pf.woff2); }
            @font-face { font-family: "Brand Glyphs"; src: url(/bg.woff2); }
        </style>"#,
    );

    let (result, _) = collect(&fetcher);
    let fonts = set::deduplicate(result.unwrap());
    assert_eq!(fonts.len(), 4);

    let serif_or_mono = set::filter(fonts.clone(), Categories::SERIF | Categories::MONOSPACE);
    let families: Vec<&str> = serif_or_mono.iter().map(|font| font.family()).collect();
    assert_eq!(families, vec!["JetBrains Mono", "Libre Baskerville"]);

    assert_eq!(set::filter(fonts.clone(), Categories::empty()).len(), 4);
    assert_eq!(set::filter(fonts, Categories::all()).len(), 4);
}
