// webfont-kit/src/scanner/fallback.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A regex scanner for `@font-face` blocks in stylesheets the structured reader rejects.
//!
//! Each block body is matched up to its first `}`, and each descriptor is taken from its first
//! occurrence in the block. The source is the first `url(...)` of `src` together with the first
//! `format(...)` hint, without ranking the fallbacks.

use regex::Regex;
use url::Url;

use crate::descriptor;
use crate::face::FontFace;
use crate::source;

lazy_static! {
    static ref FONT_FACE_BLOCK: Regex = Regex::new(r"(?is)@font-face\s*\{([^}]+)\}").unwrap();
    static ref FAMILY: Regex =
        Regex::new(r#"(?i)font-family\s*:\s*['"]?([^;'"]+)['"]?\s*(?:;|$)"#).unwrap();
    static ref SRC: Regex = Regex::new(r"(?is)(?:^|[\s;])src\s*:\s*([^;]+)").unwrap();
    static ref WEIGHT: Regex = Regex::new(r"(?i)font-weight\s*:\s*([^;]+)").unwrap();
    static ref STYLE: Regex = Regex::new(r"(?i)font-style\s*:\s*([^;]+)").unwrap();
}

/// Scans `css` for `@font-face` blocks with regular expressions.
pub fn scan(css: &str, base_url: &Url) -> Vec<FontFace> {
    FONT_FACE_BLOCK
        .captures_iter(css)
        .filter_map(|block| block.get(1))
        .filter_map(|block| {
            let block = block.as_str();
            let source = first_capture(&SRC, block)
                .and_then(|src| source::extract_candidate(src, base_url));
            descriptor::build_face(
                first_capture(&FAMILY, block),
                first_capture(&WEIGHT, block),
                first_capture(&STYLE, block),
                source,
            )
        })
        .collect()
}

fn first_capture<'a>(pattern: &Regex, block: &'a str) -> Option<&'a str> {
    pattern
        .captures(block)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().trim())
}
