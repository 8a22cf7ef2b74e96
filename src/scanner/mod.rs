// webfont-kit/src/scanner/mod.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extracts the font faces declared by a stylesheet.
//!
//! Stylesheets are first read with a strict tokenizer-based reader (`structured`). Live CSS is
//! often not conformant, so if that reader reports any error its partial result is thrown away
//! and the whole text is rescanned with regular expressions (`fallback`). The fallback never
//! reports an error of its own.

use regex::Regex;
use url::Url;

use crate::error::CssSyntaxError;
use crate::face::FontFace;

pub mod fallback;
pub mod structured;

lazy_static! {
    static ref IMPORT: Regex = Regex::new(
        r#"(?i)@import\s+(?:url\(\s*["']?([^"')\s]+)["']?\s*\)|["']([^"']+)["'])"#
    )
    .unwrap();
}

/// Which reader produced the result of a scan.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanPath {
    /// The structured reader accepted the stylesheet.
    Structured,
    /// The structured reader failed with the given error, and the regex scanner was used.
    Fallback(CssSyntaxError),
}

/// Returns the faces declared by top-level `@font-face` rules in `css`, in source order.
///
/// Relative URLs are resolved against `base_url`, which should be the URL of the stylesheet
/// itself (or of the page, for inline `<style>` blocks).
pub fn scan(css: &str, base_url: &Url) -> Vec<FontFace> {
    scan_with_path(css, base_url).0
}

/// Like [`scan`], but also reports whether the regex fallback was needed.
pub fn scan_with_path(css: &str, base_url: &Url) -> (Vec<FontFace>, ScanPath) {
    match structured::parse_font_face_rules(css) {
        Ok(rules) => {
            let faces = rules
                .iter()
                .filter_map(|rule| rule.to_font_face(base_url))
                .collect();
            (faces, ScanPath::Structured)
        }
        Err(error) => {
            debug!("falling back to regex scan of {}: {}", base_url, error);
            (fallback::scan(css, base_url), ScanPath::Fallback(error))
        }
    }
}

/// Returns the URLs of the stylesheets pulled in by `@import` directives in `css`, resolved
/// against `base_url`, in source order.
///
/// Both the `@import url(...)` and the `@import "..."` forms are recognized.
pub fn find_imports(css: &str, base_url: &Url) -> Vec<Url> {
    IMPORT
        .captures_iter(css)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .filter_map(|raw_url| match base_url.join(raw_url.as_str()) {
            Ok(url) => Some(url),
            Err(error) => {
                warn!("ignoring unresolvable @import `{}`: {}", raw_url.as_str(), error);
                None
            }
        })
        .collect()
}
