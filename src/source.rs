// webfont-kit/src/source.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Picks the file to download out of the value of an `@font-face` `src` descriptor.
//!
//! A `src` descriptor lists fallbacks for browsers with different format support, e.g.
//!
//! ```css
//! src: url(a.eot) format("embedded-opentype"), url(a.woff2) format("woff2");
//! ```
//!
//! Only one file per face is wanted, so the best-supported format is chosen.

use regex::Regex;
use std::path::Path;
use url::Url;

/// The rank given to formats and extensions that are not in the priority table.
pub const UNRANKED: u8 = 5;

lazy_static! {
    static ref URL_TOKEN: Regex = Regex::new(r#"url\(\s*["']?([^"')\s]+)["']?\s*\)"#).unwrap();
    static ref FORMAT_TOKEN: Regex =
        Regex::new(r#"format\(\s*["']?([^"')\s]+)["']?\s*\)"#).unwrap();
}

/// One `url(...)` entry of a `src` descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceCandidate {
    /// The font URL, resolved against the stylesheet URL.
    pub url: Url,
    /// The value of the sibling `format(...)` hint, if any.
    pub format: Option<String>,
}

impl SourceCandidate {
    /// The priority of this candidate; lower is better.
    ///
    /// A declared format takes precedence; otherwise the URL's file extension is used.
    pub fn rank(&self) -> u8 {
        match self.format {
            Some(ref format) => format_rank(format),
            None => extension_rank(&self.url),
        }
    }
}

/// Ranks a `format(...)` hint: `woff2` < `woff` < `truetype` < `opentype` <
/// `embedded-opentype` < anything else.
pub fn format_rank(format: &str) -> u8 {
    match &*format.to_ascii_lowercase() {
        "woff2" => 0,
        "woff" => 1,
        "truetype" => 2,
        "opentype" => 3,
        "embedded-opentype" => 4,
        _ => UNRANKED,
    }
}

/// Ranks a URL by the extension of its path, in the same order as [`format_rank`].
pub fn extension_rank(url: &Url) -> u8 {
    let extension = Path::new(url.path())
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("woff2") => 0,
        Some("woff") => 1,
        Some("ttf") => 2,
        Some("otf") => 3,
        Some("eot") => 4,
        _ => UNRANKED,
    }
}

/// Extracts the URL and format hint from one comma-separated entry of a `src` descriptor.
///
/// Returns `None` if the entry has no `url(...)` (e.g. `local("Arial")`), if the URL is a
/// `data:` URI, or if it cannot be resolved against `base_url`.
pub fn extract_candidate(fragment: &str, base_url: &Url) -> Option<SourceCandidate> {
    let raw_url = URL_TOKEN.captures(fragment)?.get(1)?.as_str();
    if raw_url.starts_with("data:") {
        return None;
    }
    let url = match base_url.join(raw_url) {
        Ok(url) => url,
        Err(error) => {
            debug!("skipping unresolvable font URL `{}`: {}", raw_url, error);
            return None;
        }
    };
    let format = FORMAT_TOKEN
        .captures(fragment)
        .and_then(|captures| captures.get(1))
        .map(|format| format.as_str().to_owned());
    Some(SourceCandidate { url, format })
}

/// Selects the best-ranked candidate out of a whole `src` descriptor value.
///
/// Ties keep declaration order.
pub fn select_best_source(src_value: &str, base_url: &Url) -> Option<SourceCandidate> {
    src_value
        .split(',')
        .filter_map(|fragment| extract_candidate(fragment.trim(), base_url))
        .min_by_key(SourceCandidate::rank)
}

#[cfg(test)]
mod test {
    use super::*;

    fn base() -> Url {
        Url::parse("https://x.test/css/s.css").unwrap()
    }

    #[test]
    fn resolves_relative_urls_and_formats() {
        let candidate = extract_candidate("url('../fonts/a.woff') format('woff')", &base()).unwrap();
        assert_eq!(candidate.url.as_str(), "https://x.test/fonts/a.woff");
        assert_eq!(candidate.format.as_deref(), Some("woff"));

        let candidate = extract_candidate("url(b.ttf)", &base()).unwrap();
        assert_eq!(candidate.url.as_str(), "https://x.test/css/b.ttf");
        assert_eq!(candidate.format, None);
    }

    #[test]
    fn data_uris_and_local_sources_are_skipped() {
        assert_eq!(
            extract_candidate("url(data:font/woff2;base64,d09GMgABAAAA) format('woff2')", &base()),
            None
        );
        assert_eq!(extract_candidate("local('Arial')", &base()), None);
    }

    #[test]
    fn woff2_beats_everything_regardless_of_order() {
        let src = "url(a.eot) format('embedded-opentype'), url(a.otf) format('opentype'), \
                   url(a.ttf) format('truetype'), url(a.woff) format('woff'), \
                   url(a.woff2) format('woff2')";
        let best = select_best_source(src, &base()).unwrap();
        assert_eq!(best.url.as_str(), "https://x.test/css/a.woff2");
        assert_eq!(best.format.as_deref(), Some("woff2"));
    }

    #[test]
    fn extension_is_used_when_no_format_is_declared() {
        let best = select_best_source("url(a.ttf), url(a.woff?v=3)", &base()).unwrap();
        assert_eq!(best.url.as_str(), "https://x.test/css/a.woff?v=3");
        assert_eq!(best.format, None);
    }

    #[test]
    fn ties_keep_declaration_order() {
        let best = select_best_source("url(first.svg), url(second.svg)", &base()).unwrap();
        assert_eq!(best.url.as_str(), "https://x.test/css/first.svg");
    }

    #[test]
    fn nothing_downloadable() {
        assert_eq!(select_best_source("local(Foo), url(data:font/woff;base64,AA)", &base()), None);
        assert_eq!(select_best_source("", &base()), None);
    }
}
