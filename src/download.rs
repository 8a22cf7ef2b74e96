// webfont-kit/src/download.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Saves font files to disk under descriptive names.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::DownloadError;
use crate::face::FontFace;
use crate::fetcher::Fetcher;

/// The extension used when a font URL has none.
pub const DEFAULT_EXTENSION: &str = ".woff2";

lazy_static! {
    static ref UNSAFE_FAMILY_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_\-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// The outcome of an attempt to download one font.
#[derive(Debug)]
pub struct DownloadResult {
    font: FontFace,
    outcome: Result<PathBuf, DownloadError>,
}

impl DownloadResult {
    /// The face that was downloaded.
    #[inline]
    pub fn font(&self) -> &FontFace {
        &self.font
    }

    /// Returns true if the file was written.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The path of the written file, on success.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.outcome.as_ref().ok().map(PathBuf::as_path)
    }

    /// Why the download failed, on failure.
    #[inline]
    pub fn error(&self) -> Option<&DownloadError> {
        self.outcome.as_ref().err()
    }

    /// Consumes this result, returning the face and the outcome.
    #[inline]
    pub fn into_parts(self) -> (FontFace, Result<PathBuf, DownloadError>) {
        (self.font, self.outcome)
    }
}

/// The file name used for the font at position `index` of the final list.
///
/// The name is `{family}-{weight}-{style}-{index:02}{extension}`. Characters of the family
/// outside `[A-Za-z0-9_-]` and runs of whitespace in the weight become `_`. The extension comes
/// from the URL path and defaults to `.woff2`.
pub fn file_name(font: &FontFace, index: usize) -> String {
    let family = UNSAFE_FAMILY_CHARS.replace_all(font.family(), "_");
    let weight = WHITESPACE.replace_all(font.weight(), "_");
    format!(
        "{}-{}-{}-{:02}{}",
        family,
        weight,
        font.style(),
        index,
        extension(font.url())
    )
}

fn extension(url: &Url) -> String {
    let name = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");
    match Path::new(name).extension().and_then(|extension| extension.to_str()) {
        Some(extension) if !extension.is_empty() => format!(".{}", extension),
        _ => DEFAULT_EXTENSION.to_owned(),
    }
}

/// Downloads one font into `output_dir`, which must already exist.
pub fn download_font<F>(fetcher: &F, font: &FontFace, output_dir: &Path, index: usize) -> DownloadResult
where
    F: Fetcher + ?Sized,
{
    let outcome = fetcher
        .fetch_bytes(font.url())
        .map_err(DownloadError::from)
        .and_then(|bytes| {
            let path = output_dir.join(file_name(font, index));
            fs::write(&path, bytes)?;
            Ok(path)
        });
    if let Err(ref error) = outcome {
        debug!("download of {} failed: {}", font.url(), error);
    }
    DownloadResult {
        font: font.clone(),
        outcome,
    }
}

/// Creates `output_dir` if needed and downloads every font into it, in order.
///
/// A failed download does not stop the others. Only a failure to create the directory is
/// returned as an error.
pub fn download_all<F>(fetcher: &F, fonts: &[FontFace], output_dir: &Path) -> io::Result<Vec<DownloadResult>>
where
    F: Fetcher + ?Sized,
{
    fs::create_dir_all(output_dir)?;
    Ok(fonts
        .iter()
        .enumerate()
        .map(|(index, font)| download_font(fetcher, font, output_dir, index))
        .collect())
}

/// The directory fonts are saved to when none is given: `./<site>`.
///
/// The site is the host without a leading `www.`, reduced to its second-to-last label, so
/// `https://www.economist.com/` gives `./economist`.
pub fn default_output_dir(page_url: &Url) -> PathBuf {
    Path::new(".").join(site_name(page_url))
}

fn site_name(page_url: &Url) -> String {
    let host = page_url.host_str().unwrap_or("").to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2].to_owned()
    } else {
        host.to_owned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn face(family: &str, weight: &str, style: &str, url: &str) -> FontFace {
        FontFace::new(family, Url::parse(url).unwrap(), weight, style, None)
    }

    #[test]
    fn names_are_sanitized_and_indexed() {
        let font = face("Open Sans (Latin)", "100  900", "italic", "https://x.test/f/os.ttf?v=2");
        assert_eq!(file_name(&font, 3), "Open_Sans__Latin_-100_900-italic-03.ttf");
    }

    #[test]
    fn extension_defaults_to_woff2() {
        let font = face("A", "400", "normal", "https://x.test/fonts/download");
        assert_eq!(file_name(&font, 12), "A-400-normal-12.woff2");
        let font = face("A", "400", "normal", "https://x.test/");
        assert_eq!(file_name(&font, 0), "A-400-normal-00.woff2");
    }

    #[test]
    fn site_names() {
        let url = |s: &str| Url::parse(s).unwrap();
        assert_eq!(site_name(&url("https://www.economist.com/news")), "economist");
        assert_eq!(site_name(&url("https://fonts.example.co/")), "example");
        assert_eq!(site_name(&url("http://localhost:8000/")), "localhost");
        assert_eq!(default_output_dir(&url("https://x.test/")), Path::new("./x"));
    }
}
