// webfont-kit/tests/download.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Download and conversion tests.

use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use webfont_kit::download;
use webfont_kit::error::{DownloadError, FetchError, TranscodeError};
use webfont_kit::face::FontFace;
use webfont_kit::fetchers::MemFetcher;
use webfont_kit::transcode::{self, Conversion, Transcoder};

fn face(family: &str, url: &str) -> FontFace {
    FontFace::new(family, Url::parse(url).unwrap(), "400", "normal", None)
}

#[test]
pub fn downloads_every_font_and_reports_failures() {
    let mut fetcher = MemFetcher::new();
    fetcher
        .insert("https://cdn.test/a.woff2", &b"wOF2aaaa"[..])
        .insert("https://cdn.test/c.ttf", &b"\0\x01\0\0cccc"[..]);
    let fonts = vec![
        face("Alpha Sans", "https://cdn.test/a.woff2"),
        face("Beta", "https://cdn.test/missing.woff"),
        face("Gamma", "https://cdn.test/c.ttf"),
    ];

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("fonts").join("site");
    let results = download::download_all(&fetcher, &fonts, &output_dir).unwrap();
    assert_eq!(results.len(), 3);

    assert!(results[0].is_success());
    let first = results[0].path().unwrap();
    assert_eq!(first, output_dir.join("Alpha_Sans-400-normal-00.woff2"));
    assert_eq!(fs::read(first).unwrap(), b"wOF2aaaa");

    assert!(!results[1].is_success());
    assert_eq!(results[1].font().family(), "Beta");
    match results[1].error() {
        Some(DownloadError::Fetch(FetchError::NotFound { .. })) => {}
        other => panic!("expected a fetch error, got {:?}", other),
    }
    assert!(!output_dir.join("Beta-400-normal-01.woff").exists());

    let (font, outcome) = results.into_iter().nth(2).unwrap().into_parts();
    assert_eq!(font.family(), "Gamma");
    assert_eq!(outcome.unwrap(), output_dir.join("Gamma-400-normal-02.ttf"));
}

#[test]
pub fn unwritable_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, b"").unwrap();
    let fetcher = MemFetcher::new();
    assert!(download::download_all(&fetcher, &[], &blocker.join("fonts")).is_err());
}

// Writes a marker file instead of decoding anything.
struct StubTranscoder;

impl Transcoder for StubTranscoder {
    fn transcode(&self, source: &Path) -> Result<PathBuf, TranscodeError> {
        if source.to_string_lossy().contains("corrupt") {
            return Err(TranscodeError::Decode("bad table directory".to_owned()));
        }
        let target = source.with_extension("ttf");
        fs::write(&target, b"\0\x01\0\0")?;
        Ok(target)
    }
}

#[test]
pub fn conversion_replaces_woff2_files_only() {
    let dir = tempfile::tempdir().unwrap();
    let woff2 = dir.path().join("A-400-normal-00.woff2");
    let woff = dir.path().join("B-400-normal-01.woff");
    let corrupt = dir.path().join("corrupt-400-normal-02.woff2");
    for path in &[&woff2, &woff, &corrupt] {
        fs::write(path, b"data").unwrap();
    }

    let paths = vec![woff2.clone(), woff.clone(), corrupt.clone()];
    let conversions = transcode::convert_downloads(&paths, &StubTranscoder);
    assert_eq!(conversions.len(), 3);

    match conversions[0] {
        Conversion::Converted { ref from, ref to } => {
            assert_eq!(*from, woff2);
            assert_eq!(*to, dir.path().join("A-400-normal-00.ttf"));
        }
        ref other => panic!("expected a conversion, got {:?}", other),
    }
    assert!(!woff2.exists());
    assert!(dir.path().join("A-400-normal-00.ttf").exists());

    match conversions[1] {
        Conversion::Skipped(ref path) => assert_eq!(*path, woff),
        ref other => panic!("expected a skip, got {:?}", other),
    }
    assert!(woff.exists());

    match conversions[2] {
        Conversion::Failed(ref path, TranscodeError::Decode(_)) => assert_eq!(*path, corrupt),
        ref other => panic!("expected a failure, got {:?}", other),
    }
    assert!(corrupt.exists());

    let converted = conversions.iter().filter(|c| c.is_converted()).count();
    assert_eq!(converted, 1);
}
