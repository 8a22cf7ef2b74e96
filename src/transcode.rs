// webfont-kit/src/transcode.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Converts downloaded WOFF2 files into plain TrueType/OpenType files that desktop systems can
//! install.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TranscodeError;

/// The first four bytes of every WOFF2 file.
pub const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";

/// Converts a compressed web font file into an uncompressed outline font file.
pub trait Transcoder {
    /// Writes the decompressed equivalent of the file at `source` and returns its path.
    ///
    /// The source file is left in place.
    fn transcode(&self, source: &Path) -> Result<PathBuf, TranscodeError>;
}

/// A transcoder that decompresses WOFF2 using the `fontcull` crate.
///
/// The output is written next to the input with a `.ttf` extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Woff2Transcoder;

impl Transcoder for Woff2Transcoder {
    fn transcode(&self, source: &Path) -> Result<PathBuf, TranscodeError> {
        let data = fs::read(source)?;
        if !data.starts_with(WOFF2_SIGNATURE) {
            return Err(TranscodeError::NotWoff2);
        }
        let decompressed = decompress(&data)?;
        let target = source.with_extension("ttf");
        fs::write(&target, decompressed)?;
        Ok(target)
    }
}

#[cfg(feature = "woff2")]
fn decompress(data: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    fontcull::decompress_font(data).map_err(|error| TranscodeError::Decode(error.to_string()))
}

#[cfg(not(feature = "woff2"))]
fn decompress(_: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    Err(TranscodeError::Unsupported)
}

/// What happened to one file during [`convert_downloads`].
#[derive(Debug)]
pub enum Conversion {
    /// The file was converted and the original deleted.
    Converted {
        /// The original WOFF2 file.
        from: PathBuf,
        /// The new outline font file.
        to: PathBuf,
    },
    /// The file is not a `.woff2` file and was left alone.
    Skipped(PathBuf),
    /// Conversion failed; the original is kept.
    Failed(PathBuf, TranscodeError),
}

impl Conversion {
    /// Returns true if the file was converted.
    #[inline]
    pub fn is_converted(&self) -> bool {
        matches!(*self, Conversion::Converted { .. })
    }
}

/// Converts every `.woff2` file among `paths`, deleting each original once its conversion
/// succeeds. Other files are skipped. A failure affects only its own file.
pub fn convert_downloads<T>(paths: &[PathBuf], transcoder: &T) -> Vec<Conversion>
where
    T: Transcoder + ?Sized,
{
    paths
        .iter()
        .map(|path| {
            if !is_woff2_path(path) {
                return Conversion::Skipped(path.clone());
            }
            match transcoder.transcode(path) {
                Ok(to) => {
                    if let Err(error) = fs::remove_file(path) {
                        warn!("could not remove {}: {}", path.display(), error);
                    }
                    Conversion::Converted {
                        from: path.clone(),
                        to,
                    }
                }
                Err(error) => Conversion::Failed(path.clone(), error),
            }
        })
        .collect()
}

fn is_woff2_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map_or(false, |extension| extension.eq_ignore_ascii_case("woff2"))
}
