// webfont-kit/src/error.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `webfont-kit` can return.

use std::borrow::Cow;
use std::convert::From;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use url::Url;

/// Reasons why a fetcher might fail to retrieve a resource.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status {
        /// The requested URL.
        url: Url,
        /// The HTTP status code.
        status: u16,
    },
    /// The request did not complete within the configured timeout.
    Timeout {
        /// The requested URL.
        url: Url,
    },
    /// A connection, TLS, or similar transport-level failure occurred.
    Transport {
        /// The requested URL.
        url: Url,
        /// A description of the failure from the underlying client.
        message: String,
    },
    /// The fetcher has no resource registered at this URL.
    NotFound {
        /// The requested URL.
        url: Url,
    },
    /// The underlying client could not be constructed, e.g. because of an invalid header value.
    Client(String),
    /// A string that should have been an absolute URL could not be parsed.
    InvalidUrl {
        /// The offending input.
        input: String,
        /// Why the URL parser rejected it.
        message: String,
    },
}

impl FetchError {
    /// Returns the URL that was being fetched, if one was parsed.
    pub fn url(&self) -> Option<&Url> {
        match *self {
            FetchError::Status { ref url, .. }
            | FetchError::Timeout { ref url }
            | FetchError::Transport { ref url, .. }
            | FetchError::NotFound { ref url } => Some(url),
            FetchError::Client(_) | FetchError::InvalidUrl { .. } => None,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            FetchError::Status { ref url, status } => {
                write!(f, "HTTP status {} for {}", status, url)
            }
            FetchError::Timeout { ref url } => write!(f, "timed out fetching {}", url),
            FetchError::Transport {
                ref url,
                ref message,
            } => write!(f, "failed to fetch {}: {}", url, message),
            FetchError::NotFound { ref url } => write!(f, "no resource at {}", url),
            FetchError::Client(ref message) => write!(f, "cannot build HTTP client: {}", message),
            FetchError::InvalidUrl {
                ref input,
                ref message,
            } => write!(f, "invalid URL `{}`: {}", input, message),
        }
    }
}

impl Error for FetchError {}

/// A syntax error reported by the structured CSS parser.
///
/// This never escapes [`crate::scanner::scan`]: a stylesheet that fails to parse is rescanned with
/// the regex fallback instead.
#[derive(Clone, Debug, PartialEq)]
pub struct CssSyntaxError {
    /// The one-based line on which the error was detected.
    pub line: u32,
    /// The one-based column on which the error was detected.
    pub column: u32,
    /// What went wrong.
    pub message: Cow<'static, str>,
}

impl Display for CssSyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

impl Error for CssSyntaxError {}

/// Reasons why a font download might fail.
#[derive(Debug)]
pub enum DownloadError {
    /// The font file could not be retrieved.
    Fetch(FetchError),
    /// The font file could not be written to disk.
    Io(io::Error),
}

impl From<FetchError> for DownloadError {
    fn from(error: FetchError) -> DownloadError {
        DownloadError::Fetch(error)
    }
}

impl From<io::Error> for DownloadError {
    fn from(error: io::Error) -> DownloadError {
        DownloadError::Io(error)
    }
}

impl Display for DownloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            DownloadError::Fetch(ref error) => Display::fmt(error, f),
            DownloadError::Io(ref error) => write!(f, "I/O error: {}", error),
        }
    }
}

impl Error for DownloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DownloadError::Fetch(ref error) => Some(error),
            DownloadError::Io(ref error) => Some(error),
        }
    }
}

/// Reasons why a downloaded font might fail to convert to an uncompressed outline font.
#[derive(Debug)]
pub enum TranscodeError {
    /// The file does not carry the WOFF2 signature.
    NotWoff2,
    /// The decoder rejected the data.
    Decode(String),
    /// This build has no decoder; enable the `woff2` feature.
    Unsupported,
    /// A disk or similar I/O error occurred while reading or writing the font.
    Io(io::Error),
}

impl From<io::Error> for TranscodeError {
    fn from(error: io::Error) -> TranscodeError {
        TranscodeError::Io(error)
    }
}

impl Display for TranscodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            TranscodeError::NotWoff2 => f.write_str("not a WOFF2 file"),
            TranscodeError::Decode(ref message) => write!(f, "decode error: {}", message),
            TranscodeError::Unsupported => {
                f.write_str("built without WOFF2 support (enable the `woff2` feature)")
            }
            TranscodeError::Io(ref error) => write!(f, "I/O error: {}", error),
        }
    }
}

impl Error for TranscodeError {}
