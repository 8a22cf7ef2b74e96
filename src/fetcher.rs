// webfont-kit/src/fetcher.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides a common interface to the clients that retrieve pages, stylesheets, and fonts.

use std::time::Duration;
use url::Url;

use crate::error::FetchError;

/// The `User-Agent` sent when none is configured: a current desktop Chrome.
///
/// Some origins refuse to serve stylesheets and fonts to clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// The per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves resources by absolute URL.
///
/// Implementations follow redirects and treat any non-success status as an error. Every call
/// blocks until the response arrives or the configured timeout elapses; nothing is retried.
pub trait Fetcher {
    /// Retrieves the raw body of the resource at `url`.
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError>;

    /// Retrieves the body of the resource at `url` as text.
    ///
    /// The default implementation decodes the body as UTF-8, replacing invalid sequences.
    fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        let bytes = self.fetch_bytes(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Settings for network fetchers.
///
/// This object supports a method chaining style for idiomatic initialization; e.g.
///
///     # use std::time::Duration;
///     # use webfont_kit::fetcher::FetchOptions;
///     println!("{:?}", FetchOptions::new().timeout(Duration::from_secs(5)));
#[derive(Clone, Debug, PartialEq)]
pub struct FetchOptions {
    /// The upper bound on each individual request.
    pub timeout: Duration,
    /// The `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> FetchOptions {
        FetchOptions {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl FetchOptions {
    /// Initializes the options to their defaults: a 30 second timeout and a desktop Chrome
    /// `User-Agent`.
    #[inline]
    pub fn new() -> FetchOptions {
        FetchOptions::default()
    }

    /// Sets the per-request timeout and returns these options for method chaining.
    #[inline]
    pub fn timeout(&mut self, timeout: Duration) -> &mut FetchOptions {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header and returns these options for method chaining.
    #[inline]
    pub fn user_agent<S>(&mut self, user_agent: S) -> &mut FetchOptions
    where
        S: Into<String>,
    {
        self.user_agent = user_agent.into();
        self
    }
}

/// Parses an absolute URL, reporting failures as a `FetchError`.
pub fn parse_url(input: &str) -> Result<Url, FetchError> {
    Url::parse(input.trim()).map_err(|error| FetchError::InvalidUrl {
        input: input.to_owned(),
        message: error.to_string(),
    })
}
