// webfont-kit/src/fetchers/http.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fetcher that retrieves resources over HTTP and HTTPS.
//!
//! This fetcher uses the blocking client of the `reqwest` crate with rustls. It presents itself
//! as a desktop browser, since some origins refuse generic clients.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::redirect::Policy;
use url::Url;

use crate::error::FetchError;
use crate::fetcher::{FetchOptions, Fetcher};

const MAX_REDIRECTS: usize = 10;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,text/css,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// A fetcher that retrieves resources over HTTP and HTTPS.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the default options.
    pub fn new() -> Result<HttpFetcher, FetchError> {
        HttpFetcher::with_options(&FetchOptions::default())
    }

    /// Creates a fetcher with the given timeout and `User-Agent`.
    pub fn with_options(options: &FetchOptions) -> Result<HttpFetcher, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .default_headers(headers)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|error| FetchError::Client(error.to_string()))?;
        Ok(HttpFetcher { client })
    }

    fn get(&self, url: &Url) -> Result<Response, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|error| transport_error(url, error))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|error| transport_error(url, error))?;
        Ok(bytes.to_vec())
    }

    // Honors the charset of the `Content-Type` header.
    fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        self.get(url)?
            .text()
            .map_err(|error| transport_error(url, error))
    }
}

fn transport_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout { url: url.clone() }
    } else {
        FetchError::Transport {
            url: url.clone(),
            message: error.to_string(),
        }
    }
}
