// webfont-kit/src/fetchers/mem.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fetcher that serves resources kept in memory.

use std::cell::RefCell;
use std::collections::HashMap;
use url::Url;

use crate::error::FetchError;
use crate::fetcher::Fetcher;

/// A fetcher that serves resources kept in memory, keyed by absolute URL.
///
/// Every request is recorded, so callers can check what was fetched and in which order.
#[derive(Debug, Default)]
pub struct MemFetcher {
    resources: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<Url>>,
}

impl MemFetcher {
    /// Creates a fetcher with no resources.
    #[inline]
    pub fn new() -> MemFetcher {
        MemFetcher::default()
    }

    /// Registers `body` as the resource at `url` and returns this fetcher for method chaining.
    ///
    /// `url` is normalized the same way `Url` serializes it, so `https://a.test` and
    /// `https://a.test/` name the same resource.
    pub fn insert<B>(&mut self, url: &str, body: B) -> &mut MemFetcher
    where
        B: Into<Vec<u8>>,
    {
        let key = match Url::parse(url) {
            Ok(url) => url.into(),
            Err(_) => url.to_owned(),
        };
        self.resources.insert(key, body.into());
        self
    }

    /// Returns every URL requested so far, in order, including the ones that failed.
    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for MemFetcher {
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(url.clone());
        self.resources
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: url.clone() })
    }
}
