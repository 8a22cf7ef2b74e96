// webfont-kit/src/fetchers/mod.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementations of the `Fetcher` interface.
//!
//! `http` talks to the network and is the one the command-line tool uses. `mem` serves canned
//! bodies from memory, which is useful for tests and for pages that have already been saved.

#[cfg(feature = "http")]
pub mod http;
pub mod mem;

#[cfg(feature = "http")]
pub use self::http::HttpFetcher;
pub use self::mem::MemFetcher;
