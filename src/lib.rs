// webfont-kit/src/lib.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `webfont-kit` finds the web fonts a page uses and downloads them.
//!
//! The pipeline runs in a few steps:
//!
//! 1. `collector::collect_fonts` fetches a page through a `Fetcher`, finds its inline and linked
//!    stylesheets, and runs each one through `scanner::scan`.
//!
//! 2. The scanner reads every `@font-face` rule, picks the best source out of its `src`
//!    descriptor (WOFF2 first), and classifies the family as serif, sans-serif, monospace, and so
//!    on. Stylesheets the strict reader rejects are rescanned with regular expressions.
//!
//! 3. `set::deduplicate` and `set::filter` trim the list, and `download::download_all` saves each
//!    file under a descriptive name. `transcode::convert_downloads` can then turn WOFF2 files into
//!    TrueType.
//!
//! Network access goes through the `Fetcher` trait. `fetchers::HttpFetcher` is the real client;
//! `fetchers::MemFetcher` serves canned responses.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod category;
pub mod collector;
pub mod descriptor;
pub mod download;
pub mod error;
pub mod face;
pub mod fetcher;
pub mod fetchers;
pub mod markup;
pub mod scanner;
pub mod set;
pub mod source;
pub mod transcode;
