// webfont-kit/src/set.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations on a collected list of font faces.

use std::collections::HashSet;

use crate::category::Categories;
use crate::face::FontFace;

/// Keeps the first face for each distinct URL, preserving order.
///
/// Later faces with the same URL are dropped even if their family, weight, or style differ.
pub fn deduplicate(fonts: Vec<FontFace>) -> Vec<FontFace> {
    let mut seen = HashSet::new();
    fonts
        .into_iter()
        .filter(|font| seen.insert(font.url().clone()))
        .collect()
}

/// Keeps the faces whose category is selected by `categories`, preserving order.
///
/// An empty selection keeps everything, as does `Categories::all()`.
pub fn filter(fonts: Vec<FontFace>, categories: Categories) -> Vec<FontFace> {
    if categories.is_empty() || categories.is_all() {
        return fonts;
    }
    fonts
        .into_iter()
        .filter(|font| categories.selects(font.category()))
        .collect()
}
