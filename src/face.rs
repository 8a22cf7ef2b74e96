// webfont-kit/src/face.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A downloadable font resource declared by an `@font-face` rule.

use url::Url;

use crate::category::{self, Category};

/// The weight assumed when a rule has no `font-weight` descriptor.
pub const DEFAULT_WEIGHT: &str = "400";
/// The style assumed when a rule has no `font-style` descriptor.
pub const DEFAULT_STYLE: &str = "normal";

/// One downloadable font resource, as declared by an `@font-face` rule.
///
/// Faces are read-only once built. The category is always derived from the family name.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    family: String,
    url: Url,
    weight: String,
    style: String,
    format: Option<String>,
    category: Category,
}

impl FontFace {
    /// Creates a face, classifying it by family name.
    ///
    /// `url` must already be absolute; callers reject `data:` URLs before getting here.
    pub fn new<F, W, S>(family: F, url: Url, weight: W, style: S, format: Option<String>) -> FontFace
    where
        F: Into<String>,
        W: Into<String>,
        S: Into<String>,
    {
        let family = family.into();
        let category = category::classify(&family);
        FontFace {
            family,
            url,
            weight: weight.into(),
            style: style.into(),
            format,
            category,
        }
    }

    /// The CSS font-family name, without quotes.
    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The absolute URL of the font file.
    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The `font-weight` token, e.g. `"400"` or `"100 900"`.
    #[inline]
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// The `font-style` token, e.g. `"normal"` or `"italic"`.
    #[inline]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// The declared container format (`"woff2"`, `"truetype"`, …), if the rule named one.
    #[inline]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// The category guessed from the family name.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }
}
