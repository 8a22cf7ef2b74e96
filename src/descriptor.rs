// webfont-kit/src/descriptor.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The descriptors of a single `@font-face` rule, and their conversion to a `FontFace`.

use url::Url;

use crate::face::{FontFace, DEFAULT_STYLE, DEFAULT_WEIGHT};
use crate::source::{self, SourceCandidate};

/// The raw descriptor values of one `@font-face` rule.
///
/// Values are stored as written in the stylesheet, minus surrounding whitespace. This object
/// supports a method chaining style for initialization; e.g.
///
///     # use webfont_kit::descriptor::Descriptors;
///     let mut descriptors = Descriptors::new();
///     descriptors.family("'Inter'").src("url(inter.woff2)");
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Descriptors {
    /// The `font-family` descriptor.
    pub family: Option<String>,
    /// The `font-weight` descriptor.
    pub weight: Option<String>,
    /// The `font-style` descriptor.
    pub style: Option<String>,
    /// The `src` descriptor.
    pub src: Option<String>,
}

impl Descriptors {
    /// Creates an empty descriptor set.
    #[inline]
    pub fn new() -> Descriptors {
        Descriptors::default()
    }

    /// Sets the `font-family` descriptor and returns this set for method chaining.
    #[inline]
    pub fn family(&mut self, value: &str) -> &mut Descriptors {
        self.family = Some(value.trim().to_owned());
        self
    }

    /// Sets the `font-weight` descriptor and returns this set for method chaining.
    #[inline]
    pub fn weight(&mut self, value: &str) -> &mut Descriptors {
        self.weight = Some(value.trim().to_owned());
        self
    }

    /// Sets the `font-style` descriptor and returns this set for method chaining.
    #[inline]
    pub fn style(&mut self, value: &str) -> &mut Descriptors {
        self.style = Some(value.trim().to_owned());
        self
    }

    /// Sets the `src` descriptor and returns this set for method chaining.
    #[inline]
    pub fn src(&mut self, value: &str) -> &mut Descriptors {
        self.src = Some(value.trim().to_owned());
        self
    }

    /// Records a declaration by property name. Unknown properties are ignored.
    ///
    /// Calling this again for the same property overwrites the earlier value, so the last
    /// declaration in source order wins.
    pub fn set(&mut self, name: &str, value: &str) -> &mut Descriptors {
        match &*name.trim().to_ascii_lowercase() {
            "font-family" => self.family(value),
            "font-weight" => self.weight(value),
            "font-style" => self.style(value),
            "src" => self.src(value),
            _ => self,
        }
    }

    /// Builds the face this rule declares, resolving URLs against `base_url`.
    ///
    /// Returns `None` for incomplete rules: no family, no `src`, or no downloadable source.
    pub fn to_font_face(&self, base_url: &Url) -> Option<FontFace> {
        parse_rule(
            self.family.as_deref(),
            self.weight.as_deref(),
            self.style.as_deref(),
            self.src.as_deref(),
            base_url,
        )
    }
}

/// Builds a `FontFace` from raw descriptor values.
///
/// `family` and `src` are required. Missing weight and style default to `400` and `normal`. Only
/// the best-ranked source of `src` is kept.
pub fn parse_rule(
    family: Option<&str>,
    weight: Option<&str>,
    style: Option<&str>,
    src: Option<&str>,
    base_url: &Url,
) -> Option<FontFace> {
    let best = source::select_best_source(src?, base_url);
    build_face(family, weight, style, best)
}

/// Builds a `FontFace` from raw descriptor values and an already chosen source.
///
/// Returns `None` if the family is missing or empty, or if there is no source.
pub fn build_face(
    family: Option<&str>,
    weight: Option<&str>,
    style: Option<&str>,
    source: Option<SourceCandidate>,
) -> Option<FontFace> {
    let family = strip_quotes(family?);
    if family.is_empty() {
        return None;
    }
    let source = source?;
    Some(FontFace::new(
        family,
        source.url,
        non_empty(weight).unwrap_or(DEFAULT_WEIGHT),
        non_empty(style).unwrap_or(DEFAULT_STYLE),
        source.format,
    ))
}

fn strip_quotes(family: &str) -> &str {
    family.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
