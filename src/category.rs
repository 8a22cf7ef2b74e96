// webfont-kit/src/category.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Coarse visual classification of a font family, guessed from its name.

use bitflags::bitflags;
use regex::RegexSet;
use std::fmt::{self, Display, Formatter};

/// A coarse visual classification of a font family.
///
/// The generic family names follow CSS Fonts Level 3 § 3.1:
/// <https://drafts.csswg.org/css-fonts-3/#generic-font-families>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Formal text faces with stroke terminals: e.g. "Georgia", "Times".
    Serif,
    /// Low-contrast faces with plain stroke endings: e.g. "Arial", "Roboto".
    SansSerif,
    /// Faces whose glyphs all share the same advance width.
    Monospace,
    /// Decorative or expressive faces meant for headings.
    Display,
    /// Nothing in the family name gave it away.
    Unknown,
}

impl Category {
    /// The lowercase name of this category, as used on the command line and in listings.
    pub fn name(self) -> &'static str {
        match self {
            Category::Serif => "serif",
            Category::SansSerif => "sans-serif",
            Category::Monospace => "monospace",
            Category::Display => "display",
            Category::Unknown => "unknown",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of categories to keep when filtering discovered fonts.
    ///
    /// Both the empty set and `Categories::all()` mean "keep everything".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Categories: u8 {
        /// Keep serif faces.
        const SERIF = 0x01;
        /// Keep sans-serif faces.
        const SANS_SERIF = 0x02;
        /// Keep monospace faces.
        const MONOSPACE = 0x04;
        /// Keep display faces.
        const DISPLAY = 0x08;
        /// Keep faces that could not be classified.
        const UNKNOWN = 0x10;
    }
}

impl Categories {
    /// Returns true if this set selects the given category.
    ///
    /// An empty set selects every category.
    #[inline]
    pub fn selects(self, category: Category) -> bool {
        self.is_empty() || self.contains(Categories::from(category))
    }
}

impl From<Category> for Categories {
    fn from(category: Category) -> Categories {
        match category {
            Category::Serif => Categories::SERIF,
            Category::SansSerif => Categories::SANS_SERIF,
            Category::Monospace => Categories::MONOSPACE,
            Category::Display => Categories::DISPLAY,
            Category::Unknown => Categories::UNKNOWN,
        }
    }
}

static MONOSPACE_PATTERNS: &[&str] = &[
    r"mono",
    r"courier",
    r"consolas",
    r"menlo",
    r"fira\s*code",
    r"source\s*code",
    r"jetbrains",
];

static SANS_SERIF_PATTERNS: &[&str] = &[
    r"sans",
    r"arial",
    r"helvetica",
    r"verdana",
    r"tahoma",
    r"roboto",
    r"open\s*sans",
    r"lato",
    r"montserrat",
    r"proxima",
    r"futura",
    r"avenir",
    r"gotham",
    r"gill",
    r"franklin",
    r"econ.*sans",
    r"economist.*sans",
];

static SERIF_PATTERNS: &[&str] = &[
    r"serif",
    r"georgia",
    r"times",
    r"garamond",
    r"palatino",
    r"cambria",
    r"didot",
    r"bodoni",
    r"caslon",
    r"baskerville",
    r"minion",
    r"sabon",
    r"bembo",
    r"plantin",
    r"econ.*serif",
    r"economist.*serif",
];

lazy_static! {
    // Evaluated top-down; the first set with any match wins.
    static ref RULES: Vec<(Category, RegexSet)> = vec![
        (Category::Monospace, pattern_set(MONOSPACE_PATTERNS)),
        (Category::SansSerif, pattern_set(SANS_SERIF_PATTERNS)),
        (Category::Serif, pattern_set(SERIF_PATTERNS)),
    ];
}

fn pattern_set(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns).unwrap()
}

/// Guesses the category of a font family from its name.
///
/// Monospace patterns are checked first, then sans-serif, then serif, so that e.g.
/// "PT Mono Sans" is monospace and "Noto Sans" is never caught by the `serif` substring.
pub fn classify(family: &str) -> Category {
    let family = family.to_lowercase();
    RULES
        .iter()
        .find(|(_, patterns)| patterns.is_match(&family))
        .map(|&(category, _)| category)
        .unwrap_or(Category::Unknown)
}

#[cfg(test)]
mod test {
    use super::{classify, Categories, Category};

    #[test]
    fn monospace_wins_over_sans_and_serif() {
        assert_eq!(classify("Fira Code"), Category::Monospace);
        assert_eq!(classify("IBM Plex Mono Sans"), Category::Monospace);
        assert_eq!(classify("Source Code Serif"), Category::Monospace);
    }

    #[test]
    fn sans_wins_over_serif() {
        assert_eq!(classify("Noto Sans"), Category::SansSerif);
        assert_eq!(classify("Economist Sans"), Category::SansSerif);
        assert_eq!(classify("PT Sans Serif"), Category::SansSerif);
    }

    #[test]
    fn serif_and_unknown() {
        assert_eq!(classify("Georgia Pro"), Category::Serif);
        assert_eq!(classify("EB GARAMOND"), Category::Serif);
        assert_eq!(classify("MyFont"), Category::Unknown);
        assert_eq!(classify(""), Category::Unknown);
    }

    #[test]
    fn empty_selection_selects_everything() {
        assert!(Categories::empty().selects(Category::Display));
        assert!(Categories::all().selects(Category::Unknown));
        assert!(Categories::SERIF.selects(Category::Serif));
        assert!(!Categories::SERIF.selects(Category::Unknown));
    }
}
