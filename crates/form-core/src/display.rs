//! Inline `display` values and the two-state visibility derived from them.
//!
//! Only the exact string `block` counts as shown. Every other value,
//! including an unset style and other layout modes like `flex`, is treated
//! as hidden, so toggling it writes `block`.

use crate::constants::{DISPLAY_HIDDEN, DISPLAY_SHOWN};

/// Classified inline `display` value of an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayValue {
    Block,
    None,
    /// No inline value (empty string).
    #[default]
    Unset,
    Other(String),
}

impl DisplayValue {
    /// Classify a raw style value. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            DISPLAY_SHOWN => DisplayValue::Block,
            DISPLAY_HIDDEN => DisplayValue::None,
            "" => DisplayValue::Unset,
            other => DisplayValue::Other(other.to_owned()),
        }
    }

    pub fn as_css(&self) -> &str {
        match self {
            DisplayValue::Block => DISPLAY_SHOWN,
            DisplayValue::None => DISPLAY_HIDDEN,
            DisplayValue::Unset => "",
            DisplayValue::Other(s) => s,
        }
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        match self {
            DisplayValue::Block => Visibility::Shown,
            _ => Visibility::Hidden,
        }
    }

    /// Value a toggle writes: `block` becomes `none`, anything else `block`.
    #[inline]
    pub fn toggled(&self) -> DisplayValue {
        self.visibility().toggled().display()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    /// Canonical display value written for this state.
    #[inline]
    pub fn display(self) -> DisplayValue {
        match self {
            Visibility::Shown => DisplayValue::Block,
            Visibility::Hidden => DisplayValue::None,
        }
    }

    #[inline]
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!(DisplayValue::parse("block"), DisplayValue::Block);
        assert_eq!(DisplayValue::parse("none"), DisplayValue::None);
        assert_eq!(DisplayValue::parse(""), DisplayValue::Unset);
        assert_eq!(
            DisplayValue::parse("Block"),
            DisplayValue::Other("Block".into())
        );
        assert_eq!(
            DisplayValue::parse(" block"),
            DisplayValue::Other(" block".into())
        );
    }

    #[test]
    fn only_block_is_shown() {
        assert_eq!(DisplayValue::Block.visibility(), Visibility::Shown);
        for raw in ["none", "", "flex", "inline", "inline-block"] {
            assert_eq!(DisplayValue::parse(raw).visibility(), Visibility::Hidden);
        }
    }

    #[test]
    fn toggled_values() {
        assert_eq!(DisplayValue::Block.toggled(), DisplayValue::None);
        assert_eq!(DisplayValue::None.toggled(), DisplayValue::Block);
        assert_eq!(DisplayValue::Unset.toggled(), DisplayValue::Block);
        assert_eq!(
            DisplayValue::Other("flex".into()).toggled(),
            DisplayValue::Block
        );
    }

    #[test]
    fn as_css_matches_parse_input() {
        for raw in ["block", "none", "", "grid"] {
            assert_eq!(DisplayValue::parse(raw).as_css(), raw);
        }
    }
}
