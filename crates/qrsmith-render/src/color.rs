//! Hex color normalization.
//!
//! The settings form pairs each free-text color field with a native
//! color picker. The picker only ever holds a normalized value; this
//! module decides whether a typed value qualifies to be pushed there.

use std::fmt;

/// A normalized six-digit hex color: lower case with a leading `#`.
///
/// Values can only be constructed through [`HexColor::normalize`], so
/// holding one is proof the string is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    /// Normalize a user-typed color string.
    ///
    /// Accepts surrounding whitespace, an optional leading `#`, and
    /// exactly six hexadecimal digits in either case. Returns `None`
    /// for anything else -- an invalid value is an expected state of
    /// the text field while the user is editing, not an error.
    ///
    /// Normalization is idempotent: feeding a normalized value back in
    /// returns it unchanged.
    #[must_use]
    pub fn normalize(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// The normalized `#rrggbb` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode to an RGB triple for raster rendering.
    #[must_use]
    pub fn rgb(&self) -> [u8; 3] {
        // Digits were validated at construction; the fallback is
        // unreachable.
        let hex = &self.0[1..];
        let channel = |r: std::ops::Range<usize>| u8::from_str_radix(&hex[r], 16).unwrap_or(0);
        [channel(0..2), channel(2..4), channel(4..6)]
    }

    /// Opaque white, the default light-module color.
    #[must_use]
    pub fn white() -> Self {
        Self("#ffffff".to_owned())
    }

    /// Opaque black, the default dark-module color.
    #[must_use]
    pub fn black() -> Self {
        Self("#000000".to_owned())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent() {
        let first = HexColor::normalize("#A1B2C3").unwrap();
        let second = HexColor::normalize(first.as_str()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn normalize_lowercases_and_prefixes() {
        assert_eq!(
            HexColor::normalize("AbCdEf").unwrap().as_str(),
            "#abcdef",
            "bare digits get a leading '#' and lower case"
        );
        assert_eq!(HexColor::normalize("#FF00aa").unwrap().as_str(), "#ff00aa");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(
            HexColor::normalize("  #336699\t").unwrap().as_str(),
            "#336699"
        );
    }

    #[test]
    fn normalize_rejects_malformed_input() {
        for input in [
            "",
            "#",
            "#fff",      // short form is not accepted
            "#fffffff",  // seven digits
            "12345",     // five digits
            "#gggggg",   // non-hex digits
            "##aabbcc",  // double prefix
            "#aab bcc",  // interior whitespace
            "rgb(0,0,0)",
        ] {
            assert!(
                HexColor::normalize(input).is_none(),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn rgb_decodes_channels() {
        assert_eq!(HexColor::normalize("#ff8000").unwrap().rgb(), [255, 128, 0]);
        assert_eq!(HexColor::black().rgb(), [0, 0, 0]);
        assert_eq!(HexColor::white().rgb(), [255, 255, 255]);
    }

    #[test]
    fn defaults_are_normalized() {
        // white()/black() bypass normalize(); make sure they agree with it.
        assert_eq!(HexColor::normalize("#ffffff").unwrap(), HexColor::white());
        assert_eq!(HexColor::normalize("#000000").unwrap(), HexColor::black());
    }
}
