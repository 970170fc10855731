//! The QR request model: what the settings form produces.

use std::fmt;

use crate::color::HexColor;

/// QR error-correction level: redundancy traded against data capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EcLevel {
    /// Recovers from ~7% damage.
    L,
    /// Recovers from ~15% damage.
    #[default]
    M,
    /// Recovers from ~25% damage.
    Q,
    /// Recovers from ~30% damage.
    H,
}

impl EcLevel {
    /// All levels in increasing redundancy order, for the form select.
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Single-letter code used as the select option value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }

    /// Display label for the select dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::L => "L (low)",
            Self::M => "M (medium)",
            Self::Q => "Q (quartile)",
            Self::H => "H (high)",
        }
    }

    /// Parse a select option value back to a level.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Self::L),
            "M" => Some(Self::M),
            "Q" => Some(Self::Q),
            "H" => Some(Self::H),
            _ => None,
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything a render needs, rebuilt from form state on every change.
///
/// Requests are transient: nothing outlives a single generation run,
/// and nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QrRequest {
    /// Content to encode. Must be non-empty to render.
    pub text: String,
    /// Error-correction level.
    pub level: EcLevel,
    /// Light modules and quiet zone; also the output wrapper backdrop.
    pub background: HexColor,
    /// Dark modules.
    pub foreground: HexColor,
}

impl Default for QrRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            level: EcLevel::default(),
            background: HexColor::white(),
            foreground: HexColor::black(),
        }
    }
}
