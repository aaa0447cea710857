//! User-facing configuration: per-category toggles, key bindings, and tints.
//!
//! The host owns persistence and the configuration UI; this crate only
//! defines the serializable shape and its defaults.

use std::fmt;
use std::str::FromStr;

/// RGBA highlight color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Error parsing a `#rrggbb` / `#rrggbbaa` tint string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTintError {
    #[error("tint must start with '#'")]
    MissingHash,
    #[error("tint must have 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("tint contains a non-hex digit")]
    BadDigit,
}

impl FromStr for Tint {
    type Err = ParseTintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseTintError::MissingHash)?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseTintError::BadLength(hex.len()));
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseTintError::BadDigit)
        };
        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
            a: if hex.len() == 8 { component(6..8)? } else { 0xff },
        })
    }
}

/// User action that reveals a highlight while held.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum KeyBinding {
    None,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    H,
    J,
    O,
    R,
}

/// Toggles, key bindings, and tints for every highlight category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub show_sprinkler_range: bool,
    pub sprinkler_range_key: KeyBinding,
    pub sprinkler_range_tint: Tint,
    pub show_other_sprinklers_while_holding: bool,

    pub show_beehouse_range: bool,
    pub beehouse_range_key: KeyBinding,
    pub beehouse_range_tint: Tint,
    pub show_other_beehouses_while_holding: bool,

    pub show_junimo_range: bool,
    pub junimo_range_key: KeyBinding,
    pub junimo_range_tint: Tint,
}

impl HighlightConfig {
    pub const DEFAULT_SPRINKLER_TINT: Tint = Tint::rgba(0x28, 0x64, 0xe6, 0x7f);
    pub const DEFAULT_BEEHOUSE_TINT: Tint = Tint::rgba(0xe6, 0xc8, 0x28, 0x7f);
    pub const DEFAULT_JUNIMO_TINT: Tint = Tint::rgba(0x46, 0xb4, 0x46, 0x7f);

    pub fn new() -> Self {
        Self {
            show_sprinkler_range: true,
            sprinkler_range_key: KeyBinding::R,
            sprinkler_range_tint: Self::DEFAULT_SPRINKLER_TINT,
            show_other_sprinklers_while_holding: true,

            show_beehouse_range: true,
            beehouse_range_key: KeyBinding::H,
            beehouse_range_tint: Self::DEFAULT_BEEHOUSE_TINT,
            show_other_beehouses_while_holding: true,

            show_junimo_range: true,
            junimo_range_key: KeyBinding::J,
            junimo_range_tint: Self::DEFAULT_JUNIMO_TINT,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}
