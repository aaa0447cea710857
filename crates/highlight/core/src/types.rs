//! Query-side views of the game objects handed to highlighter lookups.

use std::fmt;

/// Identifier distinguishing coverage-relevant sub-types of an otherwise
/// similar item category (e.g. a sprinkler upgrade tier's item id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey(pub u32);

impl VariantKey {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placed or held item as seen by an item highlighter lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub variant: VariantKey,
    pub name: String,
}

impl Item {
    pub fn new(variant: VariantKey, name: impl Into<String>) -> Self {
        Self {
            variant,
            name: name.into(),
        }
    }
}

/// A building under construction, identified by its blueprint name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blueprint {
    pub name: String,
}

impl Blueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Kinds of placed buildings a highlighter can be queried about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum BuildingKind {
    #[strum(serialize = "Junimo Hut")]
    JunimoHut,
    Barn,
    Coop,
    Mill,
    Other,
}

/// A placed building as seen by a building highlighter lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Building {
    pub kind: BuildingKind,
}

impl Building {
    pub const fn new(kind: BuildingKind) -> Self {
        Self { kind }
    }
}
