//! Range-highlight data model and host-side registry.
//!
//! `highlight-core` defines the coverage-mask representation, the built-in
//! fallback shapes, and the named-registration protocol a host render pass
//! drives each frame. Optional external coverage sources plug in through
//! `highlight-integrations`, which builds on the types re-exported here.
pub mod config;
pub mod grid;
pub mod monitor;
pub mod registry;
pub mod types;

pub use config::{HighlightConfig, KeyBinding, ParseTintError, Tint};
pub use grid::{
    CoverageMask, DefaultShapes, Offset, SprinklerTier, manhattan_circle, square, square_circle,
};
pub use monitor::{Monitor, Severity};
pub use registry::{
    BuildingHighlight, BuildingHighlighter, HighlightRegistry, HighlighterId, ItemHighlight,
    ItemHighlighter,
};
pub use types::{Blueprint, Building, BuildingKind, Item, VariantKey};
