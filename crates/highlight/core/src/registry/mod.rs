//! Named highlighter registrations and the per-pass query driver.
//!
//! The registry owns the active set of item and building highlighters, keyed
//! by [`HighlighterId`]. A later registration under the same id supersedes an
//! earlier one, and [`HighlightRegistry::replace_item`] performs the
//! remove-then-add override idiom as a single operation so there is never an
//! observable gap with no handler registered for a category.
//!
//! # Query pass
//!
//! The host drives one pass per frame:
//! 1. [`HighlightRegistry::begin_pass`] refreshes every enabled item
//!    highlighter exactly once.
//! 2. [`HighlightRegistry::item_highlights`] /
//!    [`HighlightRegistry::building_highlights`] run per candidate object.
//! 3. [`HighlightRegistry::end_pass`] resets the entries refreshed in step 1.

use std::fmt;

use tracing::debug;

use crate::config::{HighlightConfig, KeyBinding, Tint};
use crate::grid::CoverageMask;
use crate::types::{Blueprint, Building, Item};

/// Opaque typed handle identifying a registration.
///
/// Well-known ids for the built-in defaults are provided as constants;
/// integrations mint their own with [`HighlighterId::new`]. Using a typed
/// handle instead of free strings catches typo'd names at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HighlighterId(&'static str);

impl HighlighterId {
    /// Built-in sprinkler highlighter.
    pub const SPRINKLER: Self = Self::new("highlight/sprinkler");
    /// Built-in beehouse highlighter.
    pub const BEEHOUSE: Self = Self::new("highlight/beehouse");
    /// Built-in junimo hut highlighter.
    pub const JUNIMO_HUT: Self = Self::new("highlight/junimo-hut");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for HighlighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One tint/mask pair produced by an item highlighter lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemHighlight {
    pub tint: Tint,
    pub mask: CoverageMask,
}

impl ItemHighlight {
    pub fn new(tint: Tint, mask: CoverageMask) -> Self {
        Self { tint, mask }
    }
}

/// Highlight for a building, anchored within its footprint.
///
/// `anchor_col`/`anchor_row` give the tile of the footprint the mask is
/// centered on (e.g. `(1, 1)` for a 3x3 hut).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingHighlight {
    pub tint: Tint,
    pub mask: CoverageMask,
    pub anchor_col: u32,
    pub anchor_row: u32,
}

impl BuildingHighlight {
    pub fn new(tint: Tint, mask: CoverageMask, anchor_col: u32, anchor_row: u32) -> Self {
        Self {
            tint,
            mask,
            anchor_col,
            anchor_row,
        }
    }
}

/// Named bundle of callbacks highlighting a category of placeable items.
///
/// `lookup` returning an empty vec means "this highlighter has nothing to say
/// about this object"; it is not an error.
pub trait ItemHighlighter {
    fn id(&self) -> HighlighterId;

    /// Re-evaluated per query, typically tied to a user toggle.
    fn is_enabled(&self, config: &HighlightConfig) -> bool;

    /// The user action that reveals this highlight while held.
    fn input_binding(&self, config: &HighlightConfig) -> KeyBinding;

    /// Whether holding one such item reveals the ranges of placed others.
    fn shows_others_while_holding(&self, config: &HighlightConfig) -> bool;

    /// Called once per query pass, before any lookups. Idempotent.
    fn refresh(&mut self) {}

    fn lookup(&self, config: &HighlightConfig, item: &Item) -> Vec<ItemHighlight>;

    /// Called when the highlight stops being displayed.
    fn reset(&mut self) {}
}

/// Named bundle of callbacks highlighting a category of buildings, both as a
/// placement blueprint and once placed.
pub trait BuildingHighlighter {
    fn id(&self) -> HighlighterId;

    fn is_enabled(&self, config: &HighlightConfig) -> bool;

    fn input_binding(&self, config: &HighlightConfig) -> KeyBinding;

    fn lookup_blueprint(
        &mut self,
        config: &HighlightConfig,
        blueprint: &Blueprint,
    ) -> Option<BuildingHighlight>;

    fn lookup_building(
        &mut self,
        config: &HighlightConfig,
        building: &Building,
    ) -> Option<BuildingHighlight>;
}

/// Owns the active registrations and drives the per-frame query pass.
///
/// Iteration order is insertion order; within a category the first enabled
/// highlighter producing a result wins. All mutation happens on the single
/// thread driving the pass, so no locking is involved.
#[derive(Default)]
pub struct HighlightRegistry {
    items: Vec<Box<dyn ItemHighlighter>>,
    buildings: Vec<Box<dyn BuildingHighlighter>>,
    refreshed: Vec<HighlighterId>,
}

impl HighlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item highlighter. A previous registration under the same
    /// id is superseded (last writer wins).
    pub fn add_item(&mut self, entry: Box<dyn ItemHighlighter>) {
        let id = entry.id();
        self.items.retain(|existing| existing.id() != id);
        debug!(target: "highlight::registry", %id, "registered item highlighter");
        self.items.push(entry);
    }

    /// Registers a building highlighter, superseding any previous one with
    /// the same id.
    pub fn add_building(&mut self, entry: Box<dyn BuildingHighlighter>) {
        let id = entry.id();
        self.buildings.retain(|existing| existing.id() != id);
        debug!(target: "highlight::registry", %id, "registered building highlighter");
        self.buildings.push(entry);
    }

    /// Removes the item highlighter with the given id. Silent no-op when the
    /// id is not registered.
    pub fn remove_item(&mut self, id: HighlighterId) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing.id() != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(target: "highlight::registry", %id, "removed item highlighter");
        }
        removed
    }

    /// Removes the building highlighter with the given id, if present.
    pub fn remove_building(&mut self, id: HighlighterId) -> bool {
        let before = self.buildings.len();
        self.buildings.retain(|existing| existing.id() != id);
        let removed = self.buildings.len() != before;
        if removed {
            debug!(target: "highlight::registry", %id, "removed building highlighter");
        }
        removed
    }

    /// Replaces the registration under `old` with `entry` in one step,
    /// preserving its position in the iteration order. When `old` is not
    /// registered this degrades to a plain add.
    pub fn replace_item(&mut self, old: HighlighterId, entry: Box<dyn ItemHighlighter>) {
        let new_id = entry.id();
        if new_id != old {
            self.items.retain(|existing| existing.id() != new_id);
        }
        match self.items.iter().position(|existing| existing.id() == old) {
            Some(pos) => {
                debug!(
                    target: "highlight::registry",
                    %old, new = %new_id, "overrode item highlighter"
                );
                self.items[pos] = entry;
            }
            None => self.add_item(entry),
        }
    }

    /// Building-side counterpart of [`HighlightRegistry::replace_item`].
    pub fn replace_building(&mut self, old: HighlighterId, entry: Box<dyn BuildingHighlighter>) {
        let new_id = entry.id();
        if new_id != old {
            self.buildings.retain(|existing| existing.id() != new_id);
        }
        match self
            .buildings
            .iter()
            .position(|existing| existing.id() == old)
        {
            Some(pos) => {
                debug!(
                    target: "highlight::registry",
                    %old, new = %new_id, "overrode building highlighter"
                );
                self.buildings[pos] = entry;
            }
            None => self.add_building(entry),
        }
    }

    pub fn item_ids(&self) -> impl Iterator<Item = HighlighterId> + '_ {
        self.items.iter().map(|entry| entry.id())
    }

    pub fn building_ids(&self) -> impl Iterator<Item = HighlighterId> + '_ {
        self.buildings.iter().map(|entry| entry.id())
    }

    /// Read access to the active item registrations, in iteration order.
    pub fn item_entries(&self) -> impl Iterator<Item = &dyn ItemHighlighter> {
        self.items.iter().map(|entry| entry.as_ref())
    }

    /// Starts a query pass: refreshes every enabled item highlighter once.
    ///
    /// Refreshing here rather than per lookup amortizes the cost across all
    /// objects queried in the same pass.
    pub fn begin_pass(&mut self, config: &HighlightConfig) {
        for entry in &mut self.items {
            if entry.is_enabled(config) {
                entry.refresh();
                self.refreshed.push(entry.id());
            }
        }
    }

    /// Highlights for one placed or held item. The first enabled highlighter
    /// producing a non-empty result is the one that serves the query.
    pub fn item_highlights(&self, config: &HighlightConfig, item: &Item) -> Vec<ItemHighlight> {
        for entry in &self.items {
            if !entry.is_enabled(config) {
                continue;
            }
            let highlights = entry.lookup(config, item);
            if !highlights.is_empty() {
                return highlights;
            }
        }
        Vec::new()
    }

    /// Highlight for a building blueprint being placed.
    pub fn blueprint_highlight(
        &mut self,
        config: &HighlightConfig,
        blueprint: &Blueprint,
    ) -> Option<BuildingHighlight> {
        self.buildings
            .iter_mut()
            .filter(|entry| entry.is_enabled(config))
            .find_map(|entry| entry.lookup_blueprint(config, blueprint))
    }

    /// Highlight for an already-placed building.
    pub fn building_highlight(
        &mut self,
        config: &HighlightConfig,
        building: &Building,
    ) -> Option<BuildingHighlight> {
        self.buildings
            .iter_mut()
            .filter(|entry| entry.is_enabled(config))
            .find_map(|entry| entry.lookup_building(config, building))
    }

    /// Ends the pass: resets exactly the entries refreshed by `begin_pass`.
    pub fn end_pass(&mut self) {
        let refreshed = std::mem::take(&mut self.refreshed);
        for id in refreshed {
            if let Some(entry) = self.items.iter_mut().find(|entry| entry.id() == id) {
                entry.reset();
            }
        }
    }
}
