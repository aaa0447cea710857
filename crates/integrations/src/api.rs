//! Capability contracts for optional external coverage sources.
//!
//! Each trait describes one kind of provider the host may or may not have
//! discovered at startup. Absence of a source is a normal detection outcome,
//! never an error; the probe phase simply leaves the corresponding slot of
//! [`DiscoveredSources`] empty and the integration is skipped.

use std::collections::HashMap;
use std::rc::Rc;

use highlight_core::{Offset, VariantKey};

/// Source reporting a single scalar sprinkler range (one upgrade tier).
pub trait SprinklerRangeSource {
    fn sprinkler_range(&self) -> i32;
}

/// Source reporting full per-variant sprinkler coverage as offset sets.
pub trait SprinklerCoverageSource {
    fn coverage(&self) -> HashMap<VariantKey, Vec<Offset>>;
}

/// Source reporting the junimo hut working radius.
pub trait JunimoHutSource {
    fn max_radius(&self) -> i32;
}

/// Source reporting the beehouse flower search radius.
pub trait BeehouseSource {
    fn search_radius(&self) -> i32;
}

/// Outcome of the host's one-shot probe phase: one optional adapter per
/// capability. Everything defaults to absent.
///
/// `Rc` because the whole protocol is single-threaded and adapters may be
/// shared between a registration and later probe steps.
#[derive(Default)]
pub struct DiscoveredSources {
    pub prismatic_tools: Option<Rc<dyn SprinklerRangeSource>>,
    pub radioactive_tools: Option<Rc<dyn SprinklerRangeSource>>,
    pub junimo_huts: Option<Rc<dyn JunimoHutSource>>,
    pub beehouses: Option<Rc<dyn BeehouseSource>>,
    pub grid_sprinklers: Option<Rc<dyn SprinklerCoverageSource>>,
    pub simple_sprinklers: Option<Rc<dyn SprinklerCoverageSource>>,
    pub line_sprinklers: Option<Rc<dyn SprinklerCoverageSource>>,
}

impl DiscoveredSources {
    pub fn new() -> Self {
        Self::default()
    }
}
