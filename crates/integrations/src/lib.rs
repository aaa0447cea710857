//! Optional coverage-source integrations for the highlight registry.
//!
//! The host probes for external coverage providers once at startup and hands
//! the resulting [`DiscoveredSources`] to [`Integrations::register_all`],
//! which folds over the probes in a fixed order. Each available source
//! overrides the built-in registration for its category through the
//! registry's atomic replace-by-id; within the sprinkler category the last
//! detected source wins.
pub mod api;
pub mod cache;
pub mod defaults;

mod beehouse;
mod junimo;
mod sprinkler;
mod tools;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use highlight_core::{
    DefaultShapes, HighlightRegistry, HighlighterId, Monitor, SprinklerTier,
};

pub use api::{
    BeehouseSource, DiscoveredSources, JunimoHutSource, SprinklerCoverageSource,
    SprinklerRangeSource,
};
pub use beehouse::SearchRadiusBeehouseHighlighter;
pub use cache::CoverageCache;
pub use defaults::register_defaults;
pub use junimo::MaxRadiusJunimoHutHighlighter;
pub use sprinkler::CoverageSprinklerHighlighter;
pub use tools::retune_sprinkler_tier;

/// Registration ids minted by the integrations in this crate.
pub mod ids {
    use highlight_core::HighlighterId;

    pub const GRID_SPRINKLER: HighlighterId = HighlighterId::new("highlight/grid-sprinkler");
    pub const SIMPLE_SPRINKLER: HighlighterId = HighlighterId::new("highlight/simple-sprinkler");
    pub const LINE_SPRINKLER: HighlighterId = HighlighterId::new("highlight/line-sprinkler");
    pub const EXTENDED_BEEHOUSE: HighlighterId = HighlighterId::new("highlight/extended-beehouse");
    pub const EXTENDED_JUNIMO_HUT: HighlighterId =
        HighlighterId::new("highlight/extended-junimo-hut");
}

/// Applies every available integration to the registry, in probe order.
pub struct Integrations<'a> {
    registry: &'a mut HighlightRegistry,
    shapes: Rc<RefCell<DefaultShapes>>,
    monitor: Rc<Monitor>,
    active_sprinkler: HighlighterId,
}

impl<'a> Integrations<'a> {
    /// Folds the discovered sources into the registry.
    ///
    /// Probe order is fixed: the scalar tool ranges first (they only retune
    /// default shapes), then the junimo hut and beehouse overrides, then the
    /// sprinkler coverage sources grid, simple, line. Each sprinkler source
    /// replaces whichever sprinkler entry the previous step left active, so
    /// the last detected one serves the queries.
    pub fn register_all(
        sources: &DiscoveredSources,
        registry: &'a mut HighlightRegistry,
        shapes: &Rc<RefCell<DefaultShapes>>,
        monitor: &Rc<Monitor>,
    ) {
        let mut integrations = Self {
            registry,
            shapes: Rc::clone(shapes),
            monitor: Rc::clone(monitor),
            active_sprinkler: HighlighterId::SPRINKLER,
        };
        integrations.integrate_range_tool(
            sources.prismatic_tools.as_deref(),
            SprinklerTier::Prismatic,
        );
        integrations.integrate_range_tool(
            sources.radioactive_tools.as_deref(),
            SprinklerTier::Radioactive,
        );
        integrations.integrate_junimo_huts(sources.junimo_huts.as_ref());
        integrations.integrate_beehouses(sources.beehouses.as_ref());
        integrations.integrate_coverage_sprinklers(
            sources.grid_sprinklers.as_ref(),
            ids::GRID_SPRINKLER,
            false,
        );
        integrations.integrate_coverage_sprinklers(
            sources.simple_sprinklers.as_ref(),
            ids::SIMPLE_SPRINKLER,
            false,
        );
        // The line-shaped source only knows its own variants; regular
        // sprinklers fall through to the built-in shapes.
        integrations.integrate_coverage_sprinklers(
            sources.line_sprinklers.as_ref(),
            ids::LINE_SPRINKLER,
            true,
        );
    }

    fn integrate_range_tool(
        &mut self,
        source: Option<&dyn SprinklerRangeSource>,
        tier: SprinklerTier,
    ) {
        let Some(source) = source else { return };
        debug!(target: "highlight::integrations", %tier, "sprinkler range tool source detected");
        retune_sprinkler_tier(source, tier, &self.shapes, &self.monitor);
    }

    fn integrate_junimo_huts(&mut self, source: Option<&Rc<dyn JunimoHutSource>>) {
        let Some(source) = source else { return };
        debug!(target: "highlight::integrations", "junimo hut radius source detected");
        self.registry.replace_building(
            HighlighterId::JUNIMO_HUT,
            Box::new(MaxRadiusJunimoHutHighlighter::new(
                Rc::clone(source),
                Rc::clone(&self.shapes),
                Rc::clone(&self.monitor),
            )),
        );
    }

    fn integrate_beehouses(&mut self, source: Option<&Rc<dyn BeehouseSource>>) {
        let Some(source) = source else { return };
        debug!(target: "highlight::integrations", "beehouse search radius source detected");
        self.registry.replace_item(
            HighlighterId::BEEHOUSE,
            Box::new(SearchRadiusBeehouseHighlighter::new(
                Rc::clone(source),
                Rc::clone(&self.shapes),
                Rc::clone(&self.monitor),
            )),
        );
    }

    fn integrate_coverage_sprinklers(
        &mut self,
        source: Option<&Rc<dyn SprinklerCoverageSource>>,
        id: HighlighterId,
        fallback_to_default: bool,
    ) {
        let Some(source) = source else { return };
        debug!(target: "highlight::integrations", %id, "sprinkler coverage source detected");
        self.registry.replace_item(
            self.active_sprinkler,
            Box::new(CoverageSprinklerHighlighter::new(
                id,
                Rc::clone(source),
                fallback_to_default,
                Rc::clone(&self.shapes),
            )),
        );
        self.active_sprinkler = id;
    }
}
