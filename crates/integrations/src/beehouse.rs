//! Beehouse override driven by an external flower search radius.

use std::cell::RefCell;
use std::rc::Rc;

use highlight_core::{
    CoverageMask, DefaultShapes, HighlightConfig, HighlighterId, Item, ItemHighlight,
    ItemHighlighter, KeyBinding, Monitor, Severity, manhattan_circle,
};

use crate::api::BeehouseSource;
use crate::defaults::is_beehouse;

/// Item highlighter recomputing the beehouse diamond from the source's
/// reported search radius.
///
/// The mask is rebuilt only when the reported radius changes. A non-positive
/// radius is recovered by substituting the built-in default shape and logging
/// once; the default keeps serving until the source reports a sane value.
pub struct SearchRadiusBeehouseHighlighter {
    source: Rc<dyn BeehouseSource>,
    shapes: Rc<RefCell<DefaultShapes>>,
    monitor: Rc<Monitor>,
    mask: CoverageMask,
    last_radius: Option<i32>,
}

impl SearchRadiusBeehouseHighlighter {
    pub fn new(
        source: Rc<dyn BeehouseSource>,
        shapes: Rc<RefCell<DefaultShapes>>,
        monitor: Rc<Monitor>,
    ) -> Self {
        let mask = shapes.borrow().beehouse.clone();
        Self {
            source,
            shapes,
            monitor,
            mask,
            last_radius: None,
        }
    }
}

impl ItemHighlighter for SearchRadiusBeehouseHighlighter {
    fn id(&self) -> HighlighterId {
        crate::ids::EXTENDED_BEEHOUSE
    }

    fn is_enabled(&self, config: &HighlightConfig) -> bool {
        config.show_beehouse_range
    }

    fn input_binding(&self, config: &HighlightConfig) -> KeyBinding {
        config.beehouse_range_key
    }

    fn shows_others_while_holding(&self, config: &HighlightConfig) -> bool {
        config.show_other_beehouses_while_holding
    }

    fn refresh(&mut self) {
        let radius = self.source.search_radius();
        if self.last_radius == Some(radius) {
            return;
        }
        self.last_radius = Some(radius);
        if radius > 1 {
            self.mask = manhattan_circle(radius as u32);
        } else {
            self.monitor.log_once(
                Severity::Info,
                format!("ignoring nonsense flower search radius {radius} from beehouse source"),
            );
            self.mask = self.shapes.borrow().beehouse.clone();
        }
    }

    fn lookup(&self, config: &HighlightConfig, item: &Item) -> Vec<ItemHighlight> {
        if is_beehouse(item) {
            vec![ItemHighlight::new(
                config.beehouse_range_tint,
                self.mask.clone(),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use highlight_core::VariantKey;

    use super::*;

    struct AdjustableRadius(Cell<i32>);

    impl BeehouseSource for AdjustableRadius {
        fn search_radius(&self) -> i32 {
            self.0.get()
        }
    }

    fn setup(radius: i32) -> (Rc<AdjustableRadius>, Rc<Monitor>, SearchRadiusBeehouseHighlighter) {
        let source = Rc::new(AdjustableRadius(Cell::new(radius)));
        let monitor = Rc::new(Monitor::new());
        let highlighter = SearchRadiusBeehouseHighlighter::new(
            Rc::clone(&source) as Rc<dyn BeehouseSource>,
            Rc::new(RefCell::new(DefaultShapes::new())),
            Rc::clone(&monitor),
        );
        (source, monitor, highlighter)
    }

    fn beehouse() -> Item {
        Item::new(VariantKey::new(709), "Bee House")
    }

    #[test]
    fn radius_change_rebuilds_the_diamond() {
        let (source, _, mut h) = setup(3);
        h.refresh();
        let config = HighlightConfig::default();
        assert_eq!(h.lookup(&config, &beehouse())[0].mask.width(), 7);

        source.0.set(6);
        h.refresh();
        assert_eq!(h.lookup(&config, &beehouse())[0].mask.width(), 13);
    }

    #[test]
    fn invalid_radius_substitutes_default_and_logs_once() {
        let (_, monitor, mut h) = setup(0);
        let config = HighlightConfig::default();

        for _ in 0..5 {
            h.refresh();
            let hits = h.lookup(&config, &beehouse());
            // Default diamond, radius 5.
            assert_eq!(hits[0].mask.width(), 11);
        }
        assert_eq!(monitor.once_count(), 1);
    }

    #[test]
    fn recovers_when_the_source_reports_a_valid_value_again() {
        let (source, monitor, mut h) = setup(0);
        let config = HighlightConfig::default();
        h.refresh();
        assert_eq!(h.lookup(&config, &beehouse())[0].mask.width(), 11);

        source.0.set(4);
        h.refresh();
        assert_eq!(h.lookup(&config, &beehouse())[0].mask.width(), 9);
        assert_eq!(monitor.once_count(), 1);
    }

    #[test]
    fn other_items_get_no_match() {
        let (_, _, mut h) = setup(3);
        h.refresh();
        let hits = h.lookup(
            &HighlightConfig::default(),
            &Item::new(VariantKey::new(599), "Sprinkler"),
        );
        assert!(hits.is_empty());
    }
}
