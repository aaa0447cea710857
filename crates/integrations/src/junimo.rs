//! Junimo hut override driven by an external working radius.

use std::cell::RefCell;
use std::rc::Rc;

use highlight_core::{
    Blueprint, Building, BuildingHighlight, BuildingHighlighter, BuildingKind, DefaultShapes,
    HighlightConfig, HighlighterId, KeyBinding, Monitor, Severity,
};

use crate::api::JunimoHutSource;
use crate::defaults::JUNIMO_HUT_ANCHOR;

/// Building highlighter that re-reads the hut radius on every lookup, so a
/// radius upgrade earned mid-session is reflected immediately.
///
/// The radius retunes the shared default shape in place; a non-positive value
/// is ignored with a single log line and the previous shape keeps serving.
pub struct MaxRadiusJunimoHutHighlighter {
    source: Rc<dyn JunimoHutSource>,
    shapes: Rc<RefCell<DefaultShapes>>,
    monitor: Rc<Monitor>,
}

impl MaxRadiusJunimoHutHighlighter {
    pub fn new(
        source: Rc<dyn JunimoHutSource>,
        shapes: Rc<RefCell<DefaultShapes>>,
        monitor: Rc<Monitor>,
    ) -> Self {
        Self {
            source,
            shapes,
            monitor,
        }
    }

    fn retune_shape(&self) {
        let radius = self.source.max_radius();
        if radius > 1 {
            self.shapes.borrow_mut().set_junimo_radius(radius as u32);
        } else {
            self.monitor.log_once(
                Severity::Info,
                format!("ignoring nonsense value {radius} from junimo hut source for hut radius"),
            );
        }
    }

    fn highlight(&self, config: &HighlightConfig) -> BuildingHighlight {
        let (anchor_col, anchor_row) = JUNIMO_HUT_ANCHOR;
        BuildingHighlight::new(
            config.junimo_range_tint,
            self.shapes.borrow().junimo_hut.clone(),
            anchor_col,
            anchor_row,
        )
    }
}

impl BuildingHighlighter for MaxRadiusJunimoHutHighlighter {
    fn id(&self) -> HighlighterId {
        crate::ids::EXTENDED_JUNIMO_HUT
    }

    fn is_enabled(&self, config: &HighlightConfig) -> bool {
        config.show_junimo_range
    }

    fn input_binding(&self, config: &HighlightConfig) -> KeyBinding {
        config.junimo_range_key
    }

    fn lookup_blueprint(
        &mut self,
        config: &HighlightConfig,
        blueprint: &Blueprint,
    ) -> Option<BuildingHighlight> {
        if blueprint.name != "Junimo Hut" {
            return None;
        }
        self.retune_shape();
        Some(self.highlight(config))
    }

    fn lookup_building(
        &mut self,
        config: &HighlightConfig,
        building: &Building,
    ) -> Option<BuildingHighlight> {
        if building.kind != BuildingKind::JunimoHut {
            return None;
        }
        self.retune_shape();
        Some(self.highlight(config))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct AdjustableRadius(Cell<i32>);

    impl JunimoHutSource for AdjustableRadius {
        fn max_radius(&self) -> i32 {
            self.0.get()
        }
    }

    fn setup(
        radius: i32,
    ) -> (
        Rc<AdjustableRadius>,
        Rc<Monitor>,
        MaxRadiusJunimoHutHighlighter,
    ) {
        let source = Rc::new(AdjustableRadius(Cell::new(radius)));
        let monitor = Rc::new(Monitor::new());
        let highlighter = MaxRadiusJunimoHutHighlighter::new(
            Rc::clone(&source) as Rc<dyn JunimoHutSource>,
            Rc::new(RefCell::new(DefaultShapes::new())),
            Rc::clone(&monitor),
        );
        (source, monitor, highlighter)
    }

    #[test]
    fn lookup_reflects_the_current_radius() {
        let (source, _, mut h) = setup(10);
        let config = HighlightConfig::default();

        let hut = Building::new(BuildingKind::JunimoHut);
        assert_eq!(h.lookup_building(&config, &hut).unwrap().mask.width(), 21);

        source.0.set(12);
        assert_eq!(h.lookup_building(&config, &hut).unwrap().mask.width(), 25);
    }

    #[test]
    fn invalid_radius_keeps_the_default_shape_and_logs_once() {
        let (_, monitor, mut h) = setup(0);
        let config = HighlightConfig::default();
        let hut = Building::new(BuildingKind::JunimoHut);

        for _ in 0..3 {
            let highlight = h.lookup_building(&config, &hut).unwrap();
            assert_eq!(highlight.mask.width(), 17);
        }
        assert_eq!(monitor.once_count(), 1);
    }

    #[test]
    fn other_buildings_and_blueprints_get_no_match() {
        let (_, _, mut h) = setup(10);
        let config = HighlightConfig::default();
        assert!(
            h.lookup_building(&config, &Building::new(BuildingKind::Coop))
                .is_none()
        );
        assert!(h.lookup_blueprint(&config, &Blueprint::new("Barn")).is_none());
    }
}
