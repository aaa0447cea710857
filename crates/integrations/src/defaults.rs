//! Built-in highlighters registered under the well-known ids.
//!
//! These serve every category out of the box; integrations override them via
//! the registry's replace-by-id protocol when a richer source is discovered.

use std::cell::RefCell;
use std::rc::Rc;

use highlight_core::{
    Blueprint, Building, BuildingHighlight, BuildingHighlighter, BuildingKind, DefaultShapes,
    HighlightConfig, HighlightRegistry, HighlighterId, Item, ItemHighlight, ItemHighlighter,
    KeyBinding, SprinklerTier,
};

/// Footprint anchor of the 3x3 junimo hut: range is centered on its middle tile.
pub(crate) const JUNIMO_HUT_ANCHOR: (u32, u32) = (1, 1);

/// Generic sprinkler highlight from the built-in tier shapes.
///
/// Shared with coverage-source overrides that opt into falling back to the
/// default when a queried variant is unknown to them.
pub(crate) fn default_sprinkler_highlight(
    shapes: &DefaultShapes,
    config: &HighlightConfig,
    item: &Item,
) -> Option<ItemHighlight> {
    let tier = SprinklerTier::from_item_name(&item.name)?;
    Some(ItemHighlight::new(
        config.sprinkler_range_tint,
        shapes.sprinkler_for_tier(tier).clone(),
    ))
}

pub(crate) fn is_beehouse(item: &Item) -> bool {
    item.name.to_ascii_lowercase().contains("bee house")
}

/// Built-in sprinkler highlighter: classifies items by tier name and serves
/// the (possibly retuned) default shape for that tier.
pub struct DefaultSprinklerHighlighter {
    shapes: Rc<RefCell<DefaultShapes>>,
}

impl DefaultSprinklerHighlighter {
    pub fn new(shapes: Rc<RefCell<DefaultShapes>>) -> Self {
        Self { shapes }
    }
}

impl ItemHighlighter for DefaultSprinklerHighlighter {
    fn id(&self) -> HighlighterId {
        HighlighterId::SPRINKLER
    }

    fn is_enabled(&self, config: &HighlightConfig) -> bool {
        config.show_sprinkler_range
    }

    fn input_binding(&self, config: &HighlightConfig) -> KeyBinding {
        config.sprinkler_range_key
    }

    fn shows_others_while_holding(&self, config: &HighlightConfig) -> bool {
        config.show_other_sprinklers_while_holding
    }

    fn lookup(&self, config: &HighlightConfig, item: &Item) -> Vec<ItemHighlight> {
        default_sprinkler_highlight(&self.shapes.borrow(), config, item)
            .into_iter()
            .collect()
    }
}

/// Built-in beehouse highlighter serving the default diamond.
pub struct DefaultBeehouseHighlighter {
    shapes: Rc<RefCell<DefaultShapes>>,
}

impl DefaultBeehouseHighlighter {
    pub fn new(shapes: Rc<RefCell<DefaultShapes>>) -> Self {
        Self { shapes }
    }
}

impl ItemHighlighter for DefaultBeehouseHighlighter {
    fn id(&self) -> HighlighterId {
        HighlighterId::BEEHOUSE
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

    fn lookup(&self, config: &HighlightConfig, item: &Item) -> Vec<ItemHighlight> {
        if is_beehouse(item) {
            vec![ItemHighlight::new(
                config.beehouse_range_tint,
                self.shapes.borrow().beehouse.clone(),
            )]
        } else {
            Vec::new()
        }
    }
}

/// Built-in junimo hut highlighter serving the default square.
pub struct DefaultJunimoHutHighlighter {
    shapes: Rc<RefCell<DefaultShapes>>,
}

impl DefaultJunimoHutHighlighter {
    pub fn new(shapes: Rc<RefCell<DefaultShapes>>) -> Self {
        Self { shapes }
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

impl BuildingHighlighter for DefaultJunimoHutHighlighter {
    fn id(&self) -> HighlighterId {
        HighlighterId::JUNIMO_HUT
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
        (blueprint.name == "Junimo Hut").then(|| self.highlight(config))
    }

    fn lookup_building(
        &mut self,
        config: &HighlightConfig,
        building: &Building,
    ) -> Option<BuildingHighlight> {
        (building.kind == BuildingKind::JunimoHut).then(|| self.highlight(config))
    }
}

/// Installs the built-in highlighters for every category.
pub fn register_defaults(registry: &mut HighlightRegistry, shapes: &Rc<RefCell<DefaultShapes>>) {
    registry.add_item(Box::new(DefaultSprinklerHighlighter::new(Rc::clone(
        shapes,
    ))));
    registry.add_item(Box::new(DefaultBeehouseHighlighter::new(Rc::clone(shapes))));
    registry.add_building(Box::new(DefaultJunimoHutHighlighter::new(Rc::clone(
        shapes,
    ))));
}
