//! Coverage-table sprinkler override shared by every sprinkler source.

use std::cell::RefCell;
use std::rc::Rc;

use highlight_core::{
    DefaultShapes, HighlightConfig, HighlighterId, Item, ItemHighlight, ItemHighlighter,
    KeyBinding,
};

use crate::api::SprinklerCoverageSource;
use crate::cache::CoverageCache;
use crate::defaults::default_sprinkler_highlight;

/// Item highlighter fed by an external per-variant coverage table.
///
/// `refresh` pulls the source's current table into a [`CoverageCache`] once
/// per query pass; lookups are pure cache hits. With `fallback_to_default`
/// set, a variant unknown to the source is delegated to the generic built-in
/// sprinkler lookup instead of being reported as "no match" (the line-shaped
/// source only covers its own variants).
pub struct CoverageSprinklerHighlighter {
    id: HighlighterId,
    source: Rc<dyn SprinklerCoverageSource>,
    cache: CoverageCache,
    fallback_to_default: bool,
    shapes: Rc<RefCell<DefaultShapes>>,
}

impl CoverageSprinklerHighlighter {
    pub fn new(
        id: HighlighterId,
        source: Rc<dyn SprinklerCoverageSource>,
        fallback_to_default: bool,
        shapes: Rc<RefCell<DefaultShapes>>,
    ) -> Self {
        Self {
            id,
            source,
            cache: CoverageCache::new(),
            fallback_to_default,
            shapes,
        }
    }
}

impl ItemHighlighter for CoverageSprinklerHighlighter {
    fn id(&self) -> HighlighterId {
        self.id
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

    fn refresh(&mut self) {
        let table = self.source.coverage();
        self.cache.refresh(&table);
    }

    fn lookup(&self, config: &HighlightConfig, item: &Item) -> Vec<ItemHighlight> {
        if let Some(mask) = self.cache.lookup(item.variant) {
            return vec![ItemHighlight::new(
                config.sprinkler_range_tint,
                mask.clone(),
            )];
        }
        if self.fallback_to_default {
            return default_sprinkler_highlight(&self.shapes.borrow(), config, item)
                .into_iter()
                .collect();
        }
        Vec::new()
    }

    fn reset(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use highlight_core::{Offset, VariantKey};

    use super::*;

    struct FixedCoverage(HashMap<VariantKey, Vec<Offset>>);

    impl SprinklerCoverageSource for FixedCoverage {
        fn coverage(&self) -> HashMap<VariantKey, Vec<Offset>> {
            self.0.clone()
        }
    }

    fn highlighter(fallback: bool) -> CoverageSprinklerHighlighter {
        let source = Rc::new(FixedCoverage(HashMap::from([(
            VariantKey::new(599),
            vec![Offset::new(0, 1), Offset::new(0, 2)],
        )])));
        CoverageSprinklerHighlighter::new(
            HighlighterId::new("test/coverage-sprinkler"),
            source,
            fallback,
            Rc::new(RefCell::new(DefaultShapes::new())),
        )
    }

    #[test]
    fn lookup_serves_the_cached_variant_mask() {
        let mut h = highlighter(false);
        h.refresh();
        let hits = h.lookup(
            &HighlightConfig::default(),
            &Item::new(VariantKey::new(599), "Sprinkler"),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].mask.height(), 5);
        assert!(hits[0].mask.contains(Offset::new(0, 2)));
    }

    #[test]
    fn unknown_variant_is_no_match_without_fallback() {
        let mut h = highlighter(false);
        h.refresh();
        let hits = h.lookup(
            &HighlightConfig::default(),
            &Item::new(VariantKey::new(621), "Quality Sprinkler"),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn unknown_variant_delegates_with_fallback() {
        let mut h = highlighter(true);
        h.refresh();
        let hits = h.lookup(
            &HighlightConfig::default(),
            &Item::new(VariantKey::new(621), "Quality Sprinkler"),
        );
        assert_eq!(hits.len(), 1);
        // Quality tier default is the full 3x3 square.
        assert_eq!(hits[0].mask.width(), 3);
        assert!(hits[0].mask.contains(Offset::new(1, 1)));
    }

    #[test]
    fn fallback_still_ignores_non_sprinklers() {
        let mut h = highlighter(true);
        h.refresh();
        let hits = h.lookup(
            &HighlightConfig::default(),
            &Item::new(VariantKey::new(709), "Bee House"),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn reset_drops_the_cache() {
        let mut h = highlighter(false);
        h.refresh();
        h.reset();
        let hits = h.lookup(
            &HighlightConfig::default(),
            &Item::new(VariantKey::new(599), "Sprinkler"),
        );
        assert!(hits.is_empty());
    }
}
