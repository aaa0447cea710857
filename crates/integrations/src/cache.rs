//! Per-source memoization of variant coverage masks.

use std::collections::HashMap;

use highlight_core::{CoverageMask, Offset, VariantKey};

/// Memoizes the dense mask per variant key reported by one coverage source.
///
/// `refresh` is called once per query pass (not once per lookup), so the
/// rebuild cost is amortized across every object queried in that pass.
/// Lookups never force a refresh; before the first refresh every lookup
/// misses.
///
/// A refresh is a full replacement of the upstream table: variants the source
/// no longer reports are purged, so removed variants neither render stale
/// coverage nor grow the cache without bound.
#[derive(Debug, Default)]
pub struct CoverageCache {
    masks: HashMap<VariantKey, CoverageMask>,
    populated: bool,
}

impl CoverageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the cached mask for every variant in the reported table and
    /// drops variants that are no longer reported.
    pub fn refresh(&mut self, table: &HashMap<VariantKey, Vec<Offset>>) {
        self.masks.retain(|key, _| table.contains_key(key));
        for (key, offsets) in table {
            self.masks
                .insert(*key, CoverageMask::from_offsets(offsets.iter().copied()));
        }
        self.populated = true;
    }

    /// Cached mask for the key, if the last refresh saw that variant.
    pub fn lookup(&self, key: VariantKey) -> Option<&CoverageMask> {
        self.masks.get(&key)
    }

    /// True once at least one refresh has run.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Drops all cached masks and returns to the uninitialized state.
    pub fn clear(&mut self) {
        self.masks.clear();
        self.populated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u32, &[(i32, i32)])]) -> HashMap<VariantKey, Vec<Offset>> {
        entries
            .iter()
            .map(|(key, offsets)| {
                (
                    VariantKey::new(*key),
                    offsets.iter().map(|&(x, y)| Offset::new(x, y)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn lookup_misses_before_first_refresh() {
        let cache = CoverageCache::new();
        assert!(!cache.is_populated());
        assert!(cache.lookup(VariantKey::new(5)).is_none());
    }

    #[test]
    fn refresh_builds_a_mask_per_variant() {
        let mut cache = CoverageCache::new();
        cache.refresh(&table(&[(5, &[(0, 1), (0, 2)]), (7, &[(1, 0)])]));

        let tall = cache.lookup(VariantKey::new(5)).unwrap();
        assert_eq!((tall.width(), tall.height()), (1, 5));
        assert!(tall.contains(Offset::new(0, 1)));
        assert!(tall.contains(Offset::new(0, 2)));

        let wide = cache.lookup(VariantKey::new(7)).unwrap();
        assert_eq!((wide.width(), wide.height()), (3, 1));
        assert!(wide.contains(Offset::new(1, 0)));

        assert!(cache.lookup(VariantKey::new(99)).is_none());
    }

    #[test]
    fn refresh_is_idempotent_for_an_unchanged_table() {
        let upstream = table(&[(5, &[(0, 1)]), (7, &[(1, 0)])]);
        let mut cache = CoverageCache::new();
        cache.refresh(&upstream);
        let first = cache.lookup(VariantKey::new(5)).unwrap().clone();
        cache.refresh(&upstream);
        assert_eq!(cache.lookup(VariantKey::new(5)), Some(&first));
    }

    #[test]
    fn refresh_purges_variants_no_longer_reported() {
        let mut cache = CoverageCache::new();
        cache.refresh(&table(&[(5, &[(0, 1)]), (7, &[(1, 0)])]));
        cache.refresh(&table(&[(7, &[(1, 0)])]));
        assert!(cache.lookup(VariantKey::new(5)).is_none());
        assert!(cache.lookup(VariantKey::new(7)).is_some());
    }

    #[test]
    fn clear_returns_to_uninitialized() {
        let mut cache = CoverageCache::new();
        cache.refresh(&table(&[(5, &[(0, 1)])]));
        cache.clear();
        assert!(!cache.is_populated());
        assert!(cache.lookup(VariantKey::new(5)).is_none());
    }
}
