//! Canonical fallback shapes and the per-category default-shape bundle.

use super::{CoverageMask, Offset};

/// Filled axis-aligned square of the given radius (side `2r + 1`).
pub fn square(radius: u32) -> CoverageMask {
    CoverageMask::from_predicate(radius, |_, _| true)
}

/// Square with rounded corners: cells within Euclidean distance `r + 1/2`
/// of the origin. The comparison is done in integers by scaling both sides
/// by four.
pub fn square_circle(radius: u32) -> CoverageMask {
    let limit = (2 * radius as i64 + 1).pow(2);
    CoverageMask::from_predicate(radius, |x, y| {
        4 * (x as i64 * x as i64 + y as i64 * y as i64) <= limit
    })
}

/// Manhattan-distance diamond: cells with `|x| + |y| <= r`.
pub fn manhattan_circle(radius: u32) -> CoverageMask {
    CoverageMask::from_predicate(radius, |x, y| x.abs() + y.abs() <= radius as i32)
}

/// Coverage-relevant sprinkler sub-types, in ascending range order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum SprinklerTier {
    Basic,
    Quality,
    Iridium,
    Prismatic,
    Radioactive,
}

impl SprinklerTier {
    /// Classifies an item display name into a tier, or `None` when the item
    /// is not a sprinkler at all.
    pub fn from_item_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if !name.contains("sprinkler") {
            return None;
        }
        let tier = if name.contains("prismatic") {
            Self::Prismatic
        } else if name.contains("radioactive") {
            Self::Radioactive
        } else if name.contains("iridium") {
            Self::Iridium
        } else if name.contains("quality") {
            Self::Quality
        } else {
            Self::Basic
        };
        Some(tier)
    }
}

/// Built-in fallback masks, one per highlight category.
///
/// Integrations that only report a scalar range retune the relevant entry in
/// place; richer integrations keep their own per-variant cache and fall back
/// to these shapes when a source reports an invalid value.
#[derive(Clone, Debug)]
pub struct DefaultShapes {
    pub sprinkler: CoverageMask,
    pub quality_sprinkler: CoverageMask,
    pub iridium_sprinkler: CoverageMask,
    pub prismatic_sprinkler: CoverageMask,
    pub radioactive_sprinkler: CoverageMask,
    pub beehouse: CoverageMask,
    pub junimo_hut: CoverageMask,
}

impl DefaultShapes {
    pub const DEFAULT_JUNIMO_RADIUS: u32 = 8;
    pub const DEFAULT_BEEHOUSE_RADIUS: u32 = 5;

    pub fn new() -> Self {
        Self {
            sprinkler: CoverageMask::from_offsets([
                Offset::new(1, 0),
                Offset::new(-1, 0),
                Offset::new(0, 1),
                Offset::new(0, -1),
            ]),
            quality_sprinkler: square(1),
            iridium_sprinkler: square(2),
            prismatic_sprinkler: square_circle(3),
            radioactive_sprinkler: square_circle(3),
            beehouse: manhattan_circle(Self::DEFAULT_BEEHOUSE_RADIUS),
            junimo_hut: square(Self::DEFAULT_JUNIMO_RADIUS),
        }
    }

    pub fn sprinkler_for_tier(&self, tier: SprinklerTier) -> &CoverageMask {
        match tier {
            SprinklerTier::Basic => &self.sprinkler,
            SprinklerTier::Quality => &self.quality_sprinkler,
            SprinklerTier::Iridium => &self.iridium_sprinkler,
            SprinklerTier::Prismatic => &self.prismatic_sprinkler,
            SprinklerTier::Radioactive => &self.radioactive_sprinkler,
        }
    }

    pub fn set_sprinkler_for_tier(&mut self, tier: SprinklerTier, mask: CoverageMask) {
        match tier {
            SprinklerTier::Basic => self.sprinkler = mask,
            SprinklerTier::Quality => self.quality_sprinkler = mask,
            SprinklerTier::Iridium => self.iridium_sprinkler = mask,
            SprinklerTier::Prismatic => self.prismatic_sprinkler = mask,
            SprinklerTier::Radioactive => self.radioactive_sprinkler = mask,
        }
    }

    pub fn set_junimo_radius(&mut self, radius: u32) {
        self.junimo_hut = square(radius);
    }
}

impl Default for DefaultShapes {
    fn default() -> Self {
        Self::new()
    }
}
