//! Scalar-range tool sources that retune a default sprinkler tier.
//!
//! These providers add a single sprinkler tier with a configurable range.
//! They register nothing of their own; the built-in sprinkler highlighter
//! (or a coverage override falling back to it) serves the retuned shape.

use std::cell::RefCell;
use std::rc::Rc;

use highlight_core::{DefaultShapes, Monitor, Severity, SprinklerTier, square_circle};

use crate::api::SprinklerRangeSource;

/// Replaces the default shape for one sprinkler tier with a rounded circle of
/// the source's reported range. An invalid range leaves the built-in shape in
/// place and logs once.
pub fn retune_sprinkler_tier(
    source: &dyn SprinklerRangeSource,
    tier: SprinklerTier,
    shapes: &Rc<RefCell<DefaultShapes>>,
    monitor: &Monitor,
) {
    let range = source.sprinkler_range();
    if range > 0 {
        shapes
            .borrow_mut()
            .set_sprinkler_for_tier(tier, square_circle(range as u32));
    } else {
        monitor.log_once(
            Severity::Info,
            format!("ignoring nonsense sprinkler range {range} from {tier} tool source"),
        );
    }
}
