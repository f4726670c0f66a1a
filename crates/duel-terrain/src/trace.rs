//! Segment contact trace.
//!
//! Steps along the straight segment a projectile covered in one tick and
//! reports the first point that is either solid or outside the world.
//! Sampling at a fixed interval keeps fast shots from skipping over thin
//! ground; bisection then pulls the reported point onto the boundary.

use duel_core::constants::{TRACE_REFINE_ITERATIONS, TRACE_SAMPLE_INTERVAL};
use duel_core::enums::ImpactCause;
use duel_core::types::{Bounds, DVec2};

use crate::Terrain;

/// Where and why a segment first became blocked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub point: DVec2,
    pub cause: ImpactCause,
}

/// First blocked point on the segment `from → to`, excluding `from` itself.
///
/// Returns `None` if the whole segment is clear.
pub fn first_contact<T: Terrain + ?Sized>(
    terrain: &T,
    bounds: &Bounds,
    from: DVec2,
    to: DVec2,
) -> Option<Contact> {
    let blocked = |p: DVec2| !bounds.contains(p) || terrain.is_solid_at(p);

    let length = from.distance(to);
    let samples = ((length / TRACE_SAMPLE_INTERVAL).ceil() as usize).max(1);

    let mut clear = from;
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let sample = from.lerp(to, t);
        if blocked(sample) {
            let point = refine(clear, sample, &blocked);
            let cause = if bounds.contains(point) {
                ImpactCause::Terrain
            } else {
                ImpactCause::OutOfBounds
            };
            return Some(Contact { point, cause });
        }
        clear = sample;
    }
    None
}

/// Bisect between a clear point and a blocked one. Returns the blocked side.
fn refine(mut clear: DVec2, mut blocked_at: DVec2, blocked: &impl Fn(DVec2) -> bool) -> DVec2 {
    for _ in 0..TRACE_REFINE_ITERATIONS {
        let mid = (clear + blocked_at) * 0.5;
        if blocked(mid) {
            blocked_at = mid;
        } else {
            clear = mid;
        }
    }
    blocked_at
}
