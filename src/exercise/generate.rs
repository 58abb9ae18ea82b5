use rand::Rng;
use rand::rngs::SmallRng;

use crate::exercise::{Exercise, Slot};

/// Split point in `[0, total]`, biased toward the middle: the average of two
/// independent uniform draws mapped onto the range. Not a true triangular
/// distribution; the shape is part of the difficulty tuning and must stay
/// as-is.
pub fn biased_split(rng: &mut SmallRng, total: u32) -> u32 {
    let avg = (rng.gen_range(0.0..1.0f64) + rng.gen_range(0.0..1.0f64)) / 2.0;
    (avg * f64::from(total)).round() as u32
}

/// Pick the hidden slot: a 1/3 chance for the top when allowed, otherwise
/// uniform among the part slots.
fn pick_missing(rng: &mut SmallRng, allow_top_missing: bool, parts: &[Slot]) -> Slot {
    if allow_top_missing && rng.gen_range(0..3) == 0 {
        return Slot::Top;
    }
    parts[rng.gen_range(0..parts.len())]
}

/// Generate a fresh exercise: draw the total uniformly from `[2, max_total]`,
/// split it into two or three parts, and hide one slot.
pub fn generate(
    rng: &mut SmallRng,
    max_total: u32,
    allow_top_missing: bool,
    three_way_split: bool,
) -> Exercise {
    let total = rng.gen_range(2..=max_total.max(2));

    if three_way_split {
        let left = biased_split(rng, total);
        let remainder = total - left;
        let mid = biased_split(rng, remainder);
        let right = remainder - mid;

        let missing = pick_missing(
            rng,
            allow_top_missing,
            &[Slot::Left, Slot::Mid, Slot::Right],
        );
        let answer = match missing {
            Slot::Top => total,
            Slot::Left => left,
            Slot::Mid => mid,
            Slot::Right => right,
        };

        Exercise {
            total,
            left,
            mid: Some(mid),
            right,
            missing,
            answer,
        }
    } else {
        let left = biased_split(rng, total);
        let right = total - left;

        let missing = pick_missing(rng, allow_top_missing, &[Slot::Left, Slot::Right]);
        let answer = match missing {
            Slot::Top => total,
            Slot::Left => left,
            _ => right,
        };

        Exercise {
            total,
            left,
            mid: None,
            right,
            missing,
            answer,
        }
    }
}
