//! Per-segment lengths and per-joint display radii.
//!
//! Pure derivation, recomputed whenever segment count, target length or
//! anchored mode changes; never persisted.

use crate::float::Float;
use alloc::vec::Vec as AllocVec;

/// Linear falloff from `max` (at `i = 0`) toward `min`:
/// `((total - i) / total) * (max - min) + min`.
pub fn scale_decreasing<F: Float>(i: usize, total: usize, min: F, max: F) -> F {
    let fraction = F::from_f32((total - i) as f32) / F::from_f32(total as f32);
    fraction * (max - min) + min
}

/// Taper parameters: bounds for segment lengths and joint radii.
///
/// # Builder Pattern
/// ```
/// use reachy::taper::Taper;
///
/// let taper: Taper<f32> = Taper::new()
///     .with_min_length(40.0)
///     .with_radius_range(8.0, 20.0);
/// let lengths = taper.segment_lengths(5, 120.0, true);
/// assert_eq!(lengths.len(), 5);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Taper<F: Float> {
    /// Shortest segment length the taper falls toward. Default: 50.
    pub min_length: F,
    /// Smallest joint radius (at the tip). Default: 10.
    pub min_radius: F,
    /// Largest joint radius (at the root). Default: 25.
    pub max_radius: F,
    /// Uniform joint radius used when the chain is detached. Default: 15.
    pub detached_radius: F,
}

impl<F: Float> Taper<F> {
    /// Create a taper with default values.
    pub fn new() -> Self {
        Taper {
            min_length: F::from_f32(50.0),
            min_radius: F::from_f32(10.0),
            max_radius: F::from_f32(25.0),
            detached_radius: F::from_f32(15.0),
        }
    }

    /// Set the minimum segment length.
    pub fn with_min_length(mut self, min_length: F) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the joint radius range (tip, root).
    pub fn with_radius_range(mut self, min_radius: F, max_radius: F) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    /// Set the uniform detached-mode joint radius.
    pub fn with_detached_radius(mut self, detached_radius: F) -> Self {
        self.detached_radius = detached_radius;
        self
    }

    /// Per-segment lengths: decreasing from root to tip when anchored,
    /// all equal to `target_length` otherwise. `count = 0` yields an empty
    /// sequence.
    pub fn segment_lengths(&self, count: usize, target_length: F, attached: bool) -> AllocVec<F> {
        let mut lengths = AllocVec::with_capacity(count);
        for i in 0..count {
            let length = if attached {
                scale_decreasing(i, count, self.min_length, target_length)
            } else {
                target_length
            };
            lengths.push(length);
        }
        lengths
    }

    /// Per-joint display radii over `count + 1` joints: decreasing from root
    /// to tip when anchored, the constant detached radius otherwise.
    /// `count = 0` still yields the lone anchor joint's radius.
    pub fn joint_radii(&self, count: usize, attached: bool) -> AllocVec<F> {
        let joints = count + 1;
        let mut radii = AllocVec::with_capacity(joints);
        for i in 0..joints {
            let radius = if attached {
                scale_decreasing(i, joints, self.min_radius, self.max_radius)
            } else {
                self.detached_radius
            };
            radii.push(radius);
        }
        radii
    }
}

impl<F: Float> Default for Taper<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attached_lengths_strictly_decrease() {
        let taper: Taper<f32> = Taper::new();
        let lengths = taper.segment_lengths(6, 150.0, true);
        assert_eq!(lengths.len(), 6);
        assert!((lengths[0] - 150.0).abs() < 1e-5, "root gets the full length");
        for pair in lengths.windows(2) {
            assert!(pair[0] > pair[1], "lengths must decrease: {:?}", lengths);
        }
        // The tip never reaches min_length exactly, it stops one step short.
        assert!(*lengths.last().unwrap() > taper.min_length);
    }

    #[test]
    fn detached_lengths_are_uniform() {
        let taper: Taper<f32> = Taper::new();
        let lengths = taper.segment_lengths(4, 90.0, false);
        assert!(lengths.iter().all(|&l| l == 90.0));
    }

    #[test]
    fn radii_counts_and_modes() {
        let taper: Taper<f32> = Taper::new();
        let attached = taper.joint_radii(5, true);
        assert_eq!(attached.len(), 6);
        assert!((attached[0] - taper.max_radius).abs() < 1e-5);
        for pair in attached.windows(2) {
            assert!(pair[0] > pair[1]);
        }

        let detached = taper.joint_radii(5, false);
        assert!(detached.iter().all(|&r| r == 15.0));
    }

    #[test]
    fn zero_segments_degenerate() {
        let taper: Taper<f64> = Taper::new();
        assert!(taper.segment_lengths(0, 120.0, true).is_empty());
        assert_eq!(taper.joint_radii(0, true).len(), 1);
    }
}
