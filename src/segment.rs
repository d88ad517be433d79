//! A single rigid link of the kinematic chain.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// A rigid link between a `base` (proximal) and a `head` (distal) endpoint.
///
/// The length is fixed by construction: every mutator either translates both
/// endpoints by the same delta or recomputes `head` from the current length,
/// so `|head - base|` is preserved across updates (up to floating-point
/// rounding).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub base: Vec2<F>,
    pub head: Vec2<F>,
}

impl<F: Float> Segment<F> {
    /// Create a segment from both endpoints.
    pub fn new(base: Vec2<F>, head: Vec2<F>) -> Self {
        Segment { base, head }
    }

    /// Create a segment of the given length extending from `base` at `angle`
    /// (radians from the positive x-axis). `length` must be non-negative.
    pub fn from_polar(base: Vec2<F>, length: F, angle: F) -> Self {
        Segment {
            base,
            head: base + Vec2::from_angle(angle).scale(length),
        }
    }

    /// Orientation of the base-to-head direction, in radians.
    pub fn heading(&self) -> F {
        (self.head - self.base).angle()
    }

    /// Current length `|head - base|`.
    pub fn length(&self) -> F {
        self.base.distance(self.head)
    }

    /// Translate the segment so `base` lands on `new_base`, preserving the
    /// base-to-head vector (orientation and length unchanged).
    pub fn rebase(&mut self, new_base: Vec2<F>) {
        self.head = (self.head - self.base) + new_base;
        self.base = new_base;
    }

    /// Translate both endpoints by `delta`.
    pub fn translate(&mut self, delta: Vec2<F>) {
        self.base = self.base + delta;
        self.head = self.head + delta;
    }

    /// Re-orient toward `target`: `base` and length stay fixed, `head` is
    /// recomputed to point at `target`. The head does not land on the target
    /// unless the target happens to lie exactly one length away.
    pub fn head_towards(&mut self, target: Vec2<F>) {
        let length = self.length();
        let angle = (target - self.base).angle();
        self.head = self.base + Vec2::from_angle(angle).scale(length);
    }

    /// The single-link FABRIK reach step: orient toward `target`, then slide
    /// the segment along that direction until `head` lands exactly on
    /// `target`. Afterwards `base` sits one length away from the target,
    /// back along the line toward the segment's previous position.
    pub fn follow(&mut self, target: Vec2<F>) {
        self.head_towards(target);
        self.rebase(target);
        let back = self.base - self.head;
        self.translate(back);
    }
}
