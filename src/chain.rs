//! FABRIK kinematic chain: ordered segments reaching for a target.

use crate::float::Float;
use crate::segment::Segment;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// An ordered sequence of rigid segments anchored to an optional root.
///
/// `segments[0].base` is the proximal end, the last segment's `head` is the
/// end effector. While `attached` is true a completed [`follow`](Chain::follow)
/// leaves the chain contiguous and rooted at `base`; while false the chain
/// free-floats wherever the backward reach pass placed it.
pub struct Chain<F: Float> {
    base: Vec2<F>,
    attached: bool,
    segments: AllocVec<Segment<F>>,
}

impl<F: Float> Chain<F> {
    /// Build a chain from per-segment lengths.
    ///
    /// Every segment starts horizontal (angle 0) with its base at the anchor
    /// point; the first `follow` call untangles the stack. An empty length
    /// slice yields a degenerate empty chain.
    pub fn new(base: Vec2<F>, segment_lengths: &[F], attached: bool) -> Self {
        let mut chain = Chain {
            base,
            attached,
            segments: AllocVec::new(),
        };
        chain.rebuild(segment_lengths);
        chain
    }

    /// Discard all segments and re-initialize from fresh lengths.
    ///
    /// This is a hard reset, not a length-preserving resize: prior joint
    /// positions are lost and every segment starts horizontal at the anchor.
    pub fn rebuild(&mut self, segment_lengths: &[F]) {
        self.segments.clear();
        self.segments.reserve(segment_lengths.len());
        for &length in segment_lengths {
            self.segments
                .push(Segment::from_polar(self.base, length, F::zero()));
        }
    }

    /// One solver pass: backward reach toward `target`, then forward
    /// re-anchoring when attached.
    ///
    /// This is deliberately a single backward+forward pass, not an iterated
    /// convergence loop: the solver runs once per animation tick against a
    /// continuously moving target, so successive ticks act as successive
    /// FABRIK iterations.
    pub fn follow(&mut self, target: Vec2<F>) {
        let n = self.segments.len();
        if n == 0 {
            return;
        }

        // Backward pass: the tip reaches the target exactly, then each
        // earlier segment reaches for its distal neighbour's base.
        self.segments[n - 1].follow(target);
        for i in (0..n - 1).rev() {
            let next_base = self.segments[i + 1].base;
            self.segments[i].follow(next_base);
        }

        // Forward pass: rebase the root onto the anchor and walk the
        // correction to the tip, trading reach for anchoring fidelity.
        if self.attached {
            self.segments[0].rebase(self.base);
            for i in 1..n {
                let prev_head = self.segments[i - 1].head;
                self.segments[i].rebase(prev_head);
            }
        }
    }

    /// Joint positions after the most recent `follow`:
    /// `[s0.base, s1.base, ..., last.head]`. Empty for an empty chain.
    pub fn joints(&self) -> AllocVec<Vec2<F>> {
        let mut joints = AllocVec::with_capacity(self.segments.len() + 1);
        for segment in &self.segments {
            joints.push(segment.base);
        }
        if let Some(last) = self.segments.last() {
            joints.push(last.head);
        }
        joints
    }

    /// The end effector: the most distal segment's head.
    pub fn end_effector(&self) -> Option<Vec2<F>> {
        self.segments.last().map(|s| s.head)
    }

    /// Sum of all segment lengths — the chain's maximum reach from the root.
    pub fn total_length(&self) -> F {
        let mut total = F::zero();
        for segment in &self.segments {
            total = total + segment.length();
        }
        total
    }

    pub fn base(&self) -> Vec2<F> {
        self.base
    }

    /// Move the anchor. Takes effect on the next `follow`.
    pub fn set_base(&mut self, base: Vec2<F>) {
        self.base = base;
    }

    pub fn attached(&self) -> bool {
        self.attached
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn segments(&self) -> &[Segment<F>] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
