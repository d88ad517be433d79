//! Tick driver: latest raw target -> low-pass filter -> chain solve.
//!
//! Input capture and tick cadence live with the embedder: whatever loop or
//! listeners it runs call [`Rig::set_target`] and [`Rig::tick`] as plain
//! functions, with independent lifecycles. Only the most recent raw sample
//! matters, so the target slot is a single overwritten value and stale
//! intermediate positions are dropped by design.

use crate::chain::Chain;
use crate::config::RigConfig;
use crate::error::ModelError;
use crate::filter::{LowPass, LowPass2D};
use crate::float::Float;
use crate::observer::TickObserver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A chain, its input filter and the latest raw target, driven one solver
/// pass per tick.
pub struct Rig<F: Float> {
    chain: Chain<F>,
    filter: LowPass2D<F>,
    target: Vec2<F>,
    config: RigConfig<F>,
}

impl<F: Float> Rig<F> {
    /// Build a rig anchored at `anchor`.
    ///
    /// Segment lengths come from the config's taper; the filter coefficient
    /// is `1 - smoothing`. The raw target starts at the anchor until the
    /// first `set_target` call.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the configuration fails validation.
    pub fn new(anchor: Vec2<F>, config: RigConfig<F>) -> Result<Self, ModelError> {
        config.validate()?;
        let lengths =
            config
                .taper
                .segment_lengths(config.segment_count, config.segment_length, config.attached);
        Ok(Rig {
            chain: Chain::new(anchor, &lengths, config.attached),
            filter: LowPass::new(F::one() - config.smoothing),
            target: anchor,
            config,
        })
    }

    /// Overwrite the latest raw target (the input-capture side). Does not
    /// run the solver; the value is read on the next tick.
    pub fn set_target(&mut self, raw: Vec2<F>) {
        self.target = raw;
    }

    /// Run one tick: smooth the latest raw target and follow it.
    pub fn tick<O: TickObserver>(&mut self, observer: &mut O) {
        let filtered = self.filter.update(self.target);
        observer.on_filter();

        self.chain.follow(filtered);
        observer.on_solve();

        observer.on_tick_complete();
    }

    /// Joint positions after the most recent tick, root to end effector.
    pub fn joints(&self) -> AllocVec<Vec2<F>> {
        self.chain.joints()
    }

    /// Display radius for each joint, matching `joints()` order.
    pub fn joint_radii(&self) -> AllocVec<F> {
        self.config
            .taper
            .joint_radii(self.config.segment_count, self.config.attached)
    }

    /// Change the smoothing level without disturbing the filter state.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSmoothing`] for levels outside [0, 1).
    pub fn set_smoothing(&mut self, smoothing: F) -> Result<(), ModelError> {
        if !(smoothing >= F::zero()) || !(smoothing < F::one()) {
            return Err(ModelError::InvalidSmoothing);
        }
        self.config.smoothing = smoothing;
        self.filter.set_alpha(F::one() - smoothing);
        Ok(())
    }

    /// Apply a new configuration, rebuilding the chain from fresh taper
    /// lengths. The swap happens entirely between ticks: a tick either sees
    /// the old chain or the fully rebuilt one.
    ///
    /// This is a hard reset — prior joint positions are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the configuration fails validation; the
    /// rig is left unchanged in that case.
    pub fn reconfigure(&mut self, config: RigConfig<F>) -> Result<(), ModelError> {
        config.validate()?;
        let lengths =
            config
                .taper
                .segment_lengths(config.segment_count, config.segment_length, config.attached);
        self.chain.rebuild(&lengths);
        self.chain.set_attached(config.attached);
        self.filter.set_alpha(F::one() - config.smoothing);
        self.config = config;
        Ok(())
    }

    /// Move the anchor point, e.g. after the embedding surface resizes.
    pub fn set_anchor(&mut self, anchor: Vec2<F>) {
        self.chain.set_base(anchor);
    }

    pub fn config(&self) -> &RigConfig<F> {
        &self.config
    }

    pub fn chain(&self) -> &Chain<F> {
        &self.chain
    }

    /// Last raw target passed to `set_target`.
    pub fn target(&self) -> Vec2<F> {
        self.target
    }

    /// Current filtered target (what the chain saw on the last tick).
    pub fn filtered_target(&self) -> Vec2<F> {
        self.filter.state()
    }
}
