//! Configuration surface consumed from the embedding UI.

use crate::error::ModelError;
use crate::float::Float;
use crate::taper::Taper;

/// Configuration for a [`Rig`](crate::rig::Rig): the values a UI exposes as
/// counters, sliders and toggles.
///
/// # Builder Pattern
/// ```
/// use reachy::config::RigConfig;
///
/// let config: RigConfig<f32> = RigConfig::new()
///     .with_segment_count(4)
///     .with_segment_length(100.0)
///     .with_attached(false)
///     .with_smoothing(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct RigConfig<F: Float> {
    /// Number of chain segments. Zero is legal and yields an empty chain.
    /// Default: 5.
    pub segment_count: usize,
    /// Target (root) segment length. Default: 120.
    pub segment_length: F,
    /// Whether the chain is anchored to its base. Default: true.
    pub attached: bool,
    /// Smoothing level in [0, 1); the filter coefficient is
    /// `alpha = 1 - smoothing`, so 0 disables smoothing. Default: 0.5.
    pub smoothing: F,
    /// Taper bounds for segment lengths and joint radii.
    pub taper: Taper<F>,
}

impl<F: Float> RigConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        RigConfig {
            segment_count: 5,
            segment_length: F::from_f32(120.0),
            attached: true,
            smoothing: F::from_f32(0.5),
            taper: Taper::new(),
        }
    }

    /// Set the number of segments.
    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    /// Set the target segment length.
    pub fn with_segment_length(mut self, segment_length: F) -> Self {
        self.segment_length = segment_length;
        self
    }

    /// Set anchored mode.
    pub fn with_attached(mut self, attached: bool) -> Self {
        self.attached = attached;
        self
    }

    /// Set the smoothing level.
    pub fn with_smoothing(mut self, smoothing: F) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the taper bounds.
    pub fn with_taper(mut self, taper: Taper<F>) -> Self {
        self.taper = taper;
        self
    }

    /// Check the configuration against its documented ranges.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.segment_length > F::zero()) || !self.segment_length.is_finite() {
            return Err(ModelError::InvalidSegmentLength);
        }
        if !(self.taper.min_length > F::zero()) || !self.taper.min_length.is_finite() {
            return Err(ModelError::InvalidMinimumLength);
        }
        if !(self.smoothing >= F::zero()) || !(self.smoothing < F::one()) {
            return Err(ModelError::InvalidSmoothing);
        }
        Ok(())
    }
}

impl<F: Float> Default for RigConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
