//! First-order exponential low-pass filtering of sampled input.

use crate::vec::{Scalar, Vec, Vec2};

/// Exponential low-pass filter: `state += alpha * (input - state)`.
///
/// `alpha = 1` passes input through untouched; `alpha -> 0` damps heavily.
/// Values outside `[0, 1]` are not rejected — they merely produce unstable
/// or inverted damping, which is the caller's responsibility to avoid.
///
/// For vector inputs the recurrence applies component-wise, i.e. each axis
/// is an independent scalar filter sharing one `alpha`.
pub struct LowPass<V: Vec> {
    alpha: V::Scalar,
    state: V,
}

impl<V: Vec> LowPass<V> {
    /// Create a filter with zero-initialized state.
    pub fn new(alpha: V::Scalar) -> Self {
        LowPass {
            alpha,
            state: V::zero(),
        }
    }

    /// Feed one sample; returns the new smoothed state.
    pub fn update(&mut self, input: V) -> V {
        self.state = self.state + (input - self.state).scale(self.alpha);
        self.state
    }

    /// Current smoothed state (the last `update` return value).
    pub fn state(&self) -> V {
        self.state
    }

    /// Overwrite the state without filtering, e.g. to start tracking from a
    /// known position instead of the origin.
    pub fn reset(&mut self, state: V) {
        self.state = state;
    }

    pub fn alpha(&self) -> V::Scalar {
        self.alpha
    }

    /// Change the smoothing coefficient. Takes effect on the next `update`;
    /// the accumulated state is untouched.
    pub fn set_alpha(&mut self, alpha: V::Scalar) {
        self.alpha = alpha;
    }
}

/// Scalar low-pass filter.
pub type LowPass1D<F> = LowPass<Scalar<F>>;
/// 2D low-pass filter — independent per-axis smoothing of a point stream.
pub type LowPass2D<F> = LowPass<Vec2<F>>;
