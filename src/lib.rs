//! 2D FABRIK chain solver with low-pass input smoothing.
//!
//! `reachy` animates a jointed chain that continuously reaches toward a
//! moving target using FABRIK (Forward And Backward Reaching Inverse
//! Kinematics): one backward reach + forward re-anchoring pass per tick,
//! converging visually across ticks as the target moves. Raw pointer input
//! is damped by an exponential low-pass filter before it drives the solver.
//!
//! # Features
//!
//! - **Single-pass FABRIK**: [`Chain`] does one reach/re-anchor pass per
//!   `follow` call — tick-driven convergence, no iteration loop
//! - **Attached or free-floating**: anchored chains re-root every pass,
//!   detached chains trail the target
//! - **Input smoothing**: [`LowPass`] exponential filtering, 1D or 2D
//! - **Taper**: per-segment lengths and joint radii decreasing root to tip
//! - **Tick driver**: [`Rig`] wires latest-target capture, filter and chain
//! - **Observable**: monitor tick phases via the [`TickObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//!
//! ```
//! use reachy::{Rig, RigConfig, Vec2, NoOpTickObserver};
//!
//! let mut rig: Rig<f32> = Rig::new(Vec2::new(480.0, 600.0), RigConfig::new()).unwrap();
//! rig.set_target(Vec2::new(480.0, 0.0));
//! for _ in 0..100 {
//!     rig.tick(&mut NoOpTickObserver);
//! }
//! let joints = rig.joints();
//! assert_eq!(joints.len(), 6); // segments + 1
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod float;
pub mod vec;
pub mod segment;
pub mod chain;
pub mod filter;
pub mod taper;
pub mod config;
pub mod rig;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar, Vec2};
pub use segment::Segment;
pub use chain::Chain;
pub use filter::{LowPass, LowPass1D, LowPass2D};
pub use taper::{Taper, scale_decreasing};
pub use config::RigConfig;
pub use rig::Rig;
pub use observer::{TickObserver, NoOpTickObserver};
pub use error::ModelError;
