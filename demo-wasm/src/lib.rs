//! wasm-bindgen surface for the canvas demo: a robot arm chasing the pointer.

use reachy::vec::Vec as _;
use reachy::{NoOpTickObserver, Rig, RigConfig, Vec2};
use wasm_bindgen::prelude::*;

/// A FABRIK robot arm anchored to the bottom-center of a stage,
/// following the (smoothed) pointer position one tick at a time.
#[wasm_bindgen]
pub struct RobotDemo {
    rig: Rig<f32>,
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl RobotDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<RobotDemo, JsError> {
        let rig = Rig::new(Vec2::new(width / 2.0, height), RigConfig::new())
            .map_err(|e| JsError::new(&e.to_string()))?;
        let mut demo = RobotDemo { rig, width, height };
        // Start reaching for the top-center of the stage.
        demo.rig.set_target(Vec2::new(width / 2.0, 0.0));
        Ok(demo)
    }

    /// Pointer/touch position in stage coordinates, clamped to the stage.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.rig.set_target(Vec2::new(
            x.clamp(0.0, self.width),
            y.clamp(0.0, self.height),
        ));
    }

    /// Glide slider: 0 disables smoothing, values toward 1 damp heavily.
    pub fn set_smoothing(&mut self, level: f32) -> Result<(), JsError> {
        self.rig
            .set_smoothing(level)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn set_segment_count(&mut self, count: usize) -> Result<(), JsError> {
        let config = self.rig.config().with_segment_count(count);
        self.rig
            .reconfigure(config)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn set_segment_length(&mut self, length: f32) -> Result<(), JsError> {
        let config = self.rig.config().with_segment_length(length);
        self.rig
            .reconfigure(config)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Attach/detach toggle.
    pub fn set_attached(&mut self, attached: bool) -> Result<(), JsError> {
        let config = self.rig.config().with_attached(attached);
        self.rig
            .reconfigure(config)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Stage resize: re-anchor to the new bottom-center and re-aim.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rig.set_anchor(Vec2::new(width / 2.0, height));
        self.rig.set_target(Vec2::new(width / 2.0, 0.0));
    }

    /// Advance one tick (call from the interval/frame loop).
    pub fn tick(&mut self) {
        self.rig.tick(&mut NoOpTickObserver);
    }

    /// Joint positions as flat [x0, y0, x1, y1, ...], root to end effector.
    pub fn joints(&self) -> Vec<f32> {
        let joints = self.rig.joints();
        let mut out = Vec::with_capacity(joints.len() * 2);
        for j in &joints {
            out.push(j.x);
            out.push(j.y);
        }
        out
    }

    /// Display radius for each joint, matching `joints()` order.
    pub fn joint_radii(&self) -> Vec<f32> {
        self.rig.joint_radii()
    }

    pub fn joint_count(&self) -> usize {
        self.rig.joints().len()
    }

    /// Outline of one drawn segment as flat [x, y] pairs of the four capsule
    /// corners, offset perpendicular to the segment heading by the joint
    /// radii at each end.
    pub fn segment_outline(&self, index: usize) -> Vec<f32> {
        let joints = self.rig.joints();
        let radii = self.rig.joint_radii();
        if index + 1 >= joints.len() {
            return Vec::new();
        }
        let (base, head) = (joints[index], joints[index + 1]);
        let (base_r, head_r) = (radii[index], radii[index + 1]);

        let axis = head - base;
        let side = if axis.length() > 1e-6 {
            axis.scale(1.0 / axis.length()).perp()
        } else {
            Vec2::new(0.0, 1.0)
        };

        let corners = [
            base - side.scale(base_r),
            head - side.scale(head_r),
            head + side.scale(head_r),
            base + side.scale(base_r),
        ];
        let mut out = Vec::with_capacity(8);
        for c in &corners {
            out.push(c.x);
            out.push(c.y);
        }
        out
    }
}
