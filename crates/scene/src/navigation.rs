//! Keyboard fly-through navigation.
//!
//! [`Navigator::step`] turns the held-key state into a new [`CameraState`].
//! Speeds are per frame, matching a display-locked loop. Set
//! [`NavigationConfig::time_scaled`] to scale them by the real frame delta
//! instead.

use std::f32::consts::TAU;

use serde::Deserialize;

use crate::camera::CameraState;
use crate::input::{Action, InputState};

/// Movement speeds and turn rate.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Change of the look-target height per frame (look up/down)
    pub look_speed: f32,
    /// Distance per frame along the heading (forward/back)
    pub move_speed: f32,
    /// Distance per frame across the heading (strafe)
    pub strafe_speed: f32,
    /// Distance per frame along y (ascend/descend)
    pub vertical_speed: f32,
    /// Heading change per frame, in degrees
    pub turn_degrees: f32,
    /// Scale every speed by `dt * reference_rate` instead of applying it once per frame
    pub time_scaled: bool,
    /// Frame rate the per-frame speeds were tuned for
    pub reference_rate: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            look_speed: 0.01,
            move_speed: 0.1,
            strafe_speed: 0.1,
            vertical_speed: 0.1,
            turn_degrees: 1.0,
            time_scaled: false,
            reference_rate: 60.0,
        }
    }
}

/// Applies held keys to the camera once per frame.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    config: NavigationConfig,
}

impl Navigator {
    /// Create a navigator with the given speeds.
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Advance the camera by one frame.
    ///
    /// The direction components are taken from the heading as it was at the
    /// start of the frame; a turn made this frame moves the camera from the
    /// next frame on.
    pub fn step(&self, previous: &CameraState, input: &InputState, dt: f32) -> CameraState {
        let cfg = &self.config;
        let rate = self.rate(dt);
        let mut next = *previous;
        next.refresh_axes();

        let turn = input.axis(Action::TurnRight, Action::TurnLeft);
        if turn != 0.0 {
            let delta = turn * cfg.turn_degrees.to_radians() * rate;
            next.angle = (next.angle + delta).rem_euclid(TAU);
        }

        next.v_look += input.axis(Action::LookUp, Action::LookDown) * cfg.look_speed * rate;

        let forward = input.axis(Action::MoveForward, Action::MoveBack) * cfg.move_speed * rate;
        next.eye.x += next.x_angle * forward;
        next.eye.z += next.z_angle * forward;

        // Strafing runs perpendicular to the (x_angle, z_angle) heading
        let left = input.axis(Action::StrafeLeft, Action::StrafeRight) * cfg.strafe_speed * rate;
        next.eye.x += next.z_angle * left;
        next.eye.z -= next.x_angle * left;

        // The look target rises with the eye so the view does not tilt
        let up = input.axis(Action::Ascend, Action::Descend) * cfg.vertical_speed * rate;
        next.eye.y += up;
        next.v_look += up;

        next
    }

    fn rate(&self, dt: f32) -> f32 {
        if self.config.time_scaled && dt.is_finite() && dt >= 0.0 {
            dt * self.config.reference_rate
        } else {
            1.0
        }
    }
}
