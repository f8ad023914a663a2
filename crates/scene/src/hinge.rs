//! Open/close animation for the gate and the door.
//!
//! Each hinge sweeps a fixed step per frame toward one of two extremes. The
//! direction comes from the hinge's toggle latch in [`InputState`]: latched
//! means "open" (toward `min`), released means "closed" (toward `max`).

use serde::Deserialize;

use crate::input::{HingeId, InputState};

/// Sweep rate and limits, shared by both hinges.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HingeConfig {
    /// Angle change per frame, in radians
    pub step: f32,
    /// Fully open angle, in radians
    pub min: f32,
    /// Fully closed angle, in radians
    pub max: f32,
    /// Sideways slide per unit of `sin(angle)` applied while swinging.
    ///
    /// Cosmetic only: it makes the panel look like it clears its frame.
    /// Zero disables the slide.
    pub slide_factor: f32,
}

impl Default for HingeConfig {
    fn default() -> Self {
        Self {
            step: 0.02,
            min: -1.5,
            max: 0.0,
            slide_factor: 0.05,
        }
    }
}

impl HingeConfig {
    /// Sideways offset for a panel at `angle`.
    pub fn slide_offset(&self, angle: f32) -> f32 {
        angle.sin() * self.slide_factor
    }
}

/// Current angle of each hinge, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HingeState {
    /// Gate angle, in [min, max]
    pub gate: f32,
    /// Door angle, in [min, max]
    pub door: f32,
}

impl HingeState {
    /// Angle of one hinge.
    pub fn angle(&self, hinge: HingeId) -> f32 {
        match hinge {
            HingeId::Gate => self.gate,
            HingeId::Door => self.door,
        }
    }

    fn angle_mut(&mut self, hinge: HingeId) -> &mut f32 {
        match hinge {
            HingeId::Gate => &mut self.gate,
            HingeId::Door => &mut self.door,
        }
    }
}

/// Integrates hinge angles once per frame.
#[derive(Clone, Debug, Default)]
pub struct HingeAnimator {
    config: HingeConfig,
}

impl HingeAnimator {
    /// Create an animator with the given sweep settings.
    ///
    /// A config with `min > max` is normalized by swapping the limits.
    pub fn new(mut config: HingeConfig) -> Self {
        if config.min > config.max {
            std::mem::swap(&mut config.min, &mut config.max);
        }
        config.step = config.step.abs();
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HingeConfig {
        &self.config
    }

    /// Advance both hinges by one frame.
    pub fn step(&self, state: &HingeState, input: &InputState) -> HingeState {
        let mut next = *state;
        for hinge in [HingeId::Gate, HingeId::Door] {
            let angle = next.angle_mut(hinge);
            let delta = if input.is_toggled(hinge) {
                -self.config.step
            } else {
                self.config.step
            };
            *angle = self.settle((*angle + delta).clamp(self.config.min, self.config.max));
        }
        next
    }

    /// Snap an angle within half a step of a limit onto that limit.
    fn settle(&self, angle: f32) -> f32 {
        let tolerance = self.config.step * 0.5;
        if (angle - self.config.min).abs() < tolerance {
            self.config.min
        } else if (angle - self.config.max).abs() < tolerance {
            self.config.max
        } else {
            angle
        }
    }
}
