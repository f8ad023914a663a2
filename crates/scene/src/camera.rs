//! First-person camera state and projection.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use serde::Deserialize;

/// Projection type for the camera.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic projection
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

impl Default for Projection {
    /// Narrow 30 degree lens with a short depth range, sized for the campus.
    fn default() -> Self {
        Projection::Perspective {
            fov_y: 30.0_f32.to_radians(),
            aspect: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Build a perspective projection from a config section.
    pub fn from_config(config: &ProjectionConfig, aspect: f32) -> Self {
        Projection::Perspective {
            fov_y: config.fov_y_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Update the aspect ratio (for perspective projection).
    ///
    /// Degenerate aspects (a minimized window) are ignored.
    pub fn set_aspect(&mut self, new_aspect: f32) {
        if !new_aspect.is_finite() || new_aspect <= 0.0 {
            return;
        }
        if let Projection::Perspective { aspect, .. } = self {
            *aspect = new_aspect;
        }
    }

    /// Get the projection matrix (OpenGL clip conventions, depth in [-1, 1]).
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh_gl(fov_y, aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::orthographic_rh_gl(left, right, bottom, top, near, far),
        }
    }
}

/// Perspective lens settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view, in degrees
    pub fov_y_degrees: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 30.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Where the camera starts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StartPose {
    /// Eye position
    pub eye: Vec3,
    /// Height of the look target
    pub v_look: f32,
    /// Heading in radians
    pub angle: f32,
}

impl Default for StartPose {
    /// Outside the front corner of the site, looking back at the club house.
    fn default() -> Self {
        Self {
            eye: Vec3::new(30.0, 10.0, 30.0),
            v_look: 9.75,
            angle: PI,
        }
    }
}

/// Eye position plus heading, as updated once per frame by navigation.
///
/// The look direction is not a unit vector. `x_angle` and `z_angle` are the
/// heading rotated by 45 degrees and scaled by sqrt(2), and `v_look` is the
/// absolute height of the look target rather than a pitch angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Eye position in world space
    pub eye: Vec3,
    /// Height of the look target
    pub v_look: f32,
    /// Heading in radians, kept in [0, 2π)
    pub angle: f32,
    /// `cos(angle) - sin(angle)`
    pub x_angle: f32,
    /// `cos(angle) + sin(angle)`
    pub z_angle: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_pose(&StartPose::default())
    }
}

impl CameraState {
    /// Create a camera at `pose` with direction components derived from its heading.
    pub fn from_pose(pose: &StartPose) -> Self {
        let mut state = Self {
            eye: pose.eye,
            v_look: pose.v_look,
            angle: pose.angle.rem_euclid(std::f32::consts::TAU),
            x_angle: 0.0,
            z_angle: 0.0,
        };
        state.refresh_axes();
        state
    }

    /// Recompute `x_angle`/`z_angle` from the current heading.
    pub fn refresh_axes(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        self.x_angle = cos - sin;
        self.z_angle = cos + sin;
    }

    /// The point the camera looks at.
    pub fn look_target(&self) -> Vec3 {
        Vec3::new(
            self.eye.x + self.x_angle,
            self.v_look,
            self.eye.z + self.z_angle,
        )
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_target(), Vec3::Y)
    }
}
