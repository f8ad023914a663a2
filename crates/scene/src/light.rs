//! Scene lighting parameters handed to the shader.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A directional light (sun-like).
///
/// The direction points from the surface toward the light, in world space,
/// so the shader's diffuse term is `max(dot(normal, direction), 0)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DirectionalLight {
    /// Light direction (normalized)
    pub direction: Vec3,
    pub _pad0: f32,
    /// Light color
    pub color: Vec3,
    /// Ambient term added to every lit surface
    pub ambient: f32,
}

impl Default for DirectionalLight {
    /// White light from high above and in front of the club house.
    fn default() -> Self {
        Self::new(Vec3::new(0.5, 3.0, 4.0), Vec3::ONE, 0.0)
    }
}

impl DirectionalLight {
    /// Create a light; `direction` is normalized here.
    ///
    /// A zero direction falls back to straight down onto the scene (+Y).
    pub fn new(direction: Vec3, color: Vec3, ambient: f32) -> Self {
        Self {
            direction: direction.try_normalize().unwrap_or(Vec3::Y),
            _pad0: 0.0,
            color,
            ambient,
        }
    }

    /// Diffuse intensity the shader would compute for a surface normal.
    pub fn diffuse(&self, normal: Vec3) -> f32 {
        (normal.normalize_or_zero().dot(self.direction)).max(0.0) + self.ambient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_direction_is_normalized() {
        let light = DirectionalLight::default();
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        let expected = Vec3::new(0.5, 3.0, 4.0) / Vec3::new(0.5, 3.0, 4.0).length();
        assert!((light.direction - expected).length() < 1e-6);
    }

    #[test]
    fn test_zero_direction_falls_back() {
        let light = DirectionalLight::new(Vec3::ZERO, Vec3::ONE, 0.0);
        assert_eq!(light.direction, Vec3::Y);
    }

    #[test]
    fn test_diffuse_back_faces_get_ambient_only() {
        let light = DirectionalLight::new(Vec3::Y, Vec3::ONE, 0.2);
        assert!((light.diffuse(Vec3::Y) - 1.2).abs() < 1e-6);
        assert!((light.diffuse(Vec3::NEG_Y) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_light_size() {
        assert_eq!(std::mem::size_of::<DirectionalLight>(), 32);
    }
}
