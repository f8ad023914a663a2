//! Affine transforms for scene composition.
//!
//! This module provides the [`Transform`] type, a 4x4 affine matrix built up
//! by right-multiplying translations, rotations and scales. Operations apply
//! in the order they are written: the last one composed is the first one
//! applied to a vertex.
//!
//! # Example
//!
//! ```
//! use campus_scene::Transform;
//! use glam::Vec3;
//!
//! // Move to (1, 0, 0), then stretch the object along x.
//! let t = Transform::IDENTITY
//!     .translated(Vec3::new(1.0, 0.0, 0.0))
//!     .scaled(Vec3::new(2.0, 1.0, 1.0));
//!
//! // The origin is only translated, never scaled.
//! let p = t.transform_point(Vec3::ZERO);
//! assert!((p - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
//! ```

use std::ops::Mul;

use glam::{Mat4, Vec3};

/// An affine transform stored as a column-major 4x4 matrix.
///
/// `Transform` is `Copy`, so handing one to a stack or a backend always
/// stores an independent snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Mat4);

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The transform that leaves every point where it is.
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// Wrap an existing matrix.
    pub const fn from_matrix(matrix: Mat4) -> Self {
        Self(matrix)
    }

    /// A pure translation.
    pub fn from_translation(offset: Vec3) -> Self {
        Self(Mat4::from_translation(offset))
    }

    /// A pure rotation of `degrees` about `axis`.
    ///
    /// The axis does not need to be normalized. A zero axis yields identity.
    pub fn from_rotation(degrees: f32, axis: Vec3) -> Self {
        match axis.try_normalize() {
            Some(axis) => Self(Mat4::from_axis_angle(axis, degrees.to_radians())),
            None => Self::IDENTITY,
        }
    }

    /// A pure (possibly non-uniform) scale.
    pub fn from_scale(scale: Vec3) -> Self {
        Self(Mat4::from_scale(scale))
    }

    /// Right-multiply by `local`, so `local` applies before `self`.
    #[inline]
    pub fn then(self, local: Transform) -> Self {
        Self(self.0 * local.0)
    }

    /// Compose a translation.
    pub fn translated(self, offset: Vec3) -> Self {
        self.then(Self::from_translation(offset))
    }

    /// Compose a rotation of `degrees` about `axis`.
    pub fn rotated(self, degrees: f32, axis: Vec3) -> Self {
        self.then(Self::from_rotation(degrees, axis))
    }

    /// Compose a scale.
    pub fn scaled(self, scale: Vec3) -> Self {
        self.then(Self::from_scale(scale))
    }

    /// The underlying matrix.
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// Map a point (w = 1) through the transform.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.0.transform_point3(point)
    }

    /// Map a direction (w = 0) through the transform.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.0.transform_vector3(vector)
    }

    /// The normal matrix (inverse transpose of this transform).
    ///
    /// Normals must be transformed with this matrix rather than the model
    /// matrix whenever the model contains non-uniform scaling.
    ///
    /// # Non-invertible transforms
    ///
    /// Flattened objects such as the ground plane have a zero scale axis.
    /// For those the identity matrix is returned to avoid NaN/Inf values.
    pub fn normal_matrix(&self) -> Mat4 {
        const EPSILON: f32 = 1e-6;
        if self.0.determinant().abs() < EPSILON {
            Mat4::IDENTITY
        } else {
            self.0.inverse().transpose()
        }
    }

    /// Approximate equality, element by element.
    pub fn abs_diff_eq(&self, other: &Transform, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.then(rhs)
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self(matrix)
    }
}

impl From<Transform> for Mat4 {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    #[test]
    fn test_transform_default() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translate_then_scale_keeps_origin_unscaled() {
        let t = Transform::IDENTITY
            .translated(Vec3::new(1.0, 0.0, 0.0))
            .scaled(Vec3::new(2.0, 1.0, 1.0));

        let p = t.transform_point(Vec3::ZERO);
        assert!(
            approx_eq_vec3(p, Vec3::new(1.0, 0.0, 0.0)),
            "Expected (1, 0, 0), got {:?}",
            p
        );
    }

    #[test]
    fn test_scale_then_translate_scales_offset() {
        let t = Transform::IDENTITY
            .scaled(Vec3::new(2.0, 1.0, 1.0))
            .translated(Vec3::new(1.0, 0.0, 0.0));

        let p = t.transform_point(Vec3::ZERO);
        assert!(
            approx_eq_vec3(p, Vec3::new(2.0, 0.0, 0.0)),
            "Expected (2, 0, 0), got {:?}",
            p
        );
    }

    #[test]
    fn test_rotation_in_degrees() {
        // 90 degrees about Y takes +X to -Z
        let t = Transform::from_rotation(90.0, Vec3::Y);
        let p = t.transform_point(Vec3::X);
        assert!(approx_eq_vec3(p, Vec3::NEG_Z), "got {:?}", p);
    }

    #[test]
    fn test_rotation_axis_is_normalized() {
        let a = Transform::from_rotation(45.0, Vec3::new(0.0, 3.0, 0.0));
        let b = Transform::from_rotation(45.0, Vec3::Y);
        assert!(a.abs_diff_eq(&b, EPSILON));
    }

    #[test]
    fn test_rotation_about_zero_axis_is_identity() {
        assert_eq!(Transform::from_rotation(30.0, Vec3::ZERO), Transform::IDENTITY);
    }

    #[test]
    fn test_translate_rotate_scale_order() {
        // translate, then rotate, then scale: the scale hits the vertex first
        let t = Transform::IDENTITY
            .translated(Vec3::new(0.0, 0.0, 5.0))
            .rotated(90.0, Vec3::Y)
            .scaled(Vec3::new(3.0, 1.0, 1.0));

        let p = t.transform_point(Vec3::X);
        assert!(
            approx_eq_vec3(p, Vec3::new(0.0, 0.0, 2.0)),
            "Expected (0, 0, 2), got {:?}",
            p
        );
    }

    #[test]
    fn test_vector_ignores_translation() {
        let t = Transform::from_translation(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(t.transform_vector(Vec3::Y), Vec3::Y);
    }

    #[test]
    fn test_mul_matches_then() {
        let a = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let b = Transform::from_scale(Vec3::splat(2.0));
        assert_eq!(a * b, a.then(b));
    }

    #[test]
    fn test_normal_matrix_with_scale() {
        let t = Transform::from_scale(Vec3::new(1.0, 2.0, 1.0));
        let expected = t.matrix().inverse().transpose();
        assert_eq!(t.normal_matrix(), expected);
    }

    #[test]
    fn test_normal_matrix_flattened_plane() {
        // The ground plane is scaled to zero thickness
        let t = Transform::IDENTITY
            .translated(Vec3::new(0.0, -2.0, 0.0))
            .scaled(Vec3::new(50.0, 0.0, 50.0));
        let normal = t.normal_matrix();

        assert_eq!(normal, Mat4::IDENTITY);
        assert!(!normal.is_nan());
    }
}
