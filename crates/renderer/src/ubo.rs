//! Uniform data handed to the rendering backend.
//!
//! These structures mirror the shader's uniform blocks. All structures use
//! `#[repr(C)]` for predictable memory layout and implement `Pod` and
//! `Zeroable` so a backend can upload them with `bytemuck::bytes_of`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use campus_scene::{Color, DirectionalLight, Transform};

/// Per-frame uniform data: camera matrices and the light.
///
/// # Memory Layout
///
/// - Offset 0: view matrix (64 bytes)
/// - Offset 64: projection matrix (64 bytes)
/// - Offset 128: viewProjection matrix (64 bytes)
/// - Offset 192: eye position (12 bytes)
/// - Offset 204: padding (4 bytes)
/// - Offset 208: directional light (32 bytes)
/// - Total size: 240 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// View matrix (world to view space).
    pub view: Mat4,
    /// Projection matrix (view to clip space).
    pub projection: Mat4,
    /// Combined view-projection matrix.
    pub view_projection: Mat4,
    /// Camera world position.
    pub eye: Vec3,
    /// Padding for 16-byte alignment.
    pub _padding: f32,
    /// The scene's single light.
    pub light: DirectionalLight,
}

impl FrameUniforms {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates frame uniforms from camera matrices, eye position and light.
    pub fn new(view: Mat4, projection: Mat4, eye: Vec3, light: DirectionalLight) -> Self {
        Self {
            view,
            projection,
            view_projection: projection * view,
            eye,
            _padding: 0.0,
            light,
        }
    }
}

/// Per-draw uniform data.
///
/// # Memory Layout
///
/// - Offset 0: model matrix (64 bytes)
/// - Offset 64: normal matrix (64 bytes)
/// - Offset 128: color (16 bytes)
/// - Total size: 144 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// Model matrix (object to world space).
    pub model: Mat4,
    /// Normal matrix, the inverse transpose of the model matrix.
    pub normal_matrix: Mat4,
    /// Flat RGBA color, alpha always 1.
    pub color: Vec4,
}

impl ObjectUniforms {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates object uniforms for one draw.
    pub fn new(transform: &Transform, color: Color) -> Self {
        Self {
            model: transform.matrix(),
            normal_matrix: transform.normal_matrix(),
            color: color.rgb().extend(1.0),
        }
    }
}
