//! A headless backend that records draw commands.
//!
//! [`RecordingBackend`] stands in for a GPU backend: it uploads each primitive
//! mesh once into a [`MeshRegistry`], binds meshes on request and appends a
//! [`DrawCommand`] for every draw. A [`FaultPlan`] makes it fail on purpose so
//! the composer's error isolation can be exercised.

use std::collections::HashMap;

use tracing::{debug, trace};

use campus_scene::{Color, DrawError, DrawResult, MeshKind, MeshVertex, Transform};

use crate::backend::DrawPrimitive;
use crate::ubo::{FrameUniforms, ObjectUniforms};

/// Handle to an uploaded mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshHandle {
    pub id: u32,
    pub vertex_count: u32,
    pub index_count: u32,
    /// Size of the vertex data in bytes
    pub vertex_bytes: usize,
}

/// Meshes uploaded so far, keyed by kind.
///
/// Each mesh is built at most once; later requests return the cached handle.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    handles: HashMap<MeshKind, MeshHandle>,
    uploads: u32,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `mesh`, uploading it first if needed.
    pub fn get_or_upload(&mut self, mesh: MeshKind) -> MeshHandle {
        if let Some(handle) = self.handles.get(&mesh) {
            return *handle;
        }

        let data = mesh.data();
        let vertices: Vec<MeshVertex> = data.vertices();
        let handle = MeshHandle {
            id: self.uploads,
            vertex_count: data.vertex_count() as u32,
            index_count: data.index_count() as u32,
            vertex_bytes: bytemuck::cast_slice::<MeshVertex, u8>(&vertices).len(),
        };
        self.uploads += 1;
        self.handles.insert(mesh, handle);
        debug!(
            ?mesh,
            vertices = handle.vertex_count,
            indices = handle.index_count,
            bytes = handle.vertex_bytes,
            "Uploaded mesh"
        );
        handle
    }

    /// Handle for `mesh` if it has been uploaded.
    pub fn get(&self, mesh: MeshKind) -> Option<MeshHandle> {
        self.handles.get(&mesh).copied()
    }

    /// Number of uploads performed.
    pub fn upload_count(&self) -> u32 {
        self.uploads
    }
}

/// One recorded draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshKind,
    pub color: Color,
    pub uniforms: ObjectUniforms,
}

/// Failures to inject into a [`RecordingBackend`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultPlan {
    /// Refuse to bind this mesh
    pub unavailable_mesh: Option<MeshKind>,
    /// Fail the n-th draw of each frame (0-based)
    pub fail_draw: Option<usize>,
    /// Refuse to begin frames
    pub fail_frames: bool,
}

/// Backend that keeps the last frame's draws in memory.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    registry: MeshRegistry,
    bound: Option<MeshKind>,
    frame: Option<FrameUniforms>,
    commands: Vec<DrawCommand>,
    draw_attempts: usize,
    faults: FaultPlan,
}

impl RecordingBackend {
    /// Create a backend with both primitives uploaded.
    pub fn new() -> Self {
        Self::with_faults(FaultPlan::default())
    }

    /// Create a backend that fails according to `faults`.
    pub fn with_faults(faults: FaultPlan) -> Self {
        let mut backend = Self {
            faults,
            ..Self::default()
        };
        for mesh in MeshKind::ALL {
            if backend.faults.unavailable_mesh != Some(mesh) {
                backend.registry.get_or_upload(mesh);
            }
        }
        backend
    }

    /// Draws recorded since the last [`begin_frame`](DrawPrimitive::begin_frame).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Uniforms of the current frame.
    pub fn frame_uniforms(&self) -> Option<&FrameUniforms> {
        self.frame.as_ref()
    }

    pub fn registry(&self) -> &MeshRegistry {
        &self.registry
    }

    /// Recorded draws of one color.
    pub fn commands_with_color(&self, color: Color) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |command| command.color == color)
    }

    /// Number of recorded draws using `mesh`.
    pub fn count_mesh(&self, mesh: MeshKind) -> usize {
        self.commands.iter().filter(|command| command.mesh == mesh).count()
    }
}

impl DrawPrimitive for RecordingBackend {
    fn begin_frame(&mut self, uniforms: &FrameUniforms) -> DrawResult {
        if self.faults.fail_frames {
            return Err(DrawError::Backend("frame acquisition failed".into()));
        }
        self.commands.clear();
        self.draw_attempts = 0;
        self.bound = None;
        self.frame = Some(*uniforms);
        Ok(())
    }

    fn select_mesh(&mut self, mesh: MeshKind) -> DrawResult {
        if self.faults.unavailable_mesh == Some(mesh) {
            return Err(DrawError::MeshUnavailable(mesh));
        }
        self.registry.get_or_upload(mesh);
        self.bound = Some(mesh);
        Ok(())
    }

    fn draw(&mut self, mesh: MeshKind, color: Color, transform: &Transform) -> DrawResult {
        let attempt = self.draw_attempts;
        self.draw_attempts += 1;
        if self.faults.fail_draw == Some(attempt) {
            return Err(DrawError::ResourceExhausted(format!(
                "no uniform slot for draw {attempt}"
            )));
        }
        if self.bound != Some(mesh) {
            self.select_mesh(mesh)?;
        }

        trace!(?mesh, ?color, "Recording draw");
        self.commands.push(DrawCommand {
            mesh,
            color,
            uniforms: ObjectUniforms::new(transform, color),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meshes_uploaded_once() {
        let mut backend = RecordingBackend::new();
        assert_eq!(backend.registry().upload_count(), 2);

        backend.select_mesh(MeshKind::Cube).unwrap();
        backend.select_mesh(MeshKind::Prism).unwrap();
        backend.select_mesh(MeshKind::Cube).unwrap();
        assert_eq!(backend.registry().upload_count(), 2);

        let cube = backend.registry().get(MeshKind::Cube).unwrap();
        assert_eq!(cube.vertex_count, 24);
        assert_eq!(cube.index_count, 36);
        assert_eq!(cube.vertex_bytes, 24 * std::mem::size_of::<MeshVertex>());
    }

    #[test]
    fn test_draw_records_command() {
        let mut backend = RecordingBackend::new();
        backend.begin_frame(&FrameUniforms::default()).unwrap();
        backend.select_mesh(MeshKind::Prism).unwrap();
        let transform = Transform::from_translation(glam::Vec3::X);
        backend.draw(MeshKind::Prism, Color::Grey, &transform).unwrap();

        assert_eq!(backend.commands().len(), 1);
        let command = backend.commands()[0];
        assert_eq!(command.mesh, MeshKind::Prism);
        assert_eq!(command.uniforms.model, transform.matrix());
        assert_eq!(backend.count_mesh(MeshKind::Prism), 1);
        assert_eq!(backend.commands_with_color(Color::Grey).count(), 1);
    }

    #[test]
    fn test_begin_frame_clears_commands() {
        let mut backend = RecordingBackend::new();
        backend.begin_frame(&FrameUniforms::default()).unwrap();
        backend.draw(MeshKind::Cube, Color::Red, &Transform::IDENTITY).unwrap();
        backend.begin_frame(&FrameUniforms::default()).unwrap();
        assert!(backend.commands().is_empty());
    }

    #[test]
    fn test_unavailable_mesh_fails() {
        let mut backend = RecordingBackend::with_faults(FaultPlan {
            unavailable_mesh: Some(MeshKind::Prism),
            ..FaultPlan::default()
        });
        assert_eq!(backend.registry().upload_count(), 1);
        assert_eq!(
            backend.select_mesh(MeshKind::Prism),
            Err(DrawError::MeshUnavailable(MeshKind::Prism))
        );
        assert!(backend.draw(MeshKind::Prism, Color::Grey, &Transform::IDENTITY).is_err());
        assert!(backend.draw(MeshKind::Cube, Color::Grey, &Transform::IDENTITY).is_ok());
    }

    #[test]
    fn test_nth_draw_fails() {
        let mut backend = RecordingBackend::with_faults(FaultPlan {
            fail_draw: Some(1),
            ..FaultPlan::default()
        });
        backend.begin_frame(&FrameUniforms::default()).unwrap();
        assert!(backend.draw(MeshKind::Cube, Color::Red, &Transform::IDENTITY).is_ok());
        assert!(matches!(
            backend.draw(MeshKind::Cube, Color::Red, &Transform::IDENTITY),
            Err(DrawError::ResourceExhausted(_))
        ));
        assert!(backend.draw(MeshKind::Cube, Color::Red, &Transform::IDENTITY).is_ok());
        assert_eq!(backend.commands().len(), 2);
    }
}
