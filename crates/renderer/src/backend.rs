//! The seam between scene composition and a rendering API.

use campus_scene::{Color, DrawResult, MeshKind, Transform};

use crate::ubo::FrameUniforms;

/// A backend that can draw the two primitive meshes.
///
/// The composer calls [`begin_frame`](Self::begin_frame) once per frame,
/// [`select_mesh`](Self::select_mesh) when a group switches mesh, and
/// [`draw`](Self::draw) for every part. A backend receives the full model
/// transform with each draw and derives the normal matrix itself
/// (see [`Transform::normal_matrix`]).
///
/// Any closure `FnMut(MeshKind, Color, &Transform) -> DrawResult` is a
/// backend, which keeps tests short:
///
/// ```
/// use campus_renderer::{DrawGroup, SceneComposer};
/// use campus_scene::{Color, DrawResult, HingeConfig, HingeState, MeshKind, Transform};
///
/// let mut draws = 0;
/// let mut backend = |_: MeshKind, _: Color, _: &Transform| -> DrawResult {
///     draws += 1;
///     Ok(())
/// };
/// let mut composer = SceneComposer::new(HingeConfig::default());
/// let stats = composer.render(Transform::IDENTITY, &HingeState::default(), &mut backend);
/// assert_eq!(stats.groups_drawn as usize, DrawGroup::ALL.len());
/// assert_eq!(stats.draw_calls, draws);
/// ```
pub trait DrawPrimitive {
    /// Receive the per-frame uniforms before any draw.
    fn begin_frame(&mut self, _uniforms: &FrameUniforms) -> DrawResult {
        Ok(())
    }

    /// Make `mesh` the active mesh.
    fn select_mesh(&mut self, _mesh: MeshKind) -> DrawResult {
        Ok(())
    }

    /// Draw `mesh` with the given flat `color` and model `transform`.
    fn draw(&mut self, mesh: MeshKind, color: Color, transform: &Transform) -> DrawResult;
}

impl<F> DrawPrimitive for F
where
    F: FnMut(MeshKind, Color, &Transform) -> DrawResult,
{
    fn draw(&mut self, mesh: MeshKind, color: Color, transform: &Transform) -> DrawResult {
        self(mesh, color, transform)
    }
}
