//! Drawing helper that pairs the transform stack with a backend.

use glam::Vec3;

use campus_scene::layout::{Part, Placement};
use campus_scene::{Color, DrawResult, MeshKind, Transform, TransformStack};

use crate::backend::DrawPrimitive;

/// A cursor into the transform stack plus the backend it draws to.
///
/// Transforms composed through a painter modify the current stack frame.
/// [`nested`](Self::nested) opens a child frame that is restored when the
/// closure returns, on success or on error.
pub struct Painter<'a, B: ?Sized> {
    stack: &'a mut TransformStack,
    backend: &'a mut B,
    mesh: MeshKind,
    draw_calls: &'a mut u32,
}

impl<'a, B: DrawPrimitive + ?Sized> Painter<'a, B> {
    /// Wrap a stack and backend. Successful draws are added to `draw_calls`.
    pub fn new(stack: &'a mut TransformStack, backend: &'a mut B, draw_calls: &'a mut u32) -> Self {
        Self {
            stack,
            backend,
            mesh: MeshKind::Cube,
            draw_calls,
        }
    }

    /// Switch the active mesh.
    pub fn use_mesh(&mut self, mesh: MeshKind) -> DrawResult {
        self.backend.select_mesh(mesh)?;
        self.mesh = mesh;
        Ok(())
    }

    /// The transform the next draw will use.
    pub fn current(&self) -> Transform {
        self.stack.current()
    }

    /// Depth of the underlying stack.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.stack.translate(offset);
    }

    pub fn rotate(&mut self, degrees: f32, axis: Vec3) {
        self.stack.rotate(degrees, axis);
    }

    pub fn scale(&mut self, scale: Vec3) {
        self.stack.scale(scale);
    }

    /// Apply translate, then rotate, then scale.
    pub fn place(&mut self, placement: &Placement) {
        self.translate(placement.translate);
        if let Some(rotation) = placement.rotate {
            self.rotate(rotation.degrees, rotation.axis);
        }
        self.scale(placement.scale);
    }

    /// Draw the active mesh with the current transform.
    pub fn draw(&mut self, color: Color) -> DrawResult {
        let transform = self.stack.current();
        self.backend.draw(self.mesh, color, &transform)?;
        *self.draw_calls += 1;
        Ok(())
    }

    /// Run `body` inside a child transform frame.
    pub fn nested<F>(&mut self, body: F) -> DrawResult
    where
        F: FnOnce(&mut Painter<'_, B>) -> DrawResult,
    {
        let mut scope = self.stack.scope();
        let mut child = Painter {
            stack: &mut *scope,
            backend: &mut *self.backend,
            mesh: self.mesh,
            draw_calls: &mut *self.draw_calls,
        };
        body(&mut child)
    }

    /// Draw one part in its own frame.
    pub fn part(&mut self, part: &Part) -> DrawResult {
        self.nested(|p| {
            p.place(&part.placement);
            p.draw(part.color)
        })
    }

    /// Draw several parts, each in its own frame.
    pub fn parts(&mut self, parts: &[Part]) -> DrawResult {
        for part in parts {
            self.part(part)?;
        }
        Ok(())
    }
}
