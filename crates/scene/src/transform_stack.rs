//! Stack of transform snapshots for hierarchical drawing.
//!
//! The stack mirrors the call stack of a render traversal: a draw group saves
//! the current transform before nesting, composes local offsets onto the top
//! frame, and restores the parent's transform on the way out.
//!
//! Prefer [`TransformStack::scope`] over raw `push`/`pop`. The returned
//! [`TransformScope`] guard restores the stack when it is dropped, which covers
//! early `?` returns and unwinding as well as the normal path.
//!
//! # Example
//!
//! ```
//! use campus_scene::{Transform, TransformStack};
//! use glam::Vec3;
//!
//! let mut stack = TransformStack::new(Transform::IDENTITY);
//! {
//!     let mut building = stack.scope();
//!     building.translate(Vec3::new(-1.5, 0.0, 0.0));
//!     {
//!         let mut body = building.scope();
//!         body.scale(Vec3::new(11.6, 4.0, 4.0));
//!         // draw with body.current() ...
//!     }
//!     // back at the building origin, unscaled
//! }
//! assert_eq!(stack.current(), Transform::IDENTITY);
//! assert_eq!(stack.depth(), 0);
//! ```

use std::ops::{Deref, DerefMut};

use glam::Vec3;
use tracing::{error, warn};

use crate::error::StackError;
use crate::transform::Transform;

/// Push and pop counters, used to verify balanced traversals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackCounters {
    /// Frames pushed since the last reset.
    pub pushes: u64,
    /// Frames popped since the last reset.
    pub pops: u64,
}

impl StackCounters {
    /// True when every push has been matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.pushes == self.pops
    }
}

/// An ordered stack of transform snapshots.
///
/// The bottom frame is the root transform and can never be popped. The top
/// frame is the "current" transform that [`compose`](Self::compose) modifies.
#[derive(Clone, Debug)]
pub struct TransformStack {
    frames: Vec<Transform>,
    counters: StackCounters,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

impl TransformStack {
    /// Create a stack whose root frame is `root`.
    pub fn new(root: Transform) -> Self {
        Self {
            frames: vec![root],
            counters: StackCounters::default(),
        }
    }

    /// Drop every pushed frame, replace the root and clear the counters.
    pub fn reset(&mut self, root: Transform) {
        self.frames.clear();
        self.frames.push(root);
        self.counters = StackCounters::default();
    }

    /// Store a copy of `transform` as the new top frame.
    pub fn push(&mut self, transform: Transform) {
        self.frames.push(transform);
        self.counters.pushes += 1;
    }

    /// Save the current transform so that later changes can be undone.
    pub fn push_current(&mut self) {
        self.push(self.current());
    }

    /// Remove and return the top frame.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] when only the root frame is left.
    pub fn pop(&mut self) -> Result<Transform, StackError> {
        if self.frames.len() <= 1 {
            return Err(StackError::Empty);
        }
        self.counters.pops += 1;
        self.frames.pop().ok_or(StackError::Empty)
    }

    /// The active transform.
    #[inline]
    pub fn current(&self) -> Transform {
        self.frames.last().copied().unwrap_or_default()
    }

    /// Right-multiply the top frame by `local`.
    ///
    /// Only the top frame changes; frames below it keep their snapshots.
    pub fn compose(&mut self, local: Transform) {
        if let Some(top) = self.frames.last_mut() {
            *top = top.then(local);
        }
    }

    /// Compose a translation onto the top frame.
    pub fn translate(&mut self, offset: Vec3) {
        self.compose(Transform::from_translation(offset));
    }

    /// Compose a rotation of `degrees` about `axis` onto the top frame.
    pub fn rotate(&mut self, degrees: f32, axis: Vec3) {
        self.compose(Transform::from_rotation(degrees, axis));
    }

    /// Compose a scale onto the top frame.
    pub fn scale(&mut self, scale: Vec3) {
        self.compose(Transform::from_scale(scale));
    }

    /// Number of frames pushed above the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Push and pop counts since the last reset.
    pub fn counters(&self) -> StackCounters {
        self.counters
    }

    /// Push a copy of the current transform and return a guard that pops
    /// back to the present depth when dropped.
    pub fn scope(&mut self) -> TransformScope<'_> {
        let depth = self.depth();
        self.push_current();
        TransformScope { stack: self, depth }
    }

    /// Pop until exactly `depth` frames remain above the root.
    fn unwind_to(&mut self, depth: usize) -> Result<(), StackError> {
        let found = self.depth();
        if found < depth {
            return Err(StackError::Underflow {
                expected: depth,
                found,
            });
        }
        if found > depth + 1 {
            warn!(
                leaked = found - depth - 1,
                "Transform scope closed with unbalanced inner pushes, truncating"
            );
        }
        while self.depth() > depth {
            self.pop()?;
        }
        Ok(())
    }
}

/// Guard returned by [`TransformStack::scope`].
///
/// Dereferences to the stack so the scope can be composed onto, nested, or
/// read. Dropping it restores the stack to the depth it had before the scope
/// was opened.
#[derive(Debug)]
pub struct TransformScope<'a> {
    stack: &'a mut TransformStack,
    depth: usize,
}

impl Deref for TransformScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &TransformStack {
        &*self.stack
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut TransformStack {
        &mut *self.stack
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.stack.unwind_to(self.depth) {
            error!(%err, "Transform stack corrupted, resetting to identity");
            debug_assert!(
                std::thread::panicking(),
                "transform scope closed over a corrupted stack: {err}"
            );
            self.stack.reset(Transform::IDENTITY);
        }
    }
}
