//! Scene composition and the per-frame driver.
//!
//! This crate turns the scene model into draw calls:
//! - The [`DrawPrimitive`] backend seam
//! - Hierarchical render traversal over the draw groups
//! - Uniform layouts handed to the backend
//! - A headless recording backend

pub mod backend;
pub mod composer;
pub mod frame;
pub mod painter;
pub mod recorder;
pub mod ubo;
pub mod viewer;

pub use backend::DrawPrimitive;
pub use composer::{DrawGroup, GroupReport, SceneComposer};
pub use frame::{FrameCounter, FrameStats};
pub use painter::Painter;
pub use recorder::{DrawCommand, FaultPlan, MeshHandle, MeshRegistry, RecordingBackend};
pub use ubo::{FrameUniforms, ObjectUniforms};
pub use viewer::{SceneState, Viewer, ViewerConfig};
