//! Scene model for the campus viewer.
//!
//! This crate holds everything that does not need a rendering backend:
//! - Affine transforms and the transform stack
//! - Camera state, projection and keyboard navigation
//! - Gate and door hinge animation
//! - Primitive meshes, colors, lighting and the static scene layout

pub mod camera;
pub mod color;
pub mod error;
pub mod hinge;
pub mod input;
pub mod layout;
pub mod light;
pub mod mesh;
pub mod navigation;
pub mod transform;
pub mod transform_stack;

pub use camera::{CameraState, Projection, ProjectionConfig, StartPose};
pub use color::Color;
pub use error::{DrawError, DrawResult, StackError};
pub use hinge::{HingeAnimator, HingeConfig, HingeState};
pub use input::{Action, HingeId, InputState};
pub use light::DirectionalLight;
pub use mesh::{MeshData, MeshKind, MeshVertex};
pub use navigation::{NavigationConfig, Navigator};
pub use transform::Transform;
pub use transform_stack::{StackCounters, TransformScope, TransformStack};
