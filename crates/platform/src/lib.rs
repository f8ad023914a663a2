//! Platform layer for the campus viewer.
//!
//! This crate provides platform-specific functionality:
//! - Window management via winit
//! - Keyboard bindings from physical keys to logical actions

mod input;
mod window;

pub use input::{KeyBindings, KeyCode};
pub use window::{Window, WindowConfig};

// Re-export winit types that users might need
pub use winit::event::{ElementState, KeyEvent, WindowEvent};
pub use winit::event_loop::EventLoop;
pub use winit::keyboard::PhysicalKey;
