//! Runtime module - winit/platform integration
//!
//! This module contains the platform code for running the demo window:
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to action mapping
//! - `mouse` - Pointer event translation
//! - `renderer` - softbuffer presentation

pub mod app;
pub mod input;
pub mod mouse;
pub mod renderer;

pub use app::App;
