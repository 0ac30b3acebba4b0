//! splitview - resizable side-by-side panels with draggable dividers
//!
//! This crate provides a split container widget and the message plumbing
//! around it, following the Elm Architecture pattern: the host turns input
//! into [`Msg`] values, [`update::update`] applies them to the
//! [`SplitContainer`], and the returned [`Cmd`] says what to do next.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panels;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SplitConfig;
pub use messages::Msg;
pub use model::{PanelId, SplitContainer};
pub use view::Surface;
