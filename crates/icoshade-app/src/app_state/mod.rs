//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config reload, keyboard and pointer input, and
//! the renderer.

mod controls;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod render;
mod shutdown;

pub use core::{AppOptions, IcoshadeApp};
