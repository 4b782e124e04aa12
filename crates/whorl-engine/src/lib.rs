//! Whorl engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the widget layer:
//! geometry, paint, the recorded draw stream, and animation timing.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
