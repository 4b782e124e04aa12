//! Whorl UI — widget layer on top of `whorl-engine`.
//!
//! The centerpiece is the [`widgets::whorl::Whorl`] loading indicator:
//! several concentric arcs, each rotating at its own angular velocity so the
//! outer rings appear to chase the inner ones.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use whorl_ui::prelude::*;
//!
//! let redraw: RedrawRequest = Arc::new(|| { /* mark the surface dirty */ });
//! let spinner = Whorl::new(WhorlConfig::default(), redraw)?;
//! let control = spinner.handle();
//!
//! let mut scene = UiScene::new();
//! control.start();
//! // In your frame callback:
//! let draw_list = scene.frame(&spinner.into(), Vec2::splat(200.0));
//! // Pass draw_list to your renderer.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`widget::Widget`] for any type, then use it anywhere an
//! [`widget::Element`] is accepted.

pub mod config;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and host spinners — import this in your component files.
pub mod prelude {
    pub use crate::config::{ConfigError, Parallax, WhorlConfig};
    pub use crate::constraints::Constraints;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::whorl::{RedrawRequest, Whorl, WhorlHandle};

    // Re-export the engine primitives everyone needs.
    pub use whorl_engine::coords::{Rect, Vec2};
    pub use whorl_engine::paint::{Color, Stroke};
}
