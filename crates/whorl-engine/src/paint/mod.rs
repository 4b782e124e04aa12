//! Paint types: colors and stroke styles.

mod color;
mod stroke;

pub use color::{Color, ParseColorError};
pub use stroke::Stroke;
