pub mod arc;
pub mod rect;
