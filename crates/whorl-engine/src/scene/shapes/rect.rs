use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled-rectangle draw payload. Hosts use it for backdrops behind the
/// stroked arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub bounds: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(bounds: Rect, color: Color) -> Self {
        Self { bounds, color }
    }
}

impl DrawList {
    /// Records a filled-rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, bounds: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd::new(bounds, color)));
    }
}
