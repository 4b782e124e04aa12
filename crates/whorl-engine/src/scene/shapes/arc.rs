use crate::coords::Rect;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList};

/// Stroked-arc draw payload.
///
/// The arc lies on the oval inscribed in `bounds`. Angles are in degrees,
/// measured clockwise from the positive X axis; `start_angle` may exceed 360
/// (it comes straight from the animation clock and wraps visually).
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub bounds: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub stroke: Stroke,
}

impl ArcCmd {
    #[inline]
    pub fn new(bounds: Rect, start_angle: f32, sweep_angle: f32, stroke: Stroke) -> Self {
        Self { bounds, start_angle, sweep_angle, stroke }
    }
}

impl DrawList {
    /// Records a stroked-arc draw command.
    #[inline]
    pub fn push_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, stroke: Stroke) {
        self.push(DrawCmd::Arc(ArcCmd::new(bounds, start_angle, sweep_angle, stroke)));
    }
}
