use whorl_engine::coords::Rect;
use whorl_engine::paint::{Color, Stroke};
use whorl_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Commands composite in
/// call order, so paint backdrops before the shapes that sit on them.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    /// Stroked arc on the oval inscribed in `bounds`.
    ///
    /// `start_angle` and `sweep_angle` are degrees, clockwise from the
    /// positive X axis. The arc is not filled.
    pub fn stroke_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, stroke: Stroke) {
        self.draw_list.push_arc(bounds, start_angle, sweep_angle, stroke);
    }

    /// Solid filled rectangle.
    pub fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.draw_list.push_rect(bounds, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whorl_engine::scene::DrawCmd;

    #[test]
    fn calls_record_in_composite_order() {
        let mut dl = DrawList::new();
        let mut painter = Painter::new(&mut dl);

        let bounds = Rect::new(0.0, 0.0, 50.0, 50.0);
        painter.fill_rect(bounds, Color::from_srgb_u8(20, 20, 20, 255));
        painter.stroke_arc(bounds, 0.0, 90.0, Stroke::new(2.0, Color::from_srgb_u8(255, 0, 0, 255)));

        assert_eq!(dl.len(), 2);
        assert!(matches!(dl.items()[0], DrawCmd::Rect(_)));
        assert!(matches!(dl.items()[1], DrawCmd::Arc(_)));
    }

    #[test]
    fn fill_rect_records_bounds_and_color() {
        let mut dl = DrawList::new();
        let bounds = Rect::new(5.0, 5.0, 30.0, 20.0);
        let color = Color::from_srgb_u8(18, 18, 18, 255);
        Painter::new(&mut dl).fill_rect(bounds, color);

        let DrawCmd::Rect(rect) = &dl.items()[0] else { panic!("expected a rect") };
        assert_eq!(rect.bounds, bounds);
        assert_eq!(rect.color, color);
    }
}
