use whorl_engine::coords::{Rect, Vec2};
use whorl_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Element;

/// Top-level coordinator that owns the per-frame draw stream.
///
/// The host calls [`frame`](Self::frame) whenever a redraw is due (typically
/// when a spinner's redraw request marked the surface dirty); the returned
/// `DrawList` is handed to whatever renderer consumes the commands.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
///
/// // In your frame callback:
/// let draw_list = ui.frame(&root, Vec2::splat(200.0));
/// renderer.render(target, draw_list);
/// ```
#[derive(Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Lay out and paint a widget tree for this frame.
    ///
    /// The root widget is borrowed, not consumed — spinners hold animation
    /// state that must persist across frames. The root is measured against
    /// the viewport and painted at its measured size, anchored at the
    /// viewport origin.
    #[must_use]
    pub fn frame(&mut self, root: &Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        let size = root.measure(Constraints::loose(viewport));
        let rect = Rect::from_origin_size(Vec2::zero(), size);

        let mut painter = Painter::new(&mut self.draw_list);
        root.paint(&mut painter, rect);

        &mut self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WhorlConfig;
    use crate::widgets::whorl::Whorl;
    use std::sync::Arc;
    use whorl_engine::scene::DrawCmd;

    fn spinner_root() -> Element {
        Whorl::new(WhorlConfig::default(), Arc::new(|| {})).unwrap().into()
    }

    #[test]
    fn frame_repopulates_the_draw_list() {
        let root = spinner_root();
        let mut scene = UiScene::new();

        let first = scene.frame(&root, Vec2::splat(200.0)).len();
        assert_eq!(first, 3);

        // A second frame replaces the stream instead of appending to it.
        let second = scene.frame(&root, Vec2::splat(200.0)).len();
        assert_eq!(second, 3);
    }

    #[test]
    fn frame_paints_the_root_at_its_measured_size() {
        let root = spinner_root();
        let mut scene = UiScene::new();

        // The spinner's natural span (125) wins over the looser viewport, so
        // ring 0 sits half a stroke inside a 125-pixel square.
        let dl = scene.frame(&root, Vec2::splat(200.0));
        let DrawCmd::Arc(outer) = &dl.items()[0] else { panic!("expected an arc") };
        assert_eq!(outer.bounds, Rect::new(2.5, 2.5, 120.0, 120.0));
    }
}
