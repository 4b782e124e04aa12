use std::sync::Arc;

use whorl_engine::coords::{Rect, Vec2};
use whorl_engine::paint::{Color, Stroke};
use whorl_engine::time::Ticker;

use crate::config::{ConfigError, WhorlConfig};
use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Shared handle the animation loop uses to ask the host for a repaint.
///
/// The Rust stand-in for a view system's invalidate call: hosts typically
/// point it at a dirty flag their frame loop polls.
pub type RedrawRequest = Arc<dyn Fn() + Send + Sync>;

// ── Whorl ─────────────────────────────────────────────────────────────────

/// Concentric-arc loading indicator.
///
/// Each layer is one ring with its own color; layer `i` rotates at
/// `circle_speed + parallax · i` degrees/second, so outer rings appear to
/// chase inner ones. Ring 0 hugs the outer boundary of the view and higher
/// indices nest inward.
///
/// Construction validates the whole configuration up front and fails with
/// [`ConfigError`] rather than producing a partially usable widget. While
/// animating, a dedicated 16 ms loop advances the clock and requests redraws
/// through the host-supplied [`RedrawRequest`].
///
/// # Example
/// ```rust,ignore
/// let spinner = Whorl::new(WhorlConfig::default(), redraw)?;
/// let control = spinner.handle();   // keep for after the widget moves into a tree
/// control.start();
/// ```
pub struct Whorl {
    /// Resolved per-layer colors, index 0 = outermost ring.
    layers: Vec<Color>,
    base_speed: f32,
    parallax_speed: f32,
    sweep_angle: f32,
    stroke_width: f32,
    ticker: Ticker,
    redraw: RedrawRequest,
}

impl core::fmt::Debug for Whorl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Whorl")
            .field("layers", &self.layers)
            .field("base_speed", &self.base_speed)
            .field("parallax_speed", &self.parallax_speed)
            .field("sweep_angle", &self.sweep_angle)
            .field("stroke_width", &self.stroke_width)
            .finish_non_exhaustive()
    }
}

impl Whorl {
    /// Validates `config` and builds the widget.
    ///
    /// Fails when any color token does not parse, when the sweep angle falls
    /// outside the open interval (0, 360), or when the stroke width is not
    /// positive.
    pub fn new(config: WhorlConfig, redraw: RedrawRequest) -> Result<Self, ConfigError> {
        let layers = config.layer_colors()?;
        if config.sweep_angle <= 0.0 || config.sweep_angle >= 360.0 {
            return Err(ConfigError::SweepAngleOutOfBound(config.sweep_angle));
        }
        if config.stroke_width <= 0.0 {
            return Err(ConfigError::NonPositiveStrokeWidth(config.stroke_width));
        }

        Ok(Self {
            layers,
            base_speed: config.circle_speed as f32,
            parallax_speed: config.parallax.degrees_per_layer(),
            sweep_angle: config.sweep_angle,
            stroke_width: config.stroke_width,
            ticker: Ticker::default(),
            redraw,
        })
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Control handle that stays valid after the widget moves into a tree.
    pub fn handle(&self) -> WhorlHandle {
        WhorlHandle {
            ticker: self.ticker.clone(),
            redraw: Arc::clone(&self.redraw),
        }
    }

    /// Begins animating. No-op while already running.
    pub fn start(&self) {
        self.handle().start();
    }

    /// Stops animating, rewinds to the rest angle, and repaints once.
    pub fn stop(&self) {
        self.handle().stop();
    }

    /// Start angle of `layer` after `elapsed_ms` of animation, in degrees.
    ///
    /// Speeds are degrees/second while the clock is milliseconds, hence the
    /// `0.001`.
    fn angle(&self, layer: usize, elapsed_ms: f32) -> f32 {
        (self.base_speed + self.parallax_speed * layer as f32) * elapsed_ms * 0.001
    }
}

impl Widget for Whorl {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let n = self.layers.len() as f32;
        let span = negotiate_span(
            constraints,
            natural_span(n, self.stroke_width),
            min_span(n, self.stroke_width),
        );
        Vec2::splat(span)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let elapsed = self.ticker.elapsed_millis() as f32;
        let gap = ring_gap(rect.short_side(), self.layers.len(), self.stroke_width);

        for (index, &color) in self.layers.iter().enumerate() {
            painter.stroke_arc(
                ring_bounds(rect, index, self.stroke_width, gap),
                self.angle(index, elapsed),
                self.sweep_angle,
                Stroke::new(self.stroke_width, color),
            );
        }
    }
}

impl Drop for Whorl {
    fn drop(&mut self) {
        // A dropped view must not leave its loop thread spinning.
        self.ticker.stop();
    }
}

// ── WhorlHandle ───────────────────────────────────────────────────────────

/// Clonable start/stop control for a [`Whorl`].
#[derive(Clone)]
pub struct WhorlHandle {
    ticker: Ticker,
    redraw: RedrawRequest,
}

impl WhorlHandle {
    /// Begins animating: the clock restarts from zero and a 16 ms loop
    /// requests one redraw per tick. No-op while already running.
    pub fn start(&self) {
        let redraw = Arc::clone(&self.redraw);
        if !self.ticker.start(move || redraw()) {
            log::debug!("whorl spinner already running, start ignored");
        }
    }

    /// Cancels the animation loop and rewinds the clock, then requests one
    /// final redraw so the view visibly returns to the rest angle.
    pub fn stop(&self) {
        self.ticker.stop();
        (self.redraw)();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }
}

// ── ring layout ───────────────────────────────────────────────────────────

/// Smallest square that fits every ring: four stroke widths per layer plus
/// one more for the outer half-stroke margins.
fn min_span(layer_count: f32, stroke_width: f32) -> f32 {
    stroke_width * 4.0 * layer_count + stroke_width
}

/// Preferred square when the host does not dictate a size.
fn natural_span(layer_count: f32, stroke_width: f32) -> f32 {
    stroke_width * 8.0 * layer_count + stroke_width
}

/// Square size negotiation.
///
/// An exact request wins; otherwise the natural span, capped by the
/// available width. The result never drops below `min` — the widget refuses
/// to shrink past the point where rings would overlap.
fn negotiate_span(constraints: Constraints, want: f32, min: f32) -> f32 {
    let result = if constraints.is_exact_width() {
        constraints.max.x
    } else if constraints.max.x.is_finite() {
        want.min(constraints.max.x)
    } else {
        want
    };
    result.max(min)
}

/// Gap between successive rings for a view of the given span.
///
/// The quotient is floored (measured spans are whole pixels) and the gap is
/// capped at 4× the stroke width so rings stay visually grouped when space
/// is abundant.
fn ring_gap(span: f32, layer_count: usize, stroke_width: f32) -> f32 {
    let want = (span / (layer_count as f32 * 2.0)).floor() - stroke_width;
    want.min(stroke_width * 4.0)
}

/// Bounding square for ring `index`.
///
/// Ring 0 hugs the outer boundary; each following ring steps inward by one
/// stroke plus one gap. The half-stroke inset keeps the outermost stroke
/// fully inside the view.
fn ring_bounds(rect: Rect, index: usize, stroke_width: f32, gap: f32) -> Rect {
    let square = Rect::from_origin_size(rect.origin, Vec2::splat(rect.short_side()));
    square.inset(index as f32 * (stroke_width + gap) + stroke_width / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whorl_engine::scene::{DrawCmd, DrawList};

    fn noop_redraw() -> RedrawRequest {
        Arc::new(|| {})
    }

    fn whorl(config: WhorlConfig) -> Result<Whorl, ConfigError> {
        Whorl::new(config, noop_redraw())
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn layer_count_follows_color_tokens() {
        assert_eq!(whorl(WhorlConfig::default()).unwrap().layer_count(), 3);
        let two = whorl(WhorlConfig::default().colors("#FF0000_#00FF00")).unwrap();
        assert_eq!(two.layer_count(), 2);
        let one = whorl(WhorlConfig::default().colors("navy")).unwrap();
        assert_eq!(one.layer_count(), 1);
    }

    #[test]
    fn bad_color_token_fails_construction() {
        let err = whorl(WhorlConfig::default().colors("#F44336_oops")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { index: 1, .. }));
    }

    #[test]
    fn sweep_angle_bounds_are_exclusive() {
        for bad in [0.0, 360.0, -5.0, 400.0] {
            let err = whorl(WhorlConfig::default().sweep_angle(bad)).unwrap_err();
            assert_eq!(err, ConfigError::SweepAngleOutOfBound(bad));
        }
        assert!(whorl(WhorlConfig::default().sweep_angle(90.0)).is_ok());
        assert!(whorl(WhorlConfig::default().sweep_angle(359.9)).is_ok());
    }

    #[test]
    fn stroke_width_must_be_positive() {
        for bad in [0.0, -2.0] {
            let err = whorl(WhorlConfig::default().stroke_width(bad)).unwrap_err();
            assert_eq!(err, ConfigError::NonPositiveStrokeWidth(bad));
        }
    }

    // ── angle ─────────────────────────────────────────────────────────────

    #[test]
    fn angle_scales_with_layer_index_and_time() {
        let w = whorl(WhorlConfig::default()).unwrap();
        // (270 + 72·1) · 1000 ms · 0.001 = 342°
        assert!((w.angle(1, 1000.0) - 342.0).abs() < 1e-3);
        assert!((w.angle(0, 1000.0) - 270.0).abs() < 1e-3);
        assert_eq!(w.angle(2, 0.0), 0.0);
    }

    // ── measurement ───────────────────────────────────────────────────────

    #[test]
    fn exact_request_wins() {
        let w = whorl(WhorlConfig::default()).unwrap();
        let size = w.measure(Constraints::tight(Vec2::splat(300.0)));
        assert_eq!(size, Vec2::splat(300.0));
    }

    #[test]
    fn unconstrained_request_gets_natural_span() {
        let w = whorl(WhorlConfig::default()).unwrap();
        // 3 layers, stroke 5: natural = 5·8·3 + 5 = 125.
        assert_eq!(w.measure(Constraints::unbounded()), Vec2::splat(125.0));
    }

    #[test]
    fn bounded_request_caps_natural_span() {
        let w = whorl(WhorlConfig::default()).unwrap();
        assert_eq!(w.measure(Constraints::loose(Vec2::splat(100.0))), Vec2::splat(100.0));
    }

    #[test]
    fn never_shrinks_below_minimum() {
        let w = whorl(WhorlConfig::default()).unwrap();
        // min = 5·4·3 + 5 = 65 beats both a small cap and a small exact request.
        assert_eq!(w.measure(Constraints::loose(Vec2::splat(50.0))), Vec2::splat(65.0));
        assert_eq!(w.measure(Constraints::tight(Vec2::splat(10.0))), Vec2::splat(65.0));
    }

    // ── ring layout ───────────────────────────────────────────────────────

    #[test]
    fn ring_gap_is_capped_at_four_strokes() {
        // 300 / 6 − 5 = 45, capped at 20.
        assert_eq!(ring_gap(300.0, 3, 5.0), 20.0);
    }

    #[test]
    fn ring_gap_floors_the_quotient() {
        // 125 / 6 = 20.83… → 20, minus the stroke.
        assert_eq!(ring_gap(125.0, 3, 5.0), 15.0);
    }

    #[test]
    fn ring_zero_hugs_the_outer_boundary() {
        let rect = Rect::new(0.0, 0.0, 125.0, 125.0);
        assert_eq!(ring_bounds(rect, 0, 5.0, 15.0), Rect::new(2.5, 2.5, 120.0, 120.0));
    }

    #[test]
    fn rings_nest_inward_by_stroke_plus_gap() {
        let rect = Rect::new(0.0, 0.0, 125.0, 125.0);
        assert_eq!(ring_bounds(rect, 1, 5.0, 15.0), Rect::new(22.5, 22.5, 80.0, 80.0));
        assert_eq!(ring_bounds(rect, 2, 5.0, 15.0), Rect::new(42.5, 42.5, 40.0, 40.0));
    }

    #[test]
    fn ring_bounds_respect_the_widget_origin() {
        let rect = Rect::new(10.0, 20.0, 125.0, 125.0);
        let b = ring_bounds(rect, 0, 5.0, 15.0);
        assert_eq!(b.origin, Vec2::new(12.5, 22.5));
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_records_one_arc_per_layer() {
        let w = whorl(WhorlConfig::default()).unwrap();
        let mut dl = DrawList::new();
        w.paint(&mut Painter::new(&mut dl), Rect::new(0.0, 0.0, 300.0, 300.0));

        assert_eq!(dl.len(), 3);
        let expected = WhorlConfig::default().layer_colors().unwrap();
        for (item, expected_color) in dl.items().iter().zip(expected) {
            let DrawCmd::Arc(arc) = item else { panic!("expected an arc") };
            // Rest state: the clock reads 0, every arc starts at angle 0.
            assert_eq!(arc.start_angle, 0.0);
            assert_eq!(arc.sweep_angle, 90.0);
            assert_eq!(arc.stroke.width, 5.0);
            assert!(arc.stroke.anti_alias);
            assert_eq!(arc.stroke.color, expected_color);
        }
    }

    #[test]
    fn painted_rings_shrink_with_layer_index() {
        let w = whorl(WhorlConfig::default()).unwrap();
        let mut dl = DrawList::new();
        w.paint(&mut Painter::new(&mut dl), Rect::new(0.0, 0.0, 300.0, 300.0));

        let sides: Vec<f32> = dl
            .items()
            .iter()
            .map(|item| match item {
                DrawCmd::Arc(arc) => arc.bounds.size.x,
                other => panic!("expected an arc, got {other:?}"),
            })
            .collect();
        assert!(sides[0] > sides[1] && sides[1] > sides[2]);
    }

    // ── start/stop ────────────────────────────────────────────────────────

    #[test]
    fn stop_while_stopped_still_requests_a_rest_repaint() {
        let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let w = Whorl::new(
            WhorlConfig::default(),
            Arc::new(move || {
                sink.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }),
        )
        .unwrap();

        w.stop();
        assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(!w.is_running());
    }

    #[test]
    fn start_stop_round_trip_rests_at_zero() {
        let w = whorl(WhorlConfig::default()).unwrap();
        let control = w.handle();

        control.start();
        assert!(w.is_running());
        // Second start must not spawn a second loop.
        control.start();
        assert!(w.is_running());

        control.stop();
        assert!(!w.is_running());

        // Give any in-flight tick time to finish and settle the clock.
        std::thread::sleep(std::time::Duration::from_millis(60));

        let mut dl = DrawList::new();
        w.paint(&mut Painter::new(&mut dl), Rect::new(0.0, 0.0, 125.0, 125.0));
        let DrawCmd::Arc(arc) = &dl.items()[0] else { panic!("expected an arc") };
        assert_eq!(arc.start_angle, 0.0);
    }
}
