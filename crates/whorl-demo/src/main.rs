use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use whorl_engine::logging;
use whorl_engine::scene::DrawCmd;
use whorl_ui::prelude::*;

/// How long each press of the simulated start/stop button lasts.
const PRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Lays three spinner cells side by side — the demo's root widget.
struct SpinnerRow {
    cells: Vec<Element>,
}

impl Widget for SpinnerRow {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let cell = Constraints::loose(Vec2::new(
            constraints.max.x / self.cells.len().max(1) as f32,
            constraints.max.y,
        ));

        let mut width = 0.0;
        let mut height: f32 = 0.0;
        for child in &self.cells {
            let size = child.measure(cell);
            width += size.x;
            height = height.max(size.y);
        }
        constraints.constrain(Vec2::new(width, height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, Color::from_srgb_u8(0x21, 0x21, 0x21, 0xFF));

        let cell_width = rect.size.x / self.cells.len().max(1) as f32;
        for (i, child) in self.cells.iter().enumerate() {
            let cell = Rect::new(rect.origin.x + i as f32 * cell_width, rect.origin.y, cell_width, rect.size.y);
            let size = child.measure(Constraints::loose(cell.size));
            // Center the spinner in its cell.
            let origin = Vec2::new(
                cell.origin.x + (cell.size.x - size.x) / 2.0,
                cell.origin.y + (cell.size.y - size.y) / 2.0,
            );
            child.paint(painter, Rect::from_origin_size(origin, size));
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init_logging(None);

    // Redraw requests from the animation loops land on a shared dirty flag,
    // which the frame loop below polls — the headless stand-in for a window
    // system's invalidate call.
    let dirty = Arc::new(AtomicBool::new(true));
    let redraw: RedrawRequest = {
        let dirty = Arc::clone(&dirty);
        Arc::new(move || dirty.store(true, Ordering::Release))
    };

    // Three differently configured instances, as on the sample screen.
    let spinners = [
        Whorl::new(WhorlConfig::default(), Arc::clone(&redraw))?,
        Whorl::new(
            WhorlConfig::default()
                .colors("#03A9F4_#FFEB3B_#9C27B0_#CDDC39")
                .parallax(Parallax::Fast)
                .sweep_angle(120.0),
            Arc::clone(&redraw),
        )?,
        Whorl::new(
            WhorlConfig::default()
                .colors("teal_silver")
                .parallax(Parallax::Slow)
                .circle_speed(180)
                .stroke_width(8.0),
            Arc::clone(&redraw),
        )?,
    ];
    let controls: Vec<WhorlHandle> = spinners.iter().map(Whorl::handle).collect();

    let root: Element = SpinnerRow {
        cells: spinners.into_iter().map(Element::from).collect(),
    }
    .into();

    let mut scene = UiScene::new();
    let viewport = Vec2::new(540.0, 200.0);

    // Simulate the screen's single button: one press starts all three
    // spinners, the next stops them.
    let mut running = false;
    for _press in 0..2 {
        running = !running;
        for control in &controls {
            if running {
                control.start();
            } else {
                control.stop();
            }
        }
        log::info!("button pressed: spinners {}", if running { "started" } else { "stopped" });
        pump_frames(&mut scene, &root, viewport, &dirty, PRESS_INTERVAL);
    }

    // One more frame after the final stop: everything rests at angle 0.
    let rest = scene.frame(&root, viewport);
    for cmd in rest.iter() {
        if let DrawCmd::Arc(arc) = cmd {
            log::info!(
                "rest arc: start {:.1}° sweep {:.1}° at {:?}",
                arc.start_angle,
                arc.sweep_angle,
                arc.bounds.origin,
            );
        }
    }

    Ok(())
}

/// Polls the dirty flag and renders a frame whenever a redraw was requested.
fn pump_frames(
    scene: &mut UiScene,
    root: &Element,
    viewport: Vec2,
    dirty: &AtomicBool,
    budget: Duration,
) {
    let deadline = Instant::now() + budget;
    let mut frames = 0u32;

    while Instant::now() < deadline {
        if dirty.swap(false, Ordering::AcqRel) {
            let draw_list = scene.frame(root, viewport);
            frames += 1;
            let lead = draw_list.iter().find_map(|cmd| match cmd {
                DrawCmd::Arc(arc) => Some(arc.start_angle),
                _ => None,
            });
            if let Some(angle) = lead {
                log::debug!("frame {frames}: {} commands, lead angle {angle:.1}°", draw_list.len());
            }
        }
        thread::sleep(Duration::from_millis(4));
    }

    log::info!("rendered {frames} frames in {budget:?}");
}
