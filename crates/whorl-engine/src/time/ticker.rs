use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use super::AnimationClock;

/// Default tick period (≈60 Hz).
pub const TICK_PERIOD: Duration = Duration::from_millis(16);

/// Cancellable periodic animation driver.
///
/// [`start`](Self::start) spawns a dedicated loop thread that, once per
/// period, requests a redraw and advances the owned [`AnimationClock`] by
/// exactly one period, then sleeps. The redraw and the clock step form one
/// tick; cancellation is observed at the top of each iteration, so no further
/// tick executes after [`stop`](Self::stop) returns and stop latency is
/// bounded by a single period of sleep.
///
/// `start` is guarded: calling it while the loop is already running is a
/// no-op. An unguarded flag would happily let a second loop spawn and double
/// the animation speed.
///
/// Cloning a `Ticker` clones a handle to the same loop and clock, which is
/// how a host keeps control of a widget after moving it into a widget tree.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    running: AtomicBool,
    /// Incremented on every start. A loop thread only runs while the epoch it
    /// was spawned under is still current, so a stop/start pair during its
    /// sleep cannot resurrect the old loop alongside the new one.
    epoch: AtomicU64,
    clock: AnimationClock,
}

impl Shared {
    /// One animation tick: request a redraw, then advance the clock.
    fn tick(&self, period_ms: u64, redraw: &(dyn Fn() + Send + Sync)) {
        redraw();
        self.clock.advance(period_ms);
        // A tick in flight while `stop` ran must not leave a partial step
        // behind: the clock has to settle at zero once cancellation lands.
        if !self.running.load(Ordering::Acquire) {
            self.clock.reset();
        }
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                epoch: AtomicU64::new(0),
                clock: AnimationClock::new(),
            }),
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Milliseconds of animation time since the loop started.
    ///
    /// Reads 0 while stopped.
    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.shared.clock.elapsed_millis()
    }

    /// Starts the periodic loop on its own thread.
    ///
    /// The clock restarts from zero. `redraw` is invoked once per tick from
    /// the loop thread. Returns `false` (and does nothing) if the loop is
    /// already running.
    pub fn start(&self, redraw: impl Fn() + Send + Sync + 'static) -> bool {
        if self
            .shared
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("ticker already running, start ignored");
            return false;
        }

        self.shared.clock.reset();
        let epoch = self.shared.epoch.fetch_add(1, Ordering::AcqRel) + 1;

        let shared = Arc::clone(&self.shared);
        let period = self.period;
        let period_ms = period.as_millis() as u64;
        let spawned = thread::Builder::new()
            .name("whorl-ticker".to_string())
            .spawn(move || {
                while shared.running.load(Ordering::Acquire)
                    && shared.epoch.load(Ordering::Acquire) == epoch
                {
                    shared.tick(period_ms, &redraw);
                    thread::sleep(period);
                }
                log::trace!("ticker loop (epoch {epoch}) exited");
            });

        if let Err(e) = spawned {
            log::error!("failed to spawn ticker thread: {e}");
            self.shared.running.store(false, Ordering::Release);
            return false;
        }
        true
    }

    /// Cancels the loop and rewinds the clock to zero.
    ///
    /// The loop thread exits at the top of its next iteration; no tick runs
    /// after this call. Safe to call while stopped.
    pub fn stop(&self) {
        self.shared.running.store(false, Ordering::Release);
        self.shared.clock.reset();
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
