use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed-step animation clock in milliseconds.
///
/// Single-writer: only the owning ticker loop advances or resets it. Readers
/// (the render path) observe a consistent published snapshot through
/// [`elapsed_millis`](Self::elapsed_millis); there is no torn state to see.
///
/// The clock counts ticks, not wall time: each tick advances it by exactly
/// the tick period, so `N` ticks always read `N × period` regardless of how
/// long the loop actually slept.
#[derive(Debug, Default)]
pub struct AnimationClock {
    elapsed_ms: AtomicU64,
}

impl AnimationClock {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the last start or reset.
    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_ms.load(Ordering::Acquire)
    }

    /// Advances the clock by one fixed period.
    #[inline]
    pub(crate) fn advance(&self, period_ms: u64) {
        self.elapsed_ms.fetch_add(period_ms, Ordering::AcqRel);
    }

    /// Rewinds the clock to zero.
    #[inline]
    pub(crate) fn reset(&self) {
        self.elapsed_ms.store(0, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_fixed_steps() {
        let clock = AnimationClock::new();
        clock.advance(16);
        clock.advance(16);
        assert_eq!(clock.elapsed_millis(), 32);
    }

    #[test]
    fn reset_rewinds_to_zero() {
        let clock = AnimationClock::new();
        clock.advance(16);
        clock.reset();
        assert_eq!(clock.elapsed_millis(), 0);
    }
}
