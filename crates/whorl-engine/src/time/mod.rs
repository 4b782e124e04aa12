//! Time subsystem.
//!
//! Provides stable, testable animation timing without coupling to a windowing
//! runtime. Intended usage:
//! - one [`Ticker`] per animated view instance
//! - the ticker owns an [`AnimationClock`]; the render path reads it through
//!   a published snapshot, never through shared mutable state

mod clock;
mod ticker;

pub use clock::AnimationClock;
pub use ticker::{TICK_PERIOD, Ticker};
