use whorl_engine::coords::Vec2;

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. The three classic
/// measurement modes map onto this per axis:
/// - exact: `min == max` (see [`tight`](Self::tight))
/// - at-most: `min == 0`, finite `max` (see [`loose`](Self::loose))
/// - unconstrained: infinite `max` (see [`unbounded`](Self::unbounded))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Explicit range: child can be any size in `[min, max]`.
    #[inline]
    pub fn between(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// True if the horizontal axis demands one exact size.
    #[inline]
    pub fn is_exact_width(self) -> bool {
        self.min.x == self.max.x && self.max.x.is_finite()
    }
}
