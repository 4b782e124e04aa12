use crate::paint::Color;

/// Outline style for stroked (non-filled) geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub anti_alias: bool,
}

impl Stroke {
    /// Anti-aliased stroke of `width` logical pixels.
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, anti_alias: true }
    }

    #[inline]
    pub fn anti_alias(mut self, v: bool) -> Self {
        self.anti_alias = v;
        self
    }
}
