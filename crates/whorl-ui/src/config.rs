use thiserror::Error;
use whorl_engine::paint::{Color, ParseColorError};

/// Separator between color tokens in a layer-color string.
const COLOR_SPLIT: char = '_';

// ── Parallax ──────────────────────────────────────────────────────────────

/// Per-layer angular-velocity increment selector.
///
/// Each layer index adds this many degrees/second on top of the base speed,
/// which is what produces the depth illusion: outer rings chase inner ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Parallax {
    /// 60 °/s per layer.
    Fast,
    /// 72 °/s per layer.
    #[default]
    Medium,
    /// 90 °/s per layer.
    Slow,
    /// Explicit increment in degrees/second per layer.
    Custom(f32),
}

impl Parallax {
    /// Resolves the attribute-surface selector (FAST=1, MEDIUM=0, SLOW=2).
    pub fn from_index(index: i32) -> Result<Self, ConfigError> {
        match index {
            1 => Ok(Parallax::Fast),
            0 => Ok(Parallax::Medium),
            2 => Ok(Parallax::Slow),
            other => Err(ConfigError::UnknownParallax(other)),
        }
    }

    /// Angular-velocity increment in degrees/second per layer index.
    #[inline]
    pub fn degrees_per_layer(self) -> f32 {
        match self {
            Parallax::Fast => 60.0,
            Parallax::Medium => 72.0,
            Parallax::Slow => 90.0,
            Parallax::Custom(v) => v,
        }
    }
}

// ── WhorlConfig ───────────────────────────────────────────────────────────

/// Paint and animation parameters for a spinner instance.
///
/// Fixed for the lifetime of the widget; every field is validated when the
/// widget is constructed and invalid values fail construction outright.
///
/// # Example
/// ```rust,ignore
/// WhorlConfig::default()
///     .colors("#03A9F4_#FFEB3B")
///     .sweep_angle(120.0)
///     .parallax(Parallax::Fast)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WhorlConfig {
    /// Layer color tokens joined by `_`, in layer-index order.
    pub colors: String,
    /// Base angular speed of layer 0, degrees/second.
    pub circle_speed: i32,
    pub parallax: Parallax,
    /// Arc length in degrees, open interval (0, 360).
    pub sweep_angle: f32,
    /// Arc stroke thickness in logical pixels, positive.
    pub stroke_width: f32,
}

impl Default for WhorlConfig {
    fn default() -> Self {
        Self {
            colors: "#F44336_#4CAF50_#5677fc".to_string(),
            circle_speed: 270,
            parallax: Parallax::Medium,
            sweep_angle: 90.0,
            stroke_width: 5.0,
        }
    }
}

impl WhorlConfig {
    pub fn colors(mut self, v: impl Into<String>) -> Self {
        self.colors = v.into();
        self
    }

    pub fn circle_speed(mut self, v: i32) -> Self {
        self.circle_speed = v;
        self
    }

    pub fn parallax(mut self, v: Parallax) -> Self {
        self.parallax = v;
        self
    }

    pub fn sweep_angle(mut self, v: f32) -> Self {
        self.sweep_angle = v;
        self
    }

    pub fn stroke_width(mut self, v: f32) -> Self {
        self.stroke_width = v;
        self
    }

    /// Parses the `_`-separated color string into per-layer colors.
    ///
    /// The layer count of the spinner equals the token count.
    pub fn layer_colors(&self) -> Result<Vec<Color>, ConfigError> {
        self.colors
            .split(COLOR_SPLIT)
            .enumerate()
            .map(|(index, token)| {
                token.parse().map_err(|source| ConfigError::InvalidColor {
                    index,
                    token: token.to_string(),
                    source,
                })
            })
            .collect()
    }
}

// ── ConfigError ───────────────────────────────────────────────────────────

/// A spinner configuration that cannot be drawn.
///
/// Raised synchronously during widget construction and never recovered;
/// these are developer errors in static visual configuration, meant to
/// surface at build/test time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("layer color {index} ({token:?}) cannot be parsed: {source}")]
    InvalidColor {
        index: usize,
        token: String,
        #[source]
        source: ParseColorError,
    },
    #[error("sweep angle out of bound: {0} (must be inside (0, 360) degrees)")]
    SweepAngleOutOfBound(f32),
    #[error("stroke width must be positive, got {0}")]
    NonPositiveStrokeWidth(f32),
    #[error("no such parallax type: {0} (expected FAST=1, MEDIUM=0 or SLOW=2)")]
    UnknownParallax(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parallax mapping ──────────────────────────────────────────────────

    #[test]
    fn parallax_index_mapping() {
        assert_eq!(Parallax::from_index(1), Ok(Parallax::Fast));
        assert_eq!(Parallax::from_index(0), Ok(Parallax::Medium));
        assert_eq!(Parallax::from_index(2), Ok(Parallax::Slow));
    }

    #[test]
    fn parallax_unknown_index_fails() {
        assert_eq!(Parallax::from_index(7), Err(ConfigError::UnknownParallax(7)));
    }

    #[test]
    fn parallax_increments() {
        assert_eq!(Parallax::Fast.degrees_per_layer(), 60.0);
        assert_eq!(Parallax::Medium.degrees_per_layer(), 72.0);
        assert_eq!(Parallax::Slow.degrees_per_layer(), 90.0);
        assert_eq!(Parallax::Custom(45.0).degrees_per_layer(), 45.0);
    }

    // ── color string parsing ──────────────────────────────────────────────

    #[test]
    fn default_colors_parse_to_three_layers() {
        let layers = WhorlConfig::default().layer_colors().unwrap();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0], "#F44336".parse().unwrap());
        assert_eq!(layers[1], "#4CAF50".parse().unwrap());
        assert_eq!(layers[2], "#5677fc".parse().unwrap());
    }

    #[test]
    fn named_tokens_are_accepted() {
        let layers = WhorlConfig::default()
            .colors("red_teal")
            .layer_colors()
            .unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn bad_token_reports_index_and_token() {
        let err = WhorlConfig::default()
            .colors("#F44336_nonsense")
            .layer_colors()
            .unwrap_err();
        match err {
            ConfigError::InvalidColor { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "nonsense");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_string_is_not_a_color() {
        assert!(WhorlConfig::default().colors("").layer_colors().is_err());
    }
}
