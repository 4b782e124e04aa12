use std::str::FromStr;

use thiserror::Error;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Correct blending with linear filtering (avoids fringes).
/// - Matches typical GPU blending configurations for UI compositing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    ///
    /// This is the preferred constructor for colors coming from hex literals
    /// and the layer-color attribute strings.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }
}

/// A color token that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color literal must be #RRGGBB or #AARRGGBB, got {0} hex digits")]
    InvalidHexLength(usize),
    #[error("invalid hex digit in color literal {0:?}")]
    InvalidHexDigit(String),
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `#RRGGBB`, `#AARRGGBB` (alpha first), or a named color.
    ///
    /// The accepted names are the classic platform set (`red`, `teal`,
    /// `lightgray`, …), matched case-insensitively. Six-digit literals are
    /// fully opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 && hex.len() != 8 {
                return Err(ParseColorError::InvalidHexLength(hex.len()));
            }
            let v = u32::from_str_radix(hex, 16)
                .map_err(|_| ParseColorError::InvalidHexDigit(s.to_string()))?;
            return if hex.len() == 6 { Ok(rgb(v)) } else { Ok(argb(v)) };
        }
        named(&s.to_ascii_lowercase()).ok_or_else(|| ParseColorError::UnknownName(s.to_string()))
    }
}

#[inline]
fn rgb(v: u32) -> Color {
    argb(0xFF00_0000 | v)
}

#[inline]
fn argb(v: u32) -> Color {
    Color::from_srgb_u8(
        (v >> 16) as u8,
        (v >> 8) as u8,
        v as u8,
        (v >> 24) as u8,
    )
}

fn named(name: &str) -> Option<Color> {
    let v = match name {
        "black" => 0x000000,
        "white" => 0xFFFFFF,
        "red" => 0xFF0000,
        "green" | "lime" => 0x00FF00,
        "blue" => 0x0000FF,
        "yellow" => 0xFFFF00,
        "cyan" | "aqua" => 0x00FFFF,
        "magenta" | "fuchsia" => 0xFF00FF,
        "gray" | "grey" => 0x888888,
        "lightgray" | "lightgrey" => 0xCCCCCC,
        "darkgray" | "darkgrey" => 0x444444,
        "maroon" => 0x800000,
        "navy" => 0x000080,
        "olive" => 0x808000,
        "purple" => 0x800080,
        "silver" => 0xC0C0C0,
        "teal" => 0x008080,
        _ => return None,
    };
    Some(rgb(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex literals ──────────────────────────────────────────────────────

    #[test]
    fn parse_rrggbb_is_opaque() {
        let c: Color = "#F44336".parse().unwrap();
        assert_eq!(c, Color::from_srgb_u8(0xF4, 0x43, 0x36, 0xFF));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parse_aarrggbb_alpha_first() {
        let c: Color = "#80FF0000".parse().unwrap();
        assert_eq!(c, Color::from_srgb_u8(0xFF, 0x00, 0x00, 0x80));
    }

    #[test]
    fn parse_rejects_odd_digit_count() {
        assert_eq!(
            "#F4433".parse::<Color>(),
            Err(ParseColorError::InvalidHexLength(5)),
        );
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(matches!(
            "#ZZZZZZ".parse::<Color>(),
            Err(ParseColorError::InvalidHexDigit(_)),
        ));
    }

    // ── named colors ──────────────────────────────────────────────────────

    #[test]
    fn parse_named_case_insensitive() {
        let c: Color = "RED".parse().unwrap();
        assert_eq!(c, Color::from_srgb_u8(0xFF, 0x00, 0x00, 0xFF));
    }

    #[test]
    fn parse_named_aliases_agree() {
        assert_eq!("cyan".parse::<Color>(), "aqua".parse::<Color>());
        assert_eq!("grey".parse::<Color>(), "gray".parse::<Color>());
    }

    #[test]
    fn parse_unknown_name_fails() {
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ParseColorError::UnknownName("chartreuse".to_string())),
        );
    }

    #[test]
    fn parse_empty_token_fails() {
        assert!("".parse::<Color>().is_err());
    }

    // ── premultiplication ─────────────────────────────────────────────────

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.r, 0.5);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.b, 0.0);
    }
}
