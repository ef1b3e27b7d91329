use std::fmt;
use std::str::FromStr;

/// Golden-ratio conjugate: consecutive hues land far apart on the color wheel.
const HUE_STEP: f32 = 0.618_034;

/// RGBA color with channels in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#rrggbb`, alpha is dropped.
    pub fn to_hex(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// WCAG 2.x relative luminance.
    pub fn relative_luminance(self) -> f32 {
        fn linear(c: f32) -> f32 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error for color strings that are not `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}', expected #rgb or #rrggbb")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }
        let digits: Vec<u8> = match hex.len() {
            3 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
                .collect::<Option<_>>()
                .ok_or_else(err)?,
            6 => (0..3)
                .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok())
                .collect::<Option<_>>()
                .ok_or_else(err)?,
            _ => return Err(err()),
        };
        Ok(Color::new(
            digits[0] as f32 / 255.0,
            digits[1] as f32 / 255.0,
            digits[2] as f32 / 255.0,
        ))
    }
}

/// WCAG contrast ratio between two colors, from 1.0 (identical) to 21.0.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Black or white, whichever reads better on top of `fill`.
pub fn text_color_for(fill: Color) -> Color {
    if contrast_ratio(fill, Color::BLACK) >= contrast_ratio(fill, Color::WHITE) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// `n` distinct fill colors, deterministic for a given `n`.
pub fn palette(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| hsv_to_rgb((0.58 + i as f32 * HUE_STEP).rem_euclid(1.0), 0.55, 0.90))
        .collect()
}

/// Stable color for a text label, so the same label keeps its color across runs.
pub fn label_color(label: &str) -> Color {
    hsv_to_rgb(hash01(label), 0.60, 0.88)
}

/// Hue, saturation and value in `0..=1` to an opaque [`Color`].
///
/// Hue wraps, so `1.25` and `0.25` give the same color.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let chroma = v * s;
    let sector = (h * 6.0).rem_euclid(6.0);
    let second = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let base = v - chroma;
    let (r, g, b) = match sector as u8 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    Color::new(r + base, g + base, b + base)
}

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a of `label`, top 24 bits scaled into `0..=1`.
fn hash01(label: &str) -> f32 {
    let hash = label
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME));
    (hash >> 8) as f32 / (u32::MAX >> 8) as f32
}
