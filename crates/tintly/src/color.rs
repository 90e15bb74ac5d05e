//! Color conversion between hex notation and HSL components.
//!
//! The CSS exporter writes colors as bare `H S% L%` triples (the shape
//! shadcn/ui expects inside `hsl(var(--name))`). Conversion is lenient:
//! anything that is not a 6-digit hex color becomes [`NEUTRAL_HSL`] instead
//! of an error, so one bad token never aborts a whole export.

use std::fmt;

/// Value emitted for a missing or malformed color.
pub const NEUTRAL_HSL: &str = "0 0% 0%";

/// An HSL color quantized to whole degrees and percentages.
///
/// `h` is always in `0..360`, `s` and `l` in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Converts an RGB triplet to HSL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tintly::Hsl;
    ///
    /// let red = Hsl::from_rgb((255, 0, 0));
    /// assert_eq!(red, Hsl { h: 0, s: 100, l: 50 });
    /// ```
    pub fn from_rgb((r, g, b): (u8, u8, u8)) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let sector = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (sector / 6.0, s)
        };

        Self {
            // A hue just below 360 rounds up to 360, which is 0.
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Parses a 6-digit hex color (with or without a leading `#`).
    ///
    /// Returns `None` for short forms, alpha forms, and anything that is not
    /// hexadecimal.
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex(hex).map(Self::from_rgb)
    }

    /// Converts back to RGB, rounding each channel to the nearest byte.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        if self.s == 0 {
            let v = to_byte(l);
            return (v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_byte(hue_to_channel(p, q, h)),
            to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Parses a 6-digit hex color into an RGB triplet.
///
/// A single leading `#` is optional.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Returns `true` if the value is a `#`-prefixed 6-digit hex color.
pub fn is_hex_color(value: &str) -> bool {
    value.starts_with('#') && parse_hex(value).is_some()
}

/// Formats a hex color as an `H S% L%` triple.
///
/// Missing or malformed input yields [`NEUTRAL_HSL`].
///
/// # Example
///
/// ```rust
/// use tintly::hex_to_hsl;
///
/// assert_eq!(hex_to_hsl(Some("#ff0000")), "0 100% 50%");
/// assert_eq!(hex_to_hsl(Some("#fff")), "0 0% 0%");
/// assert_eq!(hex_to_hsl(None), "0 0% 0%");
/// ```
pub fn hex_to_hsl(hex: Option<&str>) -> String {
    match hex.and_then(Hsl::from_hex) {
        Some(hsl) => hsl.to_string(),
        None => {
            tracing::trace!(input = ?hex, "color is not 6-digit hex, using neutral value");
            NEUTRAL_HSL.to_string()
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_hsl_reference_values() {
        assert_eq!(hex_to_hsl(Some("#000000")), "0 0% 0%");
        assert_eq!(hex_to_hsl(Some("#ffffff")), "0 0% 100%");
        assert_eq!(hex_to_hsl(Some("#ff0000")), "0 100% 50%");
    }

    #[test]
    fn test_hex_to_hsl_chromatic() {
        // Tailwind sky-500 and slate-500
        assert_eq!(hex_to_hsl(Some("#0ea5e9")), "199 89% 48%");
        assert_eq!(hex_to_hsl(Some("#64748b")), "215 16% 47%");
        assert_eq!(hex_to_hsl(Some("#00ff00")), "120 100% 50%");
        assert_eq!(hex_to_hsl(Some("#0000ff")), "240 100% 50%");
    }

    #[test]
    fn test_hex_to_hsl_without_hash() {
        assert_eq!(hex_to_hsl(Some("ff0000")), "0 100% 50%");
    }

    #[test]
    fn test_hex_to_hsl_uppercase() {
        assert_eq!(hex_to_hsl(Some("#FF0000")), "0 100% 50%");
    }

    #[test]
    fn test_hex_to_hsl_missing_and_empty() {
        assert_eq!(hex_to_hsl(None), NEUTRAL_HSL);
        assert_eq!(hex_to_hsl(Some("")), NEUTRAL_HSL);
    }

    #[test]
    fn test_hex_to_hsl_malformed() {
        assert_eq!(hex_to_hsl(Some("#fff")), NEUTRAL_HSL);
        assert_eq!(hex_to_hsl(Some("#ff000080")), NEUTRAL_HSL);
        assert_eq!(hex_to_hsl(Some("#gg0000")), NEUTRAL_HSL);
        assert_eq!(hex_to_hsl(Some("red")), NEUTRAL_HSL);
        assert_eq!(hex_to_hsl(Some("##ff0000")), NEUTRAL_HSL);
    }

    #[test]
    fn test_hue_near_360_wraps_to_zero() {
        assert_eq!(Hsl::from_hex("#ff0001"), Some(Hsl { h: 0, s: 100, l: 50 }));
    }

    #[test]
    fn test_to_rgb_primaries() {
        assert_eq!(Hsl { h: 0, s: 100, l: 50 }.to_rgb(), (255, 0, 0));
        assert_eq!(Hsl { h: 120, s: 100, l: 50 }.to_rgb(), (0, 255, 0));
        assert_eq!(Hsl { h: 240, s: 100, l: 50 }.to_rgb(), (0, 0, 255));
        assert_eq!(Hsl { h: 0, s: 0, l: 100 }.to_rgb(), (255, 255, 255));
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#0ea5e9"));
        assert!(!is_hex_color("0ea5e9"));
        assert!(!is_hex_color("#0ea"));
        assert!(!is_hex_color("hsl(0 0% 0%)"));
    }
}
