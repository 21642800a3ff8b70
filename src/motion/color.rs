use std::str::FromStr;

use thiserror::Error;

use super::interpolate::Lerp;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unsupported color syntax `{0}`")]
    Syntax(String),
    #[error("color channel `{0}` is out of range")]
    Channel(String),
}

/// An sRGB color with straight alpha. Channels are kept as `f64` so that
/// interpolated frames do not accumulate rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        }
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)`.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::Syntax(value.to_string()));
        }

        let lowered = trimmed.to_ascii_lowercase();
        let (body, expects_alpha) = if let Some(rest) = lowered.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lowered.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ColorError::Syntax(value.to_string()));
        };

        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorError::Syntax(value.to_string()))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        match (parts.as_slice(), expects_alpha) {
            ([r, g, b], false) => Ok(Self {
                r: channel(r)?,
                g: channel(g)?,
                b: channel(b)?,
                a: 1.0,
            }),
            ([r, g, b, a], true) => Ok(Self {
                r: channel(r)?,
                g: channel(g)?,
                b: channel(b)?,
                a: alpha(a)?,
            }),
            _ => Err(ColorError::Syntax(value.to_string())),
        }
    }

    pub fn to_css(self) -> String {
        let r = self.r.round().clamp(0.0, 255.0);
        let g = self.g.round().clamp(0.0, 255.0);
        let b = self.b.round().clamp(0.0, 255.0);
        let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        format!("rgba({r}, {g}, {b}, {a})")
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Lerp for Rgba {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            r: self.r.lerp(&other.r, t),
            g: self.g.lerp(&other.g, t),
            b: self.b.lerp(&other.b, t),
            a: self.a.lerp(&other.a, t),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expand = |s: &str| u8::from_str_radix(&s.repeat(2), 16).ok();
    let pair = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => Some(Rgba::rgb(
            expand(&hex[0..1])?,
            expand(&hex[1..2])?,
            expand(&hex[2..3])?,
        )),
        6 | 8 => {
            let mut color = Rgba::rgb(pair(&hex[0..2])?, pair(&hex[2..4])?, pair(&hex[4..6])?);
            if hex.len() == 8 {
                color.a = f64::from(pair(&hex[6..8])?) / 255.0;
            }
            Some(color)
        }
        _ => None,
    }
}

fn channel(raw: &str) -> Result<f64, ColorError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| (0.0..=255.0).contains(value))
        .ok_or_else(|| ColorError::Channel(raw.to_string()))
}

fn alpha(raw: &str) -> Result<f64, ColorError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| (0.0..=1.0).contains(value))
        .ok_or_else(|| ColorError::Channel(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgba::parse("#000000"), Ok(Rgba::rgb(0, 0, 0)));
        assert_eq!(Rgba::parse("#f8f7f3"), Ok(Rgba::rgb(0xf8, 0xf7, 0xf3)));
        assert_eq!(Rgba::parse("#fff"), Ok(Rgba::rgb(255, 255, 255)));

        let translucent = Rgba::parse("#00000080").expect("eight digit hex");
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parses_functional_forms() {
        let border = Rgba::parse("rgba(255, 255, 255, 0.08)").expect("rgba");
        assert_eq!(border.r, 255.0);
        assert_eq!(border.a, 0.08);

        assert_eq!(Rgba::parse("RGB(1,2,3)"), Ok(Rgba::rgb(1, 2, 3)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(Rgba::parse("#12"), Err(ColorError::Syntax(_))));
        assert!(matches!(Rgba::parse("hsl(0, 0%, 0%)"), Err(ColorError::Syntax(_))));
        assert!(matches!(Rgba::parse("rgb(300, 0, 0)"), Err(ColorError::Channel(_))));
        assert!(matches!(Rgba::parse("rgba(0, 0, 0)"), Err(ColorError::Syntax(_))));
    }

    #[test]
    fn lerps_channel_wise() {
        let black = Rgba::rgb(0, 0, 0);
        let white = Rgba::rgb(255, 255, 255);
        let mid = black.lerp(&white, 0.5);

        assert_eq!(mid.to_css(), "rgba(128, 128, 128, 1)");
    }
}
