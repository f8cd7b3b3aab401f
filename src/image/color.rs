//! Implements utilities to create color values.

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: None,
        }
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: Some(a),
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: Some(a), ..self }
    }

    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a.unwrap_or(1.0))
    }

    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }

    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    fn hex_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
                .unwrap()
        })
    }

    fn func_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(
                r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
            )
            .unwrap()
        })
    }

    fn from_hex(s: &str) -> Option<Self> {
        let captures = Self::hex_regex().captures(s)?;
        let channel = |i: usize| {
            captures
                .get(i)
                .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
        };
        Some(Color {
            r: channel(1)? as f64 / 255.0,
            g: channel(2)? as f64 / 255.0,
            b: channel(3)? as f64 / 255.0,
            a: channel(4).map(|x| x as f64 / 255.0),
        })
    }

    fn from_func(s: &str) -> Option<Self> {
        let captures = Self::func_regex().captures(s)?;
        let channel = |i: usize| {
            captures
                .get(i)
                .and_then(|m| m.as_str().parse::<u16>().ok())
                .map(|v| v.min(255) as f64 / 255.0)
        };
        let a = match captures.get(4) {
            Some(m) => Some(m.as_str().parse::<f64>().ok()?.clamp(0.0, 1.0)),
            None => None,
        };
        Some(Color {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
            a,
        })
    }
}

impl FromStr for Color {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_hex(s)
            .or_else(|| Self::from_func(s))
            .ok_or("string not in form #RRGGBB, #RRGGBBAA, rgb(r, g, b) or rgba(r, g, b, a)")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        let r = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
        if let Some(a) = a {
            let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        }
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string in the form #RRGGBB, #RRGGBBAA or rgba(r, g, b, a)")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<Color>().map_err(|e| E::custom(e))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ColorVisitor)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_alpha() {
        let c: Color = "#FFD700".parse().unwrap();
        assert_eq!(c, Color::rgb8(0xFF, 0xD7, 0x00));
        assert!(!c.has_alpha());

        let c: Color = "#00000080".parse().unwrap();
        assert!((c.alpha() - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parses_css_functions() {
        let c: Color = "rgba(61, 61, 41, 0.9)".parse().unwrap();
        assert_eq!(c, Color::rgba8(61, 61, 41, 0.9));

        let c: Color = "rgb(255,255,255)".parse().unwrap();
        assert_eq!(c, Color::WHITE);

        let c: Color = "rgba(0,0,0,0.03)".parse().unwrap();
        assert!((c.alpha() - 0.03).abs() < 1e-9);
    }

    #[test]
    fn rejects_garbage() {
        assert!("#FFF".parse::<Color>().is_err());
        assert!("gold".parse::<Color>().is_err());
        assert!("rgba(1, 2)".parse::<Color>().is_err());
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::rgb8(0x2E, 0x7D, 0x32).to_string(), "#2E7D32");
        assert_eq!(Color::rgba8(255, 255, 255, 1.0).to_string(), "#FFFFFFFF");
    }

    #[test]
    fn builds_in_const_context() {
        const GOLD: Color = Color::rgb8(0xFF, 0xD7, 0x00);
        const SHADE: Color = Color::rgba8(0, 0, 0, 0.4);
        assert_eq!(GOLD, "#FFD700".parse::<Color>().unwrap());
        assert_eq!(SHADE.a, Some(0.4));
        assert_eq!(Color::WHITE.r, 1.0);
    }
}
