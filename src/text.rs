//! Font styles and pango layouts for card text.

use crate::error::Result;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Weight and slant of a font, parsed from strings such as `bold`,
/// `italic bold`, `italic-bold` or a numeric weight like `300`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FontStyle {
    pub weight: u16,
    pub italic: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl FontStyle {
    pub const NORMAL: FontStyle = FontStyle {
        weight: 400,
        italic: false,
    };
    pub const BOLD: FontStyle = FontStyle {
        weight: 700,
        italic: false,
    };
    pub const ITALIC: FontStyle = FontStyle {
        weight: 400,
        italic: true,
    };
    pub const LIGHT: FontStyle = FontStyle {
        weight: 300,
        italic: false,
    };

    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }

    fn pango_weight(&self) -> pango::Weight {
        match self.weight {
            0..=149 => pango::Weight::Thin,
            150..=249 => pango::Weight::Ultralight,
            250..=349 => pango::Weight::Light,
            350..=449 => pango::Weight::Normal,
            450..=549 => pango::Weight::Medium,
            550..=649 => pango::Weight::Semibold,
            650..=749 => pango::Weight::Bold,
            750..=849 => pango::Weight::Ultrabold,
            _ => pango::Weight::Heavy,
        }
    }
}

impl FromStr for FontStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut style = Self::NORMAL;
        for token in s.split(|c: char| c.is_whitespace() || c == '-').filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "normal" | "regular" => (),
                "bold" => style.weight = 700,
                "light" => style.weight = 300,
                "italic" | "oblique" => style.italic = true,
                num => match num.parse::<u16>() {
                    Ok(w) if (1..=1000).contains(&w) => style.weight = w,
                    _ => return Err("expected a combination of `normal`, `bold`, `light`, `italic` or a weight in 1..=1000"),
                },
            }
        }
        Ok(style)
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = match self.weight {
            400 => None,
            700 => Some("bold".to_string()),
            w => Some(w.to_string()),
        };
        match (self.italic, weight) {
            (false, None) => f.write_str("normal"),
            (true, None) => f.write_str("italic"),
            (false, Some(w)) => f.write_str(&w),
            (true, Some(w)) => write!(f, "italic {w}"),
        }
    }
}

struct FontStyleVisitor;

impl<'de> Visitor<'de> for FontStyleVisitor {
    type Value = FontStyle;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a font style such as `bold`, `italic-bold` or `300`")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<FontStyle>().map_err(|e| E::custom(e))
    }
}

impl<'de> Deserialize<'de> for FontStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<FontStyle, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FontStyleVisitor)
    }
}

macro_rules! into_pango {
    (
        $(#[$outer:meta])*
        $vis:vis enum $Enum:ident => $Pango:ident {
            $( $key:literal => $Variant:ident ),*
        }
    ) => {
        $(#[$outer])*
        $vis enum $Enum {
            $( $Variant ),*
        }

        impl FromStr for $Enum {
            type Err = &'static str;
            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $( $key => Ok(Self::$Variant), )*
                    _ => Err(
                        concat!("expected one of", $(" `", $key, "`"),*)
                    ),
                }
            }
        }

        impl From<$Enum> for pango::$Pango {
            fn from(value: $Enum) -> pango::$Pango {
                match value {
                    $( $Enum::$Variant => pango::$Pango::$Variant ),*
                }
            }
        }
    };
}

into_pango! {
    /// Horizontal alignment of text inside its box.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Align => Alignment {
        "left" => Left,
        "center" => Center,
        "right" => Right
    }
}

impl Default for Align {
    fn default() -> Self {
        Self::Left
    }
}

/// A font family list with size in card pixels and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub style: FontStyle,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::NORMAL,
        }
    }

    pub fn description(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.family);
        desc.set_absolute_size(self.size * pango::SCALE as f64);
        desc.set_weight(self.style.pango_weight());
        desc.set_style(if self.style.italic {
            pango::Style::Italic
        } else {
            pango::Style::Normal
        });
        desc
    }
}

/// Builds a layout for `content` in the user space of `cr`.
///
/// Without a width the text is laid out on one line and alignment has no effect.
pub fn layout(
    cr: &cairo::Context,
    content: &str,
    font: &Font,
    width: Option<f64>,
    align: Align,
    spacing: f64,
) -> Result<pango::Layout> {
    let layout = pangocairo::functions::create_layout(cr);
    let mut opt = cairo::FontOptions::new()?;
    opt.set_antialias(cairo::Antialias::Good);
    pangocairo::functions::context_set_font_options(&layout.context(), Some(&opt));
    layout.context_changed();

    layout.set_font_description(Some(&font.description()));
    if let Some(width) = width {
        layout.set_width((width * pango::SCALE as f64) as i32);
        layout.set_alignment(align.into());
    }
    if spacing != 0.0 {
        let attrs = pango::AttrList::new();
        attrs.insert(pango::AttrInt::new_letter_spacing(
            (spacing * pango::SCALE as f64) as i32,
        ));
        layout.set_attributes(Some(&attrs));
    }
    layout.set_text(content);
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_font_styles() {
        assert_eq!("".parse::<FontStyle>().unwrap(), FontStyle::NORMAL);
        assert_eq!("bold".parse::<FontStyle>().unwrap(), FontStyle::BOLD);
        assert_eq!("italic".parse::<FontStyle>().unwrap(), FontStyle::ITALIC);
        assert_eq!("300".parse::<FontStyle>().unwrap(), FontStyle::LIGHT);

        let style = "italic-bold".parse::<FontStyle>().unwrap();
        assert!(style.italic && style.is_bold());
        assert_eq!("italic bold".parse::<FontStyle>().unwrap(), style);
        assert_eq!(style.to_string(), "italic bold");

        assert!("heavy".parse::<FontStyle>().is_err());
        assert!("0".parse::<FontStyle>().is_err());
    }

    #[test]
    fn parses_alignment() {
        assert_eq!("center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!(Align::default(), Align::Left);
        assert!("middle".parse::<Align>().is_err());
        assert_eq!(pango::Alignment::from(Align::Right), pango::Alignment::Right);
    }

    #[test]
    fn font_description_carries_style() {
        let font = Font {
            style: FontStyle::ITALIC,
            ..Font::new("Arial, sans-serif", 16.0)
        };
        let desc = font.description();
        assert_eq!(desc.style(), pango::Style::Italic);
        assert_eq!(desc.weight(), pango::Weight::Normal);
        assert_eq!(desc.size(), 16 * pango::SCALE);
        assert!(desc.is_size_absolute());
    }
}
