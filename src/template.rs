//! Template definitions and the built-in catalog.

use crate::image::Color;
use crate::layer::Layer;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "UNC Style")]
    UncStyle,
    #[serde(rename = "Textured")]
    Textured,
    #[serde(rename = "Classic & Vintage")]
    ClassicVintage,
    #[serde(rename = "Modern & Premium")]
    ModernPremium,
    #[serde(rename = "Artistic")]
    Artistic,
    #[serde(rename = "Neon & Bright")]
    NeonBright,
    #[serde(rename = "Nature & Elemental")]
    NatureElemental,
    #[serde(rename = "Specialty")]
    Specialty,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::UncStyle,
        Self::Textured,
        Self::ClassicVintage,
        Self::ModernPremium,
        Self::Artistic,
        Self::NeonBright,
        Self::NatureElemental,
        Self::Specialty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UncStyle => "UNC Style",
            Self::Textured => "Textured",
            Self::ClassicVintage => "Classic & Vintage",
            Self::ModernPremium => "Modern & Premium",
            Self::Artistic => "Artistic",
            Self::NeonBright => "Neon & Bright",
            Self::NatureElemental => "Nature & Elemental",
            Self::Specialty => "Specialty",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category `{s}`"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One visual style for a card.
///
/// A template with `layers` is painted by the layer interpreter; otherwise the
/// fixed routine registered under its `id` draws the front.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub background_color: Color,
    pub border_color: Option<Color>,
    pub text_color: Color,
    pub secondary_text_color: Color,
    pub accent_color: Color,
    pub secondary_accent: Option<Color>,
    pub tertiary_accent: Option<Color>,
    pub font_family: String,
    #[serde(default)]
    pub vintage: bool,
    #[serde(default)]
    pub animated: bool,
    pub texture: Option<String>,
    pub layers: Option<Vec<Layer>>,
}

impl Template {
    pub fn border(&self) -> Color {
        self.border_color.unwrap_or(self.accent_color)
    }

    pub fn secondary_accent(&self) -> Color {
        self.secondary_accent.unwrap_or(self.accent_color)
    }

    pub fn tertiary_accent(&self) -> Color {
        self.tertiary_accent.unwrap_or(self.accent_color)
    }

    pub fn is_layered(&self) -> bool {
        self.layers.is_some()
    }
}

#[derive(Deserialize)]
struct Catalog {
    template: Vec<Template>,
}

/// All built-in templates in catalog order. The first one is the default.
pub fn catalog() -> &'static [Template] {
    static CATALOG: OnceLock<Vec<Template>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let catalog: Catalog = toml::from_str(include_str!("template/catalog.toml"))
            .expect("built-in template catalog is valid");
        catalog.template
    })
}

pub fn default_template() -> &'static Template {
    &catalog()[0]
}

/// Looks a template up by id, falling back to the default one.
pub fn get_template_by_id(id: &str) -> &'static Template {
    catalog()
        .iter()
        .find(|t| t.id == id)
        .unwrap_or_else(default_template)
}

pub fn find_template(id: &str) -> Option<&'static Template> {
    catalog().iter().find(|t| t.id == id)
}

pub fn get_templates_by_category(category: Category) -> Vec<&'static Template> {
    catalog().iter().filter(|t| t.category == category).collect()
}

pub fn get_all_categories() -> &'static [Category] {
    &Category::ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::TextureRef;
    use crate::texture::TextureKind;

    use std::collections::HashSet;

    #[test]
    fn catalog_parses_with_unique_ids() {
        let templates = catalog();
        assert_eq!(templates.len(), 40);
        let ids: HashSet<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());
        assert_eq!(default_template().id, "donruss1985");
    }

    #[test]
    fn lookup_falls_back_to_default() {
        assert_eq!(get_template_by_id("neon").id, "neon");
        assert_eq!(get_template_by_id("nonexistent").id, "donruss1985");
        assert_eq!(get_template_by_id("").id, "donruss1985");
        assert!(find_template("nonexistent").is_none());
    }

    #[test]
    fn categories_partition_the_catalog() {
        let total: usize = get_all_categories()
            .iter()
            .map(|c| get_templates_by_category(*c).len())
            .sum();
        assert_eq!(total, catalog().len());

        let unc: Vec<_> = get_templates_by_category(Category::UncStyle)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(unc, ["donruss1985", "topps1990"]);
        assert_eq!(get_all_categories()[0], Category::UncStyle);
        assert_eq!(get_all_categories()[7], Category::Specialty);
    }

    #[test]
    fn textures_name_known_generators() {
        for template in catalog() {
            if let Some(name) = &template.texture {
                assert!(name.parse::<TextureKind>().is_ok(), "{}: {name}", template.id);
            }
            for layer in template.layers.iter().flatten() {
                if let Layer::Texture(t) = layer {
                    match t.source() {
                        Some(TextureRef::Generated(name)) => assert!(
                            name.parse::<TextureKind>().is_ok(),
                            "{}: {name}",
                            template.id
                        ),
                        Some(TextureRef::File(_)) => (),
                        None => panic!("{}: texture layer without a source", template.id),
                    }
                    assert!(t.texture.is_some() != t.texture_file.is_some());
                }
            }
        }
    }

    #[test]
    fn classic_colors() {
        let classic = get_template_by_id("classic");
        assert_eq!(classic.category, Category::ClassicVintage);
        assert_eq!(classic.background_color, Color::rgb8(0x2E, 0x7D, 0x32));
        assert_eq!(classic.border(), Color::rgb8(0xFF, 0xD7, 0x00));
        assert_eq!(classic.font_family, "Arial, sans-serif");
        assert!(!classic.is_layered());
    }

    #[test]
    fn parses_category_labels() {
        assert_eq!("neon & bright".parse::<Category>().unwrap(), Category::NeonBright);
        assert!("Bright".parse::<Category>().is_err());
    }
}
