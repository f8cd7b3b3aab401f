//! Fixed draw routines for templates without layers, looked up by template id.

mod glow;
mod gradient;
mod plain;

use crate::data::StatKey;
use crate::render::RenderContext;
use crate::scene::Scene;

pub trait CardStyle: Sync {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext);
}

static STYLES: [(&str, &dyn CardStyle); 12] = [
    ("classic", &plain::Classic),
    ("vintage", &plain::Vintage),
    ("minimalist", &plain::Minimalist),
    ("grunge", &plain::Grunge),
    ("polaroid", &plain::Polaroid),
    ("modern", &gradient::Modern),
    ("retro80s", &gradient::Retro80s),
    ("chrome", &gradient::Chrome),
    ("galaxy", &gradient::Galaxy),
    ("rainbow", &gradient::Rainbow),
    ("neon", &glow::Neon),
    ("holographic", &glow::Holographic),
];

/// The routine registered for `id`, or the classic one.
pub fn style_for(id: &str) -> &'static dyn CardStyle {
    STYLES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, style)| *style)
        .unwrap_or(&plain::Classic)
}

pub fn has_style(id: &str) -> bool {
    STYLES.iter().any(|(key, _)| *key == id)
}

/// Label and display value of the three headline stats: AVG, HR, RBI.
fn headline<'c>(ctx: &'c RenderContext) -> [(&'static str, &'c str); 3] {
    [(StatKey::Avg, ".000"), (StatKey::Hr, "0"), (StatKey::Rbi, "0")]
        .map(|(key, placeholder)| (key.label(), ctx.card.stat_or(key, placeholder)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_every_routine() {
        for id in [
            "classic",
            "modern",
            "vintage",
            "minimalist",
            "neon",
            "retro80s",
            "chrome",
            "holographic",
            "galaxy",
            "rainbow",
            "grunge",
            "polaroid",
        ] {
            assert!(has_style(id), "{id}");
        }
        assert!(!has_style("sunset"));
    }
}
