use crate::data::FeaturedStats;
use crate::render::{white, RenderContext};
use crate::scene::{Scene, Shape};

const PANEL_X: f64 = 30.0;
const PANEL_Y: f64 = 440.0;
const PANEL_WIDTH: f64 = 340.0;
const PANEL_HEIGHT: f64 = 70.0;

/// Draws the featured stats panel on layered fronts, one column per stat.
pub(super) fn paint_featured(scene: &mut Scene, ctx: &RenderContext) {
    let featured = &ctx.featured[..ctx.featured.len().min(FeaturedStats::MAX)];
    if featured.is_empty() {
        return;
    }
    scene.push(
        Shape::rect(PANEL_X, PANEL_Y, PANEL_WIDTH, PANEL_HEIGHT)
            .radius(5.0)
            .fill(white(0.9)),
    );
    let column = PANEL_WIDTH / FeaturedStats::MAX as f64;
    let top = PANEL_Y + 7.0;
    for (i, key) in featured.iter().enumerate() {
        let x = PANEL_X + i as f64 * column;
        scene.push(
            ctx.text(key.label(), x, top, 11.0)
                .bold()
                .centered(column)
                .color(ctx.template.text_color),
        );
        scene.push(
            ctx.text(ctx.card.stat(*key).unwrap_or_default(), x, top + 18.0, 20.0)
                .bold()
                .centered(column)
                .color(ctx.template.accent_color),
        );
    }
}
