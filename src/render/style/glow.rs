//! Dark styles with glowing outlines.

use crate::image::Color;
use crate::render::style::{headline, CardStyle};
use crate::render::RenderContext;
use crate::scene::{Rect, Scene, Shadow, Shape, Stroke};

/// Placement of the three outlined stat boxes.
struct Boxes {
    top: f64,
    height: f64,
    label_dy: f64,
    value_dy: f64,
    blur: f64,
    value_blur: f64,
}

impl Boxes {
    /// One box per headline stat, label over a glowing value.
    fn paint(&self, scene: &mut Scene, ctx: &RenderContext, colors: [Color; 3]) {
        for (i, ((label, value), color)) in headline(ctx).into_iter().zip(colors).enumerate() {
            let x = 50.0 + i as f64 * 110.0;
            scene.push(
                Shape::rect(x, self.top, 80.0, self.height)
                    .radius(8.0)
                    .stroke(Stroke::new(2.0, color))
                    .shadow(Shadow::new(color, self.blur)),
            );
            scene.push(
                ctx.text(label, x, self.top + self.label_dy, 12.0)
                    .centered(80.0)
                    .color(ctx.template.text_color),
            );
            scene.push(
                ctx.text(value, x, self.top + self.value_dy, 20.0)
                    .bold()
                    .centered(80.0)
                    .color(color)
                    .shadow(Shadow::new(color, self.value_blur)),
            );
        }
    }
}

const NEON_BOXES: Boxes = Boxes {
    top: 450.0,
    height: 70.0,
    label_dy: 10.0,
    value_dy: 35.0,
    blur: 10.0,
    value_blur: 5.0,
};

const HOLOGRAPHIC_BOXES: Boxes = Boxes {
    top: 430.0,
    height: 80.0,
    label_dy: 15.0,
    value_dy: 40.0,
    blur: 12.0,
    value_blur: 8.0,
};

pub(crate) struct Neon;

impl CardStyle for Neon {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        let (accent, secondary) = (t.accent_color, t.secondary_accent());
        ctx.background(scene, 20.0);
        scene.push(
            Shape::rect(10.0, 10.0, 380.0, 540.0)
                .radius(15.0)
                .stroke(Stroke::new(3.0, accent))
                .shadow(Shadow::new(accent, 20.0).opacity(0.8)),
        );
        scene.push(
            Shape::rect(20.0, 20.0, 360.0, 520.0)
                .radius(10.0)
                .stroke(Stroke::new(2.0, secondary))
                .shadow(Shadow::new(secondary, 15.0).opacity(0.6)),
        );

        ctx.photo(scene, Rect::new(40.0, 40.0, 320.0, 300.0));
        if let Some(logo) = ctx.logo(Rect::new(310.0, 30.0, 60.0, 60.0)) {
            scene.push(logo.shadow(Shadow::new(accent, 10.0)));
        }

        scene.push(
            ctx.text(ctx.name().to_uppercase(), 30.0, 360.0, 32.0)
                .bold()
                .centered(340.0)
                .color(accent)
                .shadow(Shadow::new(accent, 10.0)),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 30.0, 405.0, 18.0)
                .centered(340.0)
                .color(secondary)
                .shadow(Shadow::new(secondary, 8.0)),
        );
        NEON_BOXES.paint(scene, ctx, [accent, secondary, accent]);
    }
}

pub(crate) struct Holographic;

impl CardStyle for Holographic {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        let (accent, secondary, tertiary) =
            (t.accent_color, t.secondary_accent(), t.tertiary_accent());
        ctx.background(scene, 15.0);
        scene.push(
            Shape::rect(8.0, 8.0, 384.0, 544.0)
                .radius(12.0)
                .stroke(Stroke::new(4.0, accent))
                .shadow(Shadow::new(accent, 20.0).opacity(0.8)),
        );
        scene.push(
            Shape::rect(15.0, 15.0, 370.0, 530.0)
                .radius(10.0)
                .stroke(Stroke::new(2.0, secondary))
                .shadow(Shadow::new(secondary, 15.0).opacity(0.6)),
        );

        ctx.photo(scene, Rect::new(35.0, 35.0, 330.0, 290.0));
        if let Some(logo) = ctx.logo(Rect::new(315.0, 25.0, 60.0, 60.0)) {
            scene.push(logo.shadow(Shadow::new(tertiary, 15.0)));
        }

        scene.push(
            ctx.text(ctx.name().to_uppercase(), 25.0, 345.0, 32.0)
                .bold()
                .centered(350.0)
                .color(accent)
                .shadow(Shadow::new(secondary, 15.0)),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 25.0, 390.0, 18.0)
                .centered(350.0)
                .color(t.secondary_text_color)
                .shadow(Shadow::new(accent, 10.0)),
        );
        HOLOGRAPHIC_BOXES.paint(scene, ctx, [accent, secondary, tertiary]);
    }
}
