//! Flat color styles.

use crate::image::Color;
use crate::layer::TextureLayer;
use crate::render::style::{headline, CardStyle};
use crate::render::{white, RenderContext};
use crate::scene::{Line, Rect, Scene, Shape, Stroke};
use crate::text::FontStyle;

use itertools::Itertools;

const SADDLE_BROWN: Color = Color::rgb8(0x8B, 0x45, 0x13);
const SEPIA: Color = Color::rgb8(0x5D, 0x40, 0x37);

pub(crate) struct Classic;

impl CardStyle for Classic {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        ctx.background(scene, 10.0);
        if let Some(name) = &t.texture {
            TextureLayer::generated(name.as_str()).paint(scene, ctx);
        }
        scene.push(
            Shape::rect(10.0, 10.0, 380.0, 540.0)
                .radius(8.0)
                .stroke(Stroke::new(4.0, t.border())),
        );
        ctx.photo(scene, Rect::new(30.0, 30.0, 340.0, 340.0));
        if let Some(logo) = ctx.logo(Rect::new(320.0, 20.0, 60.0, 60.0)) {
            scene.push(logo);
        }
        scene.push(
            ctx.text(ctx.name(), 20.0, 390.0, 32.0)
                .bold()
                .centered(360.0)
                .color(t.text_color),
        );
        scene.push(
            ctx.text(ctx.team(), 20.0, 430.0, 20.0)
                .centered(360.0)
                .color(t.secondary_text_color),
        );

        scene.push(
            Shape::rect(30.0, 470.0, 340.0, 60.0)
                .radius(5.0)
                .fill(white(0.9)),
        );
        for (i, (label, value)) in headline(ctx).into_iter().enumerate() {
            let x = 50.0 + i as f64 * 100.0;
            scene.push(
                ctx.text(label, x, 480.0, 14.0)
                    .bold()
                    .color(Color::rgb8(0x33, 0x33, 0x33)),
            );
            scene.push(ctx.text(value, x, 500.0, 18.0).color(Color::BLACK));
        }
    }
}

pub(crate) struct Vintage;

impl CardStyle for Vintage {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        ctx.background(scene, 5.0);
        scene.push(Shape::rect(8.0, 8.0, 384.0, 544.0).stroke(Stroke::new(2.0, SADDLE_BROWN)));
        scene.push(Shape::rect(15.0, 15.0, 370.0, 530.0).stroke(Stroke::new(3.0, t.border())));

        // photo frame
        scene.push(Shape::rect(35.0, 35.0, 330.0, 320.0).fill(Color::WHITE));
        ctx.photo(scene, Rect::new(40.0, 40.0, 320.0, 310.0));

        scene.push(
            Shape::rect(30.0, 370.0, 340.0, 60.0)
                .fill(t.accent_color)
                .stroke(Stroke::new(2.0, SADDLE_BROWN)),
        );
        scene.push(
            ctx.text(ctx.name().to_uppercase(), 40.0, 385.0, 26.0)
                .bold()
                .centered(320.0)
                .spacing(2.0)
                .color(t.text_color),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 30.0, 445.0, 16.0)
                .centered(340.0)
                .spacing(1.0)
                .color(SEPIA),
        );

        scene.push(
            Shape::rect(40.0, 480.0, 320.0, 50.0)
                .fill(Color::rgba8(139, 69, 19, 0.1))
                .stroke(Stroke::new(1.0, SADDLE_BROWN)),
        );
        let [(_, avg), (_, hr), (_, rbi)] = headline(ctx);
        let columns = [
            ("BATTING AVG", 70.0, avg, 70.0),
            ("HOME RUNS", 180.0, hr, 205.0),
            ("RBI", 280.0, rbi, 290.0),
        ];
        for (label, lx, value, vx) in columns {
            scene.push(ctx.text(label, lx, 492.0, 10.0).color(SEPIA));
            scene.push(
                ctx.text(value, vx, 507.0, 14.0)
                    .bold()
                    .color(Color::BLACK),
            );
        }
    }
}

pub(crate) struct Minimalist;

impl CardStyle for Minimalist {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        ctx.background(scene, 0.0);
        scene.push(Shape::rect(0.0, 0.0, 400.0, 5.0).fill(t.accent_color));
        ctx.photo(scene, Rect::new(0.0, 5.0, 400.0, 360.0));
        if let Some(logo) = ctx.logo(Rect::new(340.0, 15.0, 50.0, 50.0)) {
            scene.push(logo.opacity(0.8));
        }
        scene.push(
            ctx.text(ctx.name(), 30.0, 385.0, 36.0)
                .width(340.0)
                .style(FontStyle::LIGHT)
                .color(t.text_color),
        );
        scene.push(
            ctx.text(ctx.team(), 30.0, 430.0, 18.0)
                .width(340.0)
                .color(t.secondary_text_color),
        );
        scene.push(Line::new(
            (30.0, 475.0),
            (370.0, 475.0),
            Stroke::new(1.0, t.accent_color),
        ));

        let [(_, avg), (_, hr), (_, rbi)] = headline(ctx);
        let columns = [
            (avg.to_string(), 30.0),
            (format!("{hr} HR"), 150.0),
            (format!("{rbi} RBI"), 270.0),
        ];
        for (content, x) in columns {
            scene.push(ctx.text(content, x, 490.0, 24.0).color(t.text_color));
        }
    }
}

pub(crate) struct Grunge;

impl CardStyle for Grunge {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        ctx.background(scene, 5.0);
        scene.push(Shape::rect(5.0, 5.0, 390.0, 550.0).stroke(Stroke::new(6.0, t.border())));
        scene.push(Shape::rect(15.0, 15.0, 370.0, 530.0).stroke(Stroke::new(2.0, t.accent_color)));
        ctx.photo(scene, Rect::new(35.0, 35.0, 330.0, 310.0));
        if let Some(logo) = ctx.logo(Rect::new(25.0, 25.0, 70.0, 70.0)) {
            scene.push(logo.opacity(0.9));
        }

        scene.push(Shape::rect(25.0, 360.0, 350.0, 50.0).fill(t.border()));
        scene.push(
            ctx.text(ctx.name().to_uppercase(), 25.0, 372.0, 30.0)
                .bold()
                .centered(350.0)
                .color(t.text_color),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 25.0, 420.0, 18.0)
                .centered(350.0)
                .color(t.secondary_text_color),
        );

        scene.push(
            Shape::rect(35.0, 460.0, 330.0, 65.0)
                .fill(Color::BLACK.with_alpha(0.4))
                .stroke(Stroke::new(2.0, t.accent_color)),
        );
        let positions = [(60.0, 475.0), (200.0, 475.0), (60.0, 500.0)];
        for ((label, value), (x, y)) in headline(ctx).into_iter().zip(positions) {
            scene.push(
                ctx.text(format!("{label}: {value}"), x, y, 16.0)
                    .bold()
                    .color(t.text_color),
            );
        }
    }
}

pub(crate) struct Polaroid;

impl CardStyle for Polaroid {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        ctx.background(scene, 0.0);
        scene.push(Shape::rect(5.0, 5.0, 390.0, 550.0).stroke(Stroke::new(1.0, t.border())));

        scene.push(Shape::rect(25.0, 25.0, 350.0, 340.0).fill(Color::WHITE));
        ctx.photo(scene, Rect::new(30.0, 30.0, 340.0, 330.0));
        if let Some(logo) = ctx.logo(Rect::new(325.0, 375.0, 50.0, 50.0)) {
            scene.push(logo.opacity(0.7));
        }

        scene.push(
            ctx.text(ctx.name(), 30.0, 380.0, 28.0)
                .width(340.0)
                .color(t.text_color),
        );
        scene.push(
            ctx.text(ctx.team(), 30.0, 415.0, 16.0)
                .width(340.0)
                .color(t.secondary_text_color),
        );
        scene.push(Line::new(
            (30.0, 450.0),
            (370.0, 450.0),
            Stroke::new(1.0, t.accent_color).dashed(&[5.0, 5.0]),
        ));

        let summary = headline(ctx)
            .into_iter()
            .map(|(label, value)| format!("{label} {value}"))
            .join("  |  ");
        scene.push(ctx.text(summary, 30.0, 465.0, 14.0).color(t.text_color));
    }
}
