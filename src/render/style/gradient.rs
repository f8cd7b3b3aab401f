//! Styles built around gradient fills.

use crate::image::Color;
use crate::render::style::{headline, CardStyle};
use crate::render::{white, RenderContext, CARD_HEIGHT, CARD_WIDTH};
use crate::scene::{Line, Paint, Rect, Scene, Shadow, Shape, Stroke};

fn linear(from: (f64, f64), to: (f64, f64), stops: &[(f64, Color)]) -> Paint {
    Paint::Linear {
        from,
        to,
        stops: stops.to_vec(),
    }
}

/// A full width rule across the card.
fn rule(y: f64, width: f64, color: Color) -> Line {
    Line::new((0.0, y), (CARD_WIDTH, y), Stroke::new(width, color))
}

pub(crate) struct Modern;

impl CardStyle for Modern {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        scene.push(
            Shape::rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
                .radius(15.0)
                .fill(linear(
                    (0.0, 0.0),
                    (0.0, CARD_HEIGHT),
                    &[(0.0, t.background_color), (1.0, Color::rgb8(0x1A, 0x1A, 0x2E))],
                )),
        );
        scene.push(rule(100.0, 3.0, t.accent_color));
        scene.push(rule(380.0, 3.0, t.accent_color));

        ctx.photo(scene, Rect::new(50.0, 110.0, 300.0, 260.0));
        if let Some(logo) = ctx.logo(Rect::new(20.0, 20.0, 70.0, 70.0)) {
            scene.push(logo);
        }

        scene.push(
            Shape::rect(20.0, 400.0, 360.0, 50.0)
                .radius(8.0)
                .fill(t.accent_color),
        );
        scene.push(
            ctx.text(ctx.name(), 20.0, 412.0, 28.0)
                .bold()
                .centered(360.0)
                .color(Color::WHITE),
        );
        scene.push(
            ctx.text(ctx.team(), 20.0, 460.0, 18.0)
                .centered(360.0)
                .color(t.text_color),
        );

        scene.push(
            Shape::rect(30.0, 490.0, 340.0, 50.0)
                .radius(8.0)
                .fill(white(0.1)),
        );
        for ((label, value), x) in headline(ctx).into_iter().zip([60.0, 180.0, 280.0]) {
            scene.push(
                ctx.text(format!("{label}: {value}"), x, 500.0, 16.0)
                    .color(t.text_color),
            );
        }
    }
}

pub(crate) struct Retro80s;

impl CardStyle for Retro80s {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        scene.push(
            Shape::rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
                .radius(15.0)
                .fill(linear(
                    (0.0, 0.0),
                    (CARD_WIDTH, CARD_HEIGHT),
                    &[
                        (0.0, Color::rgb8(0xFF, 0x6B, 0x9D)),
                        (0.5, Color::rgb8(0xFD, 0xB4, 0x4B)),
                        (1.0, Color::rgb8(0x4E, 0xCD, 0xC4)),
                    ],
                )),
        );
        scene.push(rule(80.0, 8.0, t.border()));
        scene.push(rule(88.0, 4.0, t.secondary_accent()));

        ctx.photo(scene, Rect::new(30.0, 100.0, 340.0, 280.0));
        if let Some(logo) = ctx.logo(Rect::new(320.0, 15.0, 65.0, 65.0)) {
            scene.push(logo);
        }

        scene.push(
            Shape::rect(20.0, 395.0, 360.0, 50.0)
                .radius(5.0)
                .fill(t.accent_color)
                .stroke(Stroke::new(4.0, t.border())),
        );
        scene.push(
            ctx.text(ctx.name().to_uppercase(), 20.0, 407.0, 28.0)
                .bold()
                .centered(360.0)
                .color(t.text_color)
                .shadow(Shadow::new(Color::BLACK, 3.0)),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 20.0, 455.0, 18.0)
                .bold()
                .centered(360.0)
                .color(t.text_color),
        );
        scene.push(Line::new(
            (20.0, 490.0),
            (380.0, 490.0),
            Stroke::new(3.0, t.secondary_text_color),
        ));
        for ((label, value), x) in headline(ctx).into_iter().zip([50.0, 170.0, 270.0]) {
            scene.push(
                ctx.text(format!("{label} {value}"), x, 500.0, 16.0)
                    .bold()
                    .color(t.text_color),
            );
        }
    }
}

pub(crate) struct Chrome;

impl CardStyle for Chrome {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        scene.push(
            Shape::rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
                .radius(12.0)
                .fill(linear(
                    (0.0, 0.0),
                    (0.0, CARD_HEIGHT),
                    &[
                        (0.0, Color::rgb8(0xF5, 0xF5, 0xF5)),
                        (0.3, Color::rgb8(0xC0, 0xC0, 0xC0)),
                        (0.7, Color::rgb8(0x80, 0x80, 0x80)),
                        (1.0, Color::rgb8(0x69, 0x69, 0x69)),
                    ],
                )),
        );
        scene.push(
            Shape::rect(12.0, 12.0, 376.0, 536.0)
                .radius(8.0)
                .stroke(Stroke::new(6.0, Color::rgb8(0x40, 0x40, 0x40))),
        );
        scene.push(
            Shape::rect(20.0, 20.0, 360.0, 520.0)
                .radius(6.0)
                .stroke(Stroke::new(2.0, Color::rgb8(0xD3, 0xD3, 0xD3))),
        );

        ctx.photo(scene, Rect::new(40.0, 40.0, 320.0, 300.0));
        if let Some(logo) = ctx.logo(Rect::new(315.0, 25.0, 60.0, 60.0)) {
            scene.push(logo);
        }

        scene.push(
            Shape::rect(30.0, 360.0, 340.0, 45.0)
                .radius(8.0)
                .fill(linear(
                    (0.0, 0.0),
                    (0.0, 45.0),
                    &[
                        (0.0, Color::rgb8(0xA8, 0xA8, 0xA8)),
                        (0.5, Color::rgb8(0x69, 0x69, 0x69)),
                        (1.0, Color::rgb8(0x50, 0x50, 0x50)),
                    ],
                ))
                .stroke(Stroke::new(3.0, Color::rgb8(0x2C, 0x2C, 0x2C))),
        );
        scene.push(
            ctx.text(ctx.name().to_uppercase(), 30.0, 372.0, 26.0)
                .bold()
                .centered(340.0)
                .color(t.text_color),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 30.0, 415.0, 16.0)
                .centered(340.0)
                .color(t.text_color),
        );

        scene.push(
            Shape::rect(40.0, 450.0, 320.0, 70.0)
                .radius(6.0)
                .fill(Color::BLACK.with_alpha(0.2))
                .stroke(Stroke::new(2.0, Color::rgb8(0x50, 0x50, 0x50))),
        );
        let columns = [(70.0, 70.0), (165.0, 170.0), (260.0, 265.0)];
        for ((label, value), (lx, vx)) in headline(ctx).into_iter().zip(columns) {
            scene.push(
                ctx.text(label, lx, 465.0, 12.0)
                    .bold()
                    .color(t.secondary_text_color),
            );
            scene.push(
                ctx.text(value, vx, 485.0, 20.0)
                    .bold()
                    .color(t.text_color),
            );
        }
    }
}

pub(crate) struct Galaxy;

const NEBULA: Color = Color::rgb8(157, 78, 221);

impl CardStyle for Galaxy {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        scene.push(
            Shape::rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
                .radius(15.0)
                .fill(Paint::Radial {
                    center: (CARD_WIDTH / 2.0, CARD_HEIGHT / 2.0),
                    radius: (0.0, CARD_HEIGHT),
                    stops: vec![
                        (0.0, Color::rgb8(0x1A, 0x0B, 0x2E)),
                        (0.5, Color::rgb8(0x0B, 0x0B, 0x1A)),
                        (1.0, Color::BLACK),
                    ],
                }),
        );
        scene.push(
            Shape::rect(10.0, 10.0, 380.0, 540.0)
                .radius(12.0)
                .stroke(Stroke::new(4.0, t.border()))
                .shadow(Shadow::new(t.accent_color, 25.0).opacity(0.9)),
        );

        ctx.photo(scene, Rect::new(35.0, 35.0, 330.0, 300.0));
        if let Some(logo) = ctx.logo(Rect::new(315.0, 25.0, 60.0, 60.0)) {
            scene.push(logo.shadow(Shadow::new(t.secondary_accent(), 15.0)));
        }

        scene.push(
            Shape::rect(25.0, 350.0, 350.0, 50.0)
                .radius(10.0)
                .fill(Paint::Radial {
                    center: (175.0, 25.0),
                    radius: (0.0, 150.0),
                    stops: vec![(0.0, t.accent_color), (1.0, NEBULA.with_alpha(0.2))],
                }),
        );
        scene.push(
            ctx.text(ctx.name().to_uppercase(), 25.0, 362.0, 30.0)
                .bold()
                .centered(350.0)
                .color(t.text_color)
                .shadow(Shadow::new(t.secondary_accent(), 12.0)),
        );
        scene.push(
            ctx.text(ctx.team().to_uppercase(), 25.0, 410.0, 18.0)
                .centered(350.0)
                .color(t.secondary_text_color),
        );

        scene.push(
            Shape::rect(40.0, 450.0, 320.0, 70.0)
                .radius(10.0)
                .fill(NEBULA.with_alpha(0.15))
                .stroke(Stroke::new(2.0, t.accent_color))
                .shadow(Shadow::new(t.accent_color, 10.0)),
        );
        let positions = [(70.0, 465.0), (180.0, 465.0), (70.0, 490.0)];
        for ((label, value), (x, y)) in headline(ctx).into_iter().zip(positions) {
            scene.push(
                ctx.text(format!("{label}: {value}"), x, y, 18.0)
                    .bold()
                    .color(t.text_color),
            );
        }
    }
}

pub(crate) struct Rainbow;

impl CardStyle for Rainbow {
    fn paint(&self, scene: &mut Scene, ctx: &mut RenderContext) {
        let t = ctx.template;
        ctx.background(scene, 15.0);
        scene.push(
            Shape::rect(10.0, 10.0, 380.0, 540.0)
                .radius(12.0)
                .stroke(Stroke::new(
                    8.0,
                    linear(
                        (0.0, 0.0),
                        (CARD_WIDTH, CARD_HEIGHT),
                        &[
                            (0.0, Color::rgb8(0xFF, 0x00, 0x80)),
                            (0.25, Color::rgb8(0xFF, 0x8C, 0x00)),
                            (0.5, Color::rgb8(0xFF, 0xD7, 0x00)),
                            (0.75, Color::rgb8(0x00, 0xD9, 0xFF)),
                            (1.0, Color::rgb8(0x8B, 0x00, 0xFF)),
                        ],
                    ),
                )),
        );

        ctx.photo(scene, Rect::new(35.0, 35.0, 330.0, 300.0));
        if let Some(logo) = ctx.logo(Rect::new(315.0, 25.0, 60.0, 60.0)) {
            scene.push(logo);
        }

        scene.push(
            Shape::rect(30.0, 350.0, 340.0, 50.0)
                .radius(10.0)
                .fill(linear(
                    (0.0, 0.0),
                    (340.0, 0.0),
                    &[
                        (0.0, t.accent_color),
                        (0.5, t.secondary_accent()),
                        (1.0, t.tertiary_accent()),
                    ],
                )),
        );
        scene.push(
            ctx.text(ctx.name().to_uppercase(), 30.0, 362.0, 28.0)
                .bold()
                .centered(340.0)
                .color(Color::WHITE),
        );
        scene.push(
            ctx.text(ctx.team(), 30.0, 415.0, 20.0)
                .bold()
                .centered(340.0)
                .color(t.text_color),
        );

        let fills = [t.accent_color, t.secondary_accent(), t.tertiary_accent()];
        for (i, ((label, value), fill)) in headline(ctx).into_iter().zip(fills).enumerate() {
            let x = 50.0 + i as f64 * 110.0;
            scene.push(Shape::rect(x, 455.0, 80.0, 70.0).radius(10.0).fill(fill));
            scene.push(
                ctx.text(label, x, 468.0, 12.0)
                    .bold()
                    .centered(80.0)
                    .color(Color::WHITE),
            );
            scene.push(
                ctx.text(value, x, 490.0, 20.0)
                    .bold()
                    .centered(80.0)
                    .color(Color::WHITE),
            );
        }
    }
}
