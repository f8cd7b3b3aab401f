//! The card back: player information and full stat lines.
//!
//! The layout is the same for every template; only the colors follow it.

use crate::data::StatKey;
use crate::image::Color;
use crate::render::{RenderContext, CARD_HEIGHT, CARD_WIDTH};
use crate::scene::{Line, Scene, Shape, Stroke, Text};

const FONT: &str = "Arial, sans-serif";
const INFO_TOP: f64 = 80.0;
const LINE_HEIGHT: f64 = 16.0;
const ROW_HEIGHT: f64 = 20.0;
const COLUMNS: [f64; 3] = [35.0, 135.0, 220.0];

type Cell = (StatKey, &'static str);

const BATTING: [&[Cell]; 5] = [
    &[(StatKey::Avg, ".000"), (StatKey::Games, "0"), (StatKey::AtBats, "0")],
    &[(StatKey::Hits, "0"), (StatKey::Doubles, "0"), (StatKey::Triples, "0")],
    &[(StatKey::Hr, "0"), (StatKey::Rbi, "0"), (StatKey::Sb, "0")],
    &[(StatKey::Walks, "0"), (StatKey::Strikeouts, "0")],
    &[(StatKey::Obp, ".000"), (StatKey::Slg, ".000")],
];

const PITCHING: [&[Cell]; 3] = [
    &[(StatKey::Era, "N/A"), (StatKey::Wins, "0"), (StatKey::Losses, "0")],
    &[(StatKey::Saves, "0"), (StatKey::Ip, "0.0")],
    &[(StatKey::StrikeoutsP, "0"), (StatKey::Whip, "N/A")],
];

fn text(content: impl Into<String>, x: f64, y: f64, size: f64) -> Text {
    Text::new(content, x, y).family(FONT).size(size)
}

fn present(s: &str) -> Option<&str> {
    Some(s).filter(|s| !s.is_empty())
}

fn section(scene: &mut Scene, ctx: &RenderContext, title: &str, y: f64) {
    scene.push(
        text(title, 30.0, y, 10.0)
            .bold()
            .color(ctx.template.text_color),
    );
    scene.push(Line::new(
        (30.0, y + 12.0),
        (370.0, y + 12.0),
        Stroke::new(1.0, ctx.template.accent_color),
    ));
}

fn grid(scene: &mut Scene, ctx: &RenderContext, rows: &[&[Cell]], top: f64) {
    for (r, row) in rows.iter().enumerate() {
        let y = top + r as f64 * ROW_HEIGHT;
        for ((key, placeholder), x) in row.iter().zip(COLUMNS) {
            let value = ctx.card.stat_or(*key, placeholder);
            scene.push(
                text(format!("{}: {value}", key.label()), x, y, 12.0)
                    .color(ctx.template.text_color),
            );
        }
    }
}

pub(super) fn paint(scene: &mut Scene, ctx: &RenderContext) {
    let template = ctx.template;
    let card = ctx.card;

    scene.push(
        Shape::rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
            .radius(10.0)
            .fill(template.background_color),
    );

    // header
    scene.push(
        Shape::rect(15.0, 15.0, 370.0, 50.0)
            .radius(8.0)
            .fill(template.accent_color),
    );
    scene.push(
        text(card.player_name.to_uppercase(), 20.0, 28.0, 20.0)
            .bold()
            .centered(360.0)
            .color(Color::WHITE),
    );

    section(scene, ctx, "PLAYER INFORMATION", INFO_TOP);
    let year = card.year_label();
    let info = [
        ("Team", Some(card.team_name.as_str())),
        ("Position", present(&card.position).or(Some("N/A"))),
        ("Year", Some(year.as_str())),
        ("Hometown", present(&card.hometown)),
        ("Height", present(&card.height)),
        ("Weight", present(&card.weight)),
        ("Bats/Throws", present(&card.bats_throws)),
    ];
    // missing optional lines leave their slot empty
    for (slot, (label, value)) in info.into_iter().enumerate() {
        let Some(value) = value else {
            continue;
        };
        let y = INFO_TOP + 20.0 + slot as f64 * LINE_HEIGHT;
        scene.push(text(format!("{label}: {value}"), 30.0, y, 12.0).color(template.text_color));
    }

    section(scene, ctx, "BATTING STATISTICS", 220.0);
    scene.push(
        Shape::rect(25.0, 240.0, 350.0, 140.0)
            .radius(5.0)
            .fill(Color::BLACK.with_alpha(0.03)),
    );
    grid(scene, ctx, &BATTING, 250.0);

    if card.has_pitching() {
        section(scene, ctx, "PITCHING STATISTICS", 400.0);
        scene.push(
            Shape::rect(25.0, 420.0, 350.0, 100.0)
                .radius(5.0)
                .fill(Color::BLACK.with_alpha(0.03)),
        );
        grid(scene, ctx, &PITCHING, 430.0);
    }

    // footer
    scene.push(Shape::rect(15.0, 525.0, 370.0, 20.0).fill(template.accent_color));
    scene.push(
        text(format!("{year} Baseball Card Creator"), 20.0, 530.0, 9.0)
            .centered(360.0)
            .color(Color::WHITE),
    );
}
