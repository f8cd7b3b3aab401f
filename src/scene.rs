//! A retained display list describing one card face.
//!
//! Renderers push commands into a [`Scene`]; nothing is drawn until
//! [`Scene::rasterize`] replays the list onto a cairo surface. Keeping the list
//! around lets callers inspect what a template produced.

mod draw;

use crate::image::{Color, Raster};
use crate::text::{Align, Font, FontStyle};

use std::rc::Rc;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A color stop list shared by both gradient kinds.
pub type Stops = Vec<(f64, Color)>;

/// How an area or outline is colored.
///
/// Gradient and pattern coordinates are relative to the origin of the shape
/// they paint.
#[derive(Debug, Clone)]
pub enum Paint {
    Solid(Color),
    Linear {
        from: (f64, f64),
        to: (f64, f64),
        stops: Stops,
    },
    Radial {
        center: (f64, f64),
        radius: (f64, f64),
        stops: Stops,
    },
    Pattern {
        image: Rc<Raster>,
        scale: (f64, f64),
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl Paint {
    pub fn color(&self) -> Option<Color> {
        match self {
            Paint::Solid(c) => Some(*c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stroke {
    pub width: f64,
    pub paint: Paint,
    pub dash: Vec<f64>,
}

impl Stroke {
    pub fn new(width: f64, paint: impl Into<Paint>) -> Self {
        Self {
            width,
            paint: paint.into(),
            dash: Vec::new(),
        }
    }

    pub fn dashed(mut self, dash: &[f64]) -> Self {
        self.dash = dash.to_vec();
        self
    }
}

/// A soft halo drawn behind an element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f64,
    pub opacity: f64,
}

impl Shadow {
    pub fn new(color: Color, blur: f64) -> Self {
        Self {
            color,
            blur,
            opacity: 1.0,
        }
    }

    pub fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone)]
pub struct Shape {
    pub rect: Rect,
    pub radius: f64,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            radius: 0.0,
            fill: None,
            stroke: None,
            shadow: None,
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub stroke: Stroke,
}

impl Line {
    pub fn new(from: (f64, f64), to: (f64, f64), stroke: Stroke) -> Self {
        Self {
            points: vec![from, to],
            stroke,
        }
    }
}

/// A block of text whose top left corner sits at `(x, y)`.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub font: Font,
    pub align: Align,
    pub spacing: f64,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            content: content.into(),
            x,
            y,
            width: None,
            font: Font::new("sans-serif", 12.0),
            align: Align::Left,
            spacing: 0.0,
            color: Color::BLACK,
            shadow: None,
        }
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font.family = family.into();
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.font.style = style;
        self
    }

    pub fn bold(self) -> Self {
        self.style(FontStyle::BOLD)
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Centers the text in a box of `width` starting at `x`.
    pub fn centered(mut self, width: f64) -> Self {
        self.width = Some(width);
        self.align = Align::Center;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// A bitmap scaled into `rect`.
#[derive(Debug, Clone)]
pub struct Placed {
    pub image: Rc<Raster>,
    pub rect: Rect,
    pub opacity: f64,
    pub shadow: Option<Shadow>,
}

impl Placed {
    pub fn new(image: Rc<Raster>, rect: Rect) -> Self {
        Self {
            image,
            rect,
            opacity: 1.0,
            shadow: None,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Commands drawn only inside `rect`.
#[derive(Debug, Clone)]
pub struct Clip {
    pub rect: Rect,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone)]
pub enum Command {
    Shape(Shape),
    Line(Line),
    Text(Text),
    Image(Placed),
    Clip(Clip),
}

impl From<Shape> for Command {
    fn from(value: Shape) -> Self {
        Command::Shape(value)
    }
}

impl From<Line> for Command {
    fn from(value: Line) -> Self {
        Command::Line(value)
    }
}

impl From<Text> for Command {
    fn from(value: Text) -> Self {
        Command::Text(value)
    }
}

impl From<Placed> for Command {
    fn from(value: Placed) -> Self {
        Command::Image(value)
    }
}

impl From<Clip> for Command {
    fn from(value: Clip) -> Self {
        Command::Clip(value)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<Command>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: impl Into<Command>) {
        self.commands.push(command.into());
    }

    pub fn clip(&mut self, rect: Rect, commands: Vec<Command>) {
        self.commands.push(Command::Clip(Clip { rect, commands }));
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every command in drawing order, descending into clip groups.
    pub fn walk(&self) -> Vec<&Command> {
        fn visit<'a>(commands: &'a [Command], out: &mut Vec<&'a Command>) {
            for command in commands {
                out.push(command);
                if let Command::Clip(clip) = command {
                    visit(&clip.commands, out);
                }
            }
        }
        let mut out = Vec::new();
        visit(&self.commands, &mut out);
        out
    }

    pub fn texts(&self) -> Vec<&Text> {
        self.walk()
            .into_iter()
            .filter_map(|c| match c {
                Command::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn shapes(&self) -> Vec<&Shape> {
        self.walk()
            .into_iter()
            .filter_map(|c| match c {
                Command::Shape(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<&Line> {
        self.walk()
            .into_iter()
            .filter_map(|c| match c {
                Command::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&Placed> {
        self.walk()
            .into_iter()
            .filter_map(|c| match c {
                Command::Image(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// The first text whose content is exactly `content`.
    pub fn find_text(&self, content: &str) -> Option<&Text> {
        self.texts().into_iter().find(|t| t.content == content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_descend_into_clips() {
        let image = Rc::new(Raster::new(2, 2).unwrap());
        let mut scene = Scene::new(100.0, 100.0);
        scene.push(Shape::rect(0.0, 0.0, 100.0, 100.0).fill(Color::WHITE));
        scene.clip(
            Rect::new(10.0, 10.0, 50.0, 50.0),
            vec![
                Placed::new(image, Rect::new(0.0, 0.0, 80.0, 80.0)).into(),
                Text::new("inside", 12.0, 12.0).into(),
            ],
        );
        scene.push(Text::new("outside", 0.0, 90.0));

        assert_eq!(scene.walk().len(), 5);
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(scene.images().len(), 1);
        let texts: Vec<_> = scene.texts().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(texts, ["inside", "outside"]);
        assert!(scene.find_text("inside").is_some());
        assert!(scene.find_text("missing").is_none());
    }

    #[test]
    fn builders_set_fields() {
        let text = Text::new("HR", 5.0, 6.0)
            .family("Georgia")
            .size(20.0)
            .bold()
            .centered(80.0)
            .spacing(2.0);
        assert_eq!(text.font.family, "Georgia");
        assert_eq!(text.font.style, FontStyle::BOLD);
        assert_eq!(text.width, Some(80.0));
        assert_eq!(text.align, Align::Center);

        let shape = Shape::rect(1.0, 2.0, 3.0, 4.0)
            .radius(8.0)
            .stroke(Stroke::new(2.0, Color::BLACK).dashed(&[5.0, 5.0]));
        assert!(shape.fill.is_none());
        assert_eq!(shape.stroke.unwrap().dash, vec![5.0, 5.0]);
    }
}
