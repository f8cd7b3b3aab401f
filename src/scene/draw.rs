//! Replays a scene onto a cairo surface.

use crate::error::Result;
use crate::image::Raster;
use crate::scene::{Command, Line, Paint, Placed, Rect, Scene, Shadow, Shape, Stops, Stroke, Text};
use crate::text;

use cairo::{Context, Extend, Gradient, LinearGradient, Matrix, RadialGradient, SurfacePattern};
use std::f64::consts::PI;

/// Number of widening strokes used to fake a blurred shadow.
const GLOW_PASSES: u32 = 4;

impl Scene {
    /// Draws the scene into a new raster `scale` times its nominal size.
    pub fn rasterize(&self, scale: f64) -> Result<Raster> {
        let width = (self.width * scale).round().max(1.0) as u32;
        let height = (self.height * scale).round().max(1.0) as u32;
        let raster = Raster::new(width, height)?;
        {
            let cr = Context::new(raster.surface())?;
            cr.scale(scale, scale);
            draw_all(&cr, &self.commands)?;
        }
        Ok(raster)
    }
}

fn draw_all(cr: &Context, commands: &[Command]) -> Result<()> {
    for command in commands {
        match command {
            Command::Shape(shape) => draw_shape(cr, shape)?,
            Command::Line(line) => draw_line(cr, line)?,
            Command::Text(text) => draw_text(cr, text)?,
            Command::Image(placed) => draw_image(cr, placed)?,
            Command::Clip(clip) => {
                let Rect {
                    x,
                    y,
                    width,
                    height,
                } = clip.rect;
                cr.save()?;
                cr.rectangle(x, y, width, height);
                cr.clip();
                draw_all(cr, &clip.commands)?;
                cr.restore()?;
            }
        }
    }
    Ok(())
}

fn rounded_rect(cr: &Context, width: f64, height: f64, radius: f64) {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    cr.new_path();
    if r == 0.0 {
        cr.rectangle(0.0, 0.0, width, height);
        return;
    }
    cr.new_sub_path();
    cr.arc(width - r, r, r, -PI / 2.0, 0.0);
    cr.arc(width - r, height - r, r, 0.0, PI / 2.0);
    cr.arc(r, height - r, r, PI / 2.0, PI);
    cr.arc(r, r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn add_stops(gradient: &Gradient, stops: &Stops) {
    for (offset, color) in stops {
        let (r, g, b, a) = color.rgba();
        gradient.add_color_stop_rgba(*offset, r, g, b, a);
    }
}

fn set_paint(cr: &Context, paint: &Paint) -> Result<()> {
    match paint {
        Paint::Solid(color) => {
            let (r, g, b, a) = color.rgba();
            cr.set_source_rgba(r, g, b, a);
        }
        Paint::Linear { from, to, stops } => {
            let gradient = LinearGradient::new(from.0, from.1, to.0, to.1);
            add_stops(&gradient, stops);
            cr.set_source(&gradient)?;
        }
        Paint::Radial {
            center,
            radius,
            stops,
        } => {
            let (cx, cy) = *center;
            let gradient = RadialGradient::new(cx, cy, radius.0, cx, cy, radius.1);
            add_stops(&gradient, stops);
            cr.set_source(&gradient)?;
        }
        Paint::Pattern { image, scale } => {
            let pattern = SurfacePattern::create(image.surface());
            pattern.set_extend(Extend::Repeat);
            let (sx, sy) = (scale.0.max(f64::EPSILON), scale.1.max(f64::EPSILON));
            pattern.set_matrix(Matrix::new(1.0 / sx, 0.0, 0.0, 1.0 / sy, 0.0, 0.0));
            cr.set_source(&pattern)?;
        }
    }
    Ok(())
}

fn set_stroke(cr: &Context, stroke: &Stroke) -> Result<()> {
    set_paint(cr, &stroke.paint)?;
    cr.set_line_width(stroke.width);
    cr.set_dash(&stroke.dash, 0.0);
    Ok(())
}

/// Strokes the current path with widening translucent lines. The path is preserved.
fn glow(cr: &Context, shadow: Shadow, base: f64) -> Result<()> {
    let (r, g, b, a) = shadow.color.rgba();
    cr.set_source_rgba(r, g, b, a * shadow.opacity / GLOW_PASSES as f64);
    cr.set_dash(&[], 0.0);
    for i in (1..=GLOW_PASSES).rev() {
        cr.set_line_width(base + shadow.blur * i as f64 / GLOW_PASSES as f64);
        cr.stroke_preserve()?;
    }
    Ok(())
}

fn draw_shape(cr: &Context, shape: &Shape) -> Result<()> {
    let Rect {
        x,
        y,
        width,
        height,
    } = shape.rect;
    cr.save()?;
    cr.translate(x, y);
    rounded_rect(cr, width, height, shape.radius);
    if let Some(shadow) = shape.shadow {
        glow(cr, shadow, shape.stroke.as_ref().map_or(0.0, |s| s.width))?;
    }
    if let Some(fill) = &shape.fill {
        set_paint(cr, fill)?;
        cr.fill_preserve()?;
    }
    if let Some(stroke) = &shape.stroke {
        set_stroke(cr, stroke)?;
        cr.stroke_preserve()?;
    }
    cr.new_path();
    cr.restore()?;
    Ok(())
}

fn draw_line(cr: &Context, line: &Line) -> Result<()> {
    let Some(((x, y), rest)) = line.points.split_first().map(|(p, rest)| (*p, rest)) else {
        return Ok(());
    };
    cr.save()?;
    cr.new_path();
    cr.move_to(x, y);
    for (x, y) in rest {
        cr.line_to(*x, *y);
    }
    set_stroke(cr, &line.stroke)?;
    cr.stroke()?;
    cr.restore()?;
    Ok(())
}

fn draw_text(cr: &Context, t: &Text) -> Result<()> {
    if t.content.is_empty() {
        return Ok(());
    }
    cr.save()?;
    let layout = text::layout(cr, &t.content, &t.font, t.width, t.align, t.spacing)?;
    if let Some(shadow) = t.shadow {
        cr.new_path();
        cr.move_to(t.x, t.y);
        pangocairo::functions::layout_path(cr, &layout);
        glow(cr, shadow, 0.0)?;
        cr.new_path();
    }
    let (r, g, b, a) = t.color.rgba();
    cr.set_source_rgba(r, g, b, a);
    cr.move_to(t.x, t.y);
    pangocairo::functions::show_layout(cr, &layout);
    cr.restore()?;
    Ok(())
}

fn draw_image(cr: &Context, placed: &Placed) -> Result<()> {
    let Rect {
        x,
        y,
        width,
        height,
    } = placed.rect;
    let (iw, ih) = (placed.image.width() as f64, placed.image.height() as f64);
    if iw == 0.0 || ih == 0.0 {
        return Ok(());
    }
    cr.save()?;
    cr.translate(x, y);
    if let Some(shadow) = placed.shadow {
        cr.new_path();
        cr.rectangle(0.0, 0.0, width, height);
        glow(cr, shadow, 0.0)?;
        cr.new_path();
    }
    cr.scale(width / iw, height / ih);
    cr.set_source_surface(placed.image.surface(), 0.0, 0.0)?;
    cr.paint_with_alpha(placed.opacity)?;
    cr.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::image::{Color, Raster};
    use crate::scene::{Paint, Placed, Rect, Scene, Shadow, Shape, Text};

    use std::rc::Rc;

    const RED: Color = Color::rgb8(255, 0, 0);

    fn two_tone() -> Raster {
        let raster = Raster::new(2, 1).unwrap();
        {
            let cr = cairo::Context::new(raster.surface()).unwrap();
            cr.set_source_rgb(0.0, 0.0, 0.0);
            cr.rectangle(0.0, 0.0, 1.0, 1.0);
            cr.fill().unwrap();
            cr.set_source_rgb(1.0, 1.0, 1.0);
            cr.rectangle(1.0, 0.0, 1.0, 1.0);
            cr.fill().unwrap();
        }
        raster
    }

    #[test]
    fn rasterizes_at_scale() {
        let scene = Scene::new(40.0, 20.0);
        let raster = scene.rasterize(2.0).unwrap();
        assert_eq!((raster.width(), raster.height()), (80, 40));
        assert_eq!(raster.pixel(3, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn clip_groups_limit_drawing() {
        let mut scene = Scene::new(40.0, 40.0);
        scene.push(Shape::rect(0.0, 0.0, 40.0, 40.0).fill(Color::WHITE));
        scene.clip(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            vec![Shape::rect(0.0, 0.0, 40.0, 40.0).fill(RED).into()],
        );
        let raster = scene.rasterize(1.0).unwrap();
        assert_eq!(raster.pixel(5, 5), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(20, 20), Some([255, 255, 255, 255]));
    }

    #[test]
    fn patterns_repeat_from_shape_origin() {
        let mut scene = Scene::new(8.0, 1.0);
        scene.push(Shape::rect(0.0, 0.0, 8.0, 1.0).fill(Paint::Pattern {
            image: Rc::new(two_tone()),
            scale: (1.0, 1.0),
        }));
        let raster = scene.rasterize(1.0).unwrap();
        assert_eq!(raster.pixel(2, 0), Some([0, 0, 0, 255]));
        assert_eq!(raster.pixel(5, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn linear_gradients_run_between_points() {
        let mut scene = Scene::new(100.0, 2.0);
        scene.push(Shape::rect(0.0, 0.0, 100.0, 2.0).fill(Paint::Linear {
            from: (0.0, 0.0),
            to: (100.0, 0.0),
            stops: vec![(0.0, Color::BLACK), (1.0, Color::WHITE)],
        }));
        let raster = scene.rasterize(1.0).unwrap();
        let [left, ..] = raster.pixel(0, 0).unwrap();
        let [mid, ..] = raster.pixel(50, 0).unwrap();
        let [right, ..] = raster.pixel(99, 0).unwrap();
        assert!(left < 10);
        assert!((110..150).contains(&mid));
        assert!(right > 245);
    }

    #[test]
    fn images_blend_with_opacity() {
        let image = Raster::new(4, 4).unwrap();
        {
            let cr = cairo::Context::new(image.surface()).unwrap();
            cr.set_source_rgb(0.0, 0.0, 0.0);
            cr.paint().unwrap();
        }
        let mut scene = Scene::new(10.0, 10.0);
        scene.push(Shape::rect(0.0, 0.0, 10.0, 10.0).fill(Color::WHITE));
        scene.push(Placed::new(Rc::new(image), Rect::new(0.0, 0.0, 10.0, 10.0)).opacity(0.5));
        let raster = scene.rasterize(1.0).unwrap();
        let [r, g, b, a] = raster.pixel(5, 5).unwrap();
        assert_eq!(a, 255);
        assert!((120..136).contains(&r));
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn shadowed_text_rasterizes() {
        let mut scene = Scene::new(200.0, 50.0);
        scene.push(
            Text::new("GLOW", 10.0, 10.0)
                .size(20.0)
                .bold()
                .centered(180.0)
                .spacing(2.0)
                .shadow(Shadow::new(RED, 10.0).opacity(0.8)),
        );
        scene.push(Text::new("", 0.0, 0.0));
        assert!(scene.rasterize(1.0).is_ok());
    }
}
