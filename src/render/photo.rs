//! Player photo placement inside its frame.

use crate::scene::Rect;

/// Where the scaled photo sits on the card.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

/// Extra zoom over the minimum cover scale, leaving room to pan.
const ZOOM: f64 = 1.2;

impl Placement {
    /// Scales an image of `width` × `height` to cover `clip` with some slack, centered.
    pub fn cover(width: f64, height: f64, clip: Rect) -> Self {
        let scale = (clip.width / width).max(clip.height / height) * ZOOM;
        let (sw, sh) = (width * scale, height * scale);
        Self {
            x: clip.x + (clip.width - sw) / 2.0,
            y: clip.y + (clip.height - sh) / 2.0,
            scale,
            width: sw,
            height: sh,
        }
    }

    /// Moves the image to `(x, y)`, clamped so `clip` stays covered.
    pub fn moved_to(self, x: f64, y: f64, clip: Rect) -> Self {
        let min_x = clip.x - (self.width - clip.width);
        let min_y = clip.y - (self.height - clip.height);
        Self {
            x: x.clamp(min_x.min(clip.x), clip.x),
            y: y.clamp(min_y.min(clip.y), clip.y),
            ..self
        }
    }

    pub fn covers(&self, clip: Rect) -> bool {
        self.x <= clip.x
            && self.y <= clip.y
            && self.x + self.width >= clip.x + clip.width
            && self.y + self.height >= clip.y + clip.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIP: Rect = Rect::new(40.0, 80.0, 320.0, 340.0);

    #[test]
    fn covers_and_centers() {
        // a 1000x500 photo is limited by height: 340/500 * 1.2
        let p = Placement::cover(1000.0, 500.0, CLIP);
        assert!((p.scale - 0.816).abs() < 1e-9);
        assert!((p.height - 408.0).abs() < 1e-9);
        assert!((p.width - 816.0).abs() < 1e-9);
        assert!((p.x - (40.0 - 248.0)).abs() < 1e-9);
        assert!((p.y - (80.0 - 34.0)).abs() < 1e-9);
        assert!(p.covers(CLIP));
    }

    #[test]
    fn pan_is_clamped_to_cover() {
        let p = Placement::cover(100.0, 100.0, CLIP);
        let moved = p.moved_to(1000.0, -1000.0, CLIP);
        assert_eq!(moved.x, CLIP.x);
        assert!((moved.y - (CLIP.y - (p.height - CLIP.height))).abs() < 1e-9);
        assert!(moved.covers(CLIP));

        let inside = p.moved_to(p.x + 1.0, p.y - 1.0, CLIP);
        assert!((inside.x - (p.x + 1.0)).abs() < 1e-9);
        assert!(inside.covers(CLIP));
    }
}
