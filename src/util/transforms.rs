//! Transforms between the logical display (board pixels) and screen points.

use egui::{Pos2, Rect};

/// A 2D transform consisting of per-axis scale and translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    scale_x: f32,
    scale_y: f32,
    offset_x: f32,
    offset_y: f32,
}

impl ScreenTransform {
    /// Creates a `ScreenTransform` that fits the display `src` inside the screen area `dst`,
    /// centering it and letterboxing whichever axis has room to spare.
    pub fn letterboxed(src: Rect, dst: Rect) -> Self {
        if src.height() * dst.width() > dst.height() * src.width() {
            // The display is "taller" than the screen area; pad left and right.
            Self::horizontally_padded(src, dst)
        } else {
            // The display is "wider" than the screen area; pad top and bottom.
            fn tr(r: Rect) -> Rect {
                Rect::from_min_max(
                    Pos2::new(r.min.y, r.min.x),
                    Pos2::new(r.max.y, r.max.x),
                )
            }
            Self::horizontally_padded(tr(src), tr(dst)).transpose()
        }
    }

    /// Maps `src` into `dst` so the heights match exactly, centering horizontally.
    fn horizontally_padded(src: Rect, dst: Rect) -> Self {
        let scale_y = dst.height() / src.height();
        let offset_y = dst.min.y - src.min.y * scale_y;
        let scale_x = scale_y;
        let offset_x = dst.center().x - src.center().x * scale_x;
        Self {
            scale_x,
            scale_y,
            offset_x,
            offset_y,
        }
    }

    /// Swaps the X and Y components.
    fn transpose(&self) -> Self {
        Self {
            scale_x: self.scale_y,
            scale_y: self.scale_x,
            offset_x: self.offset_y,
            offset_y: self.offset_x,
        }
    }

    /// Returns the inverse transform, or `None` if either axis collapses to zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.scale_x == 0.0 || self.scale_y == 0.0 {
            return None;
        }
        Some(Self {
            scale_x: self.scale_x.recip(),
            scale_y: self.scale_y.recip(),
            offset_x: -self.offset_x / self.scale_x,
            offset_y: -self.offset_y / self.scale_y,
        })
    }

    pub fn map_point(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            p.x * self.scale_x + self.offset_x,
            p.y * self.scale_y + self.offset_y,
        )
    }

    pub fn map_rect(&self, r: Rect) -> Rect {
        Rect::from_two_pos(self.map_point(r.min), self.map_point(r.max))
    }

    /// Screen points per display pixel (the smaller axis, if they differ).
    pub fn scale(&self) -> f32 {
        self.scale_x.abs().min(self.scale_y.abs())
    }
}
