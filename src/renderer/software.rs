//! ---------------------------------------------------------------------------
//! Software (CPU) display surface
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Everything is clipped against the buffer; off-screen geometry is
//!   silently dropped.
//! ---------------------------------------------------------------------------

use glam::Vec2;

use crate::renderer::{Renderer, Rgba, Stroke};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    /// Read back one pixel of the current frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.scratch[y * self.width + x])
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, colour: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = colour;
        }
    }

    /// Square brush of side `size` centred on (x, y).
    fn stamp(&mut self, x: i32, y: i32, size: i32, colour: Rgba) {
        let lo = -(size - 1) / 2;
        let hi = size / 2;
        for dy in lo..=hi {
            for dx in lo..=hi {
                self.put(x + dx, y + dy, colour);
            }
        }
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize, clear: Rgba) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(clear);
    }

    /// Integer Bresenham line, thickened with a square brush.
    fn draw_line(&mut self, a: Vec2, b: Vec2, stroke: Stroke) {
        let size = (stroke.width.round() as i32).max(1);
        let (mut x0, mut y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, size, stroke.colour);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, colour: Rgba) {
        let x0 = x.round().max(0.0) as usize;
        let y0 = y.round().max(0.0) as usize;
        let x1 = ((x + w).round().max(0.0) as usize).min(self.width);
        let y1 = ((y + h).round().max(0.0) as usize).min(self.height);
        for row in y0..y1 {
            let base = row * self.width;
            if x0 < x1 {
                self.scratch[base + x0..base + x1].fill(colour);
            }
        }
    }

    fn fill_circle(&mut self, centre: Vec2, radius: f32, colour: Rgba) {
        let r = radius.max(0.0);
        let r2 = r * r;
        let (cx, cy) = (centre.x.round() as i32, centre.y.round() as i32);
        let ri = r.ceil() as i32;
        for dy in -ri..=ri {
            for dx in -ri..=ri {
                if (dx * dx + dy * dy) as f32 <= r2 {
                    self.put(cx + dx, cy + dy, colour);
                }
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
