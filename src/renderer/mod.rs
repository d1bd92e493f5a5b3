//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! It produces a list of [`DrawCall`]s (back-to-front) and hands them to a
//! type that implements [`Renderer`], the display surface.
//!
//! * Scene objects that can be drawn implement [`Drawable`]; the set is
//!   closed: walls and clipped rays (lines), strip columns (rects) and the
//!   light marker (circle).
//! * A helper blanket-impl [`RendererExt`] adds `draw` / `draw_frame` so
//!   call-sites stay short.

use glam::Vec2;

use crate::world::{RaySegment, WallSegment};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Line width and colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub colour: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    Line {
        a: Vec2,
        b: Vec2,
        stroke: Stroke,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        colour: Rgba,
    },
    Circle {
        centre: Vec2,
        radius: f32,
        colour: Rgba,
    },
}

/// A display surface that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize, clear: Rgba);

    fn draw_line(&mut self, a: Vec2, b: Vec2, stroke: Stroke);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, colour: Rgba);

    fn fill_circle(&mut self, centre: Vec2, radius: f32, colour: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl: dispatch a [`DrawCall`], or a whole frame of them.
pub trait RendererExt: Renderer {
    fn draw(&mut self, call: &DrawCall) {
        match *call {
            DrawCall::Line { a, b, stroke } => self.draw_line(a, b, stroke),
            DrawCall::Rect { x, y, w, h, colour } => self.fill_rect(x, y, w, h, colour),
            DrawCall::Circle {
                centre,
                radius,
                colour,
            } => self.fill_circle(centre, radius, colour),
        }
    }

    fn draw_frame<F>(&mut self, width: usize, height: usize, clear: Rgba, calls: &[DrawCall], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height, clear);
        for c in calls {
            self.draw(c);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

/// Something that knows how to put itself on a display surface.
pub trait Drawable {
    fn draw_call(&self, stroke: Stroke) -> DrawCall;

    fn render<R: Renderer + ?Sized>(&self, surface: &mut R, stroke: Stroke) {
        surface.draw(&self.draw_call(stroke));
    }
}

impl Drawable for WallSegment {
    fn draw_call(&self, stroke: Stroke) -> DrawCall {
        DrawCall::Line {
            a: self.p1(),
            b: self.p2(),
            stroke,
        }
    }
}

impl Drawable for RaySegment {
    fn draw_call(&self, stroke: Stroke) -> DrawCall {
        DrawCall::Line {
            a: self.origin,
            b: self.far,
            stroke,
        }
    }
}

pub mod software;

pub use software::Software;
