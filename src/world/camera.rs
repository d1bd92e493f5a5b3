use glam::Vec2;
use tracing::trace;

use super::geometry::{Occluder, Point2D};
use super::ray::{Range, Ray};
use crate::config::Config;

/// Clipped ray as drawn in the top-down view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaySegment {
    pub origin: Point2D,
    pub far: Point2D,
}

/// The point light that doubles as the first-person camera.
///
/// * Ray `i` points at `heading + 90° + i·(fov / N)`.
/// * Only the **heading** and **fov** are baked into the rays; the position
///   is read when they are cast.
/// * Until the next cast, every ray ends [`DEFAULT_LENGTH`](super::ray::DEFAULT_LENGTH)
///   from `pos`.
#[derive(Clone, Debug)]
pub struct LightSource {
    pos: Point2D,
    heading: f32, // radians
    fov: f32,     // radians, spread of the whole fan
    range: Range,
    rays: Vec<Ray>,
}

impl LightSource {
    /// Create a light at `pos`, turned by `heading`, casting `ray_count`
    /// rays over `fov` radians.
    pub fn new(pos: Point2D, heading: f32, fov: f32, ray_count: usize) -> Self {
        let mut light = Self {
            pos,
            heading,
            fov,
            range: Range::default(),
            rays: Vec::with_capacity(ray_count),
        };
        light.rebuild_rays(ray_count);
        light
    }

    /// Light at the configured start pose.
    pub fn from_config(cfg: &Config) -> Self {
        let mut light = Self::new(
            cfg.start_pos,
            cfg.start_heading,
            cfg.fov_deg.to_radians(),
            cfg.ray_count,
        );
        light.range = cfg.range;
        light
    }

    fn rebuild_rays(&mut self, count: usize) {
        let base = self.heading + std::f32::consts::FRAC_PI_2;
        let step = self.fov / count as f32;
        let pos = self.pos;
        self.rays.clear();
        self.rays
            .extend((0..count).map(|i| Ray::new(pos, base + i as f32 * step)));
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    #[inline]
    pub fn pos(&self) -> Point2D {
        self.pos
    }

    pub fn set_position(&mut self, pos: Point2D) {
        self.pos = pos;
        for ray in &mut self.rays {
            ray.reset(pos);
        }
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
        self.rebuild_rays(self.rays.len());
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.rebuild_rays(self.rays.len());
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    #[inline]
    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    /// Clipped rays of the last illumination, in ray order.
    pub fn ray_segments(&self) -> impl Iterator<Item = RaySegment> + '_ {
        self.rays.iter().map(|r| RaySegment {
            origin: self.pos,
            far: r.far(),
        })
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector along the centre of the fan.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let a = self.heading + std::f32::consts::FRAC_PI_2 + self.fov * 0.5;
        let (s, c) = a.sin_cos();
        Vec2::new(s, c)
    }

    /// Unit vector perpendicular to [`forward`](Self::forward).
    #[inline]
    pub fn right(&self) -> Vec2 {
        self.forward().perp()
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` units along the view and `side` units sideways.
    pub fn step(&mut self, forward: f32, side: f32) {
        self.set_position(self.pos + self.forward() * forward + self.right() * side);
    }

    /// Rotate the fan by `delta` radians.
    pub fn turn(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.set_heading((self.heading + delta).rem_euclid(std::f32::consts::TAU));
    }

    /*──────────────────────── illumination ──────────────────────────*/

    /// Cast every ray in index order and return the hit distances.
    pub fn illuminate<O: Occluder>(&mut self, walls: &[O]) -> Vec<f32> {
        let mut view = Vec::with_capacity(self.rays.len());
        self.illuminate_into(walls, &mut view);
        view
    }

    /// Like [`illuminate`](Self::illuminate) but reuses `view`.
    pub fn illuminate_into<O: Occluder>(&mut self, walls: &[O], view: &mut Vec<f32>) {
        view.clear();
        let (pos, range) = (self.pos, self.range);
        view.extend(self.rays.iter_mut().map(|ray| ray.cast(pos, walls, range)));
        trace!(rays = view.len(), walls = walls.len(), "illuminated");
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
