use glam::Vec2;

use super::geometry::{Occluder, Point2D, distance};

/// Length of an unclipped ray, in scene units.
pub const DEFAULT_LENGTH: f32 = 25.0;

/// Which hits along the ray count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Range {
    /// Anything ahead of the origin (`u > 0`). Rays only keep their
    /// default length when no wall lies ahead at all.
    #[default]
    Unbounded,
    /// Only hits up to the default endpoint (`u <= 1`), a short torch beam.
    Torch,
}

/// One ray of the fan.
///
/// The origin is not stored: it is handed to [`Ray::cast`] so the ray always
/// starts at the light's position *at cast time*.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    angle: f32,
    dir: Vec2,
    far: Point2D,
    hit: Option<usize>,
}

impl Ray {
    /// New ray from `origin` pointing at `angle` (radians). Direction is
    /// `(sin a, cos a)`; the far point starts at the default length.
    pub fn new(origin: Point2D, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let dir = Vec2::new(s, c);
        Self {
            angle,
            dir,
            far: origin + dir * DEFAULT_LENGTH,
            hit: None,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Unit direction vector.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /// Current endpoint: the nearest hit of the last cast, or the default
    /// endpoint if nothing was hit.
    #[inline]
    pub fn far(&self) -> Point2D {
        self.far
    }

    /// Index (into the wall slice of the last cast) of the wall that clipped
    /// this ray.
    #[inline]
    pub fn hit(&self) -> Option<usize> {
        self.hit
    }

    /// Unclipped endpoint for a ray starting at `origin`.
    #[inline]
    pub fn default_far(&self, origin: Point2D) -> Point2D {
        origin + self.dir * DEFAULT_LENGTH
    }

    /// Forget the last hit and put the far point back at the default length
    /// from `origin`.
    #[inline]
    pub fn reset(&mut self, origin: Point2D) {
        self.far = self.default_far(origin);
        self.hit = None;
    }

    /// Cast from `origin` against every wall, clip the far point to the
    /// nearest hit and return its distance.
    ///
    /// Walls are visited in slice order and a later wall only wins when it is
    /// strictly closer, so equal-distance ties go to the earliest wall.
    pub fn cast<O: Occluder>(&mut self, origin: Point2D, walls: &[O], range: Range) -> f32 {
        self.reset(origin);
        let through = self.far;

        let mut best = f32::INFINITY;
        for (idx, wall) in walls.iter().enumerate() {
            let Some(x) = wall.intersect(origin, through) else {
                continue;
            };
            if range == Range::Torch && x.u > 1.0 {
                continue;
            }
            let d = distance(origin, x.point);
            if d < best {
                best = d;
                self.far = x.point;
                self.hit = Some(idx);
            }
        }

        match self.hit {
            Some(_) => best,
            None => DEFAULT_LENGTH,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::geometry::WallSegment;
    use glam::vec2;

    /// Angle 0 points straight along +y.
    fn up_ray() -> Ray {
        Ray::new(Vec2::ZERO, 0.0)
    }

    #[test]
    fn new_ray_ends_default_length_from_origin() {
        let origin = vec2(300.0, 250.0);
        let ray = Ray::new(origin, 0.0);
        assert_eq!(ray.far(), vec2(300.0, 275.0));
        assert_eq!(ray.hit(), None);
    }

    #[test]
    fn miss_is_exactly_default_length_at_any_angle() {
        let origin = vec2(300.3, 250.7);
        let walls: [WallSegment; 0] = [];
        for i in 0..640 {
            let mut ray = Ray::new(origin, 1.0 + i as f32 * 0.0011);
            assert_eq!(ray.cast(origin, &walls, Range::Unbounded), DEFAULT_LENGTH, "ray {i}");
            assert!((origin.distance(ray.far()) - DEFAULT_LENGTH).abs() < 1e-3);
        }
    }

    #[test]
    fn no_walls_keeps_default_length() {
        let mut ray = up_ray();
        let origin = vec2(10.0, 10.0);
        let walls: [WallSegment; 0] = [];
        let d = ray.cast(origin, &walls, Range::Unbounded);
        assert_eq!(d, DEFAULT_LENGTH);
        assert_eq!(ray.far(), vec2(10.0, 35.0));
        assert_eq!(ray.hit(), None);
    }

    #[test]
    fn single_wall_in_range_clips_far_point() {
        let mut ray = up_ray();
        let walls = [
            WallSegment::from_coords(100.0, 0.0, 100.0, 50.0), // off to the side
            WallSegment::from_coords(-5.0, 10.0, 5.0, 10.0),
        ];
        let d = ray.cast(Vec2::ZERO, &walls, Range::Unbounded);
        assert!((d - 10.0).abs() < 1e-5);
        assert!((ray.far() - vec2(0.0, 10.0)).length() < 1e-5);
        assert_eq!(ray.hit(), Some(1));
    }

    #[test]
    fn nearest_of_several_wins() {
        let mut ray = up_ray();
        let walls = [
            WallSegment::from_coords(-5.0, 20.0, 5.0, 20.0),
            WallSegment::from_coords(-5.0, 7.0, 5.0, 7.0),
            WallSegment::from_coords(-5.0, 15.0, 5.0, 15.0),
        ];
        let d = ray.cast(Vec2::ZERO, &walls, Range::Unbounded);
        assert!((d - 7.0).abs() < 1e-5);
        assert_eq!(ray.hit(), Some(1));
    }

    #[test]
    fn equal_distance_tie_goes_to_earliest_wall() {
        // both walls cross the ray at exactly (0, 10)
        let a = WallSegment::from_coords(-1.0, 10.0, 1.0, 10.0);
        let b = WallSegment::from_coords(-3.0, 10.0, 1.0, 10.0);

        let mut ray = up_ray();
        ray.cast(Vec2::ZERO, &[a, b], Range::Unbounded);
        assert_eq!(ray.hit(), Some(0));
        assert_eq!(ray.far(), vec2(0.0, 10.0));

        ray.cast(Vec2::ZERO, &[b, a], Range::Unbounded);
        assert_eq!(ray.hit(), Some(0));
        assert_eq!(ray.far(), vec2(0.0, 10.0));
    }

    #[test]
    fn unbounded_range_sees_past_default_length() {
        let mut ray = up_ray();
        let walls = [WallSegment::from_coords(-5.0, 300.0, 5.0, 300.0)];
        let d = ray.cast(Vec2::ZERO, &walls, Range::Unbounded);
        assert!((d - 300.0).abs() < 1e-3);
    }

    #[test]
    fn torch_range_ignores_far_walls() {
        let mut ray = up_ray();
        let walls = [
            WallSegment::from_coords(-5.0, 300.0, 5.0, 300.0),
            WallSegment::from_coords(-5.0, 30.0, 5.0, 30.0),
        ];
        let d = ray.cast(Vec2::ZERO, &walls, Range::Torch);
        assert_eq!(d, DEFAULT_LENGTH);
        assert_eq!(ray.hit(), None);

        let near = [WallSegment::from_coords(-5.0, 20.0, 5.0, 20.0)];
        let d = ray.cast(Vec2::ZERO, &near, Range::Torch);
        assert!((d - 20.0).abs() < 1e-5);
    }

    #[test]
    fn recast_follows_the_origin() {
        let mut ray = up_ray();
        let walls = [WallSegment::from_coords(-50.0, 40.0, 50.0, 40.0)];

        let d0 = ray.cast(Vec2::ZERO, &walls, Range::Unbounded);
        let d1 = ray.cast(vec2(0.0, 30.0), &walls, Range::Unbounded);
        assert!((d0 - 40.0).abs() < 1e-4);
        assert!((d1 - 10.0).abs() < 1e-4);
        assert!((ray.far() - vec2(0.0, 40.0)).length() < 1e-4);

        // moving past the wall: nothing ahead, far point resets
        let d2 = ray.cast(vec2(0.0, 45.0), &walls, Range::Unbounded);
        assert_eq!(d2, DEFAULT_LENGTH);
        assert_eq!(ray.far(), vec2(0.0, 70.0));
    }
}
