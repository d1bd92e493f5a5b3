use glam::Vec2;

/// Scene-space coordinate (x right, y down, in scene units).
pub type Point2D = Vec2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    a.distance(b)
}

/*------------------------- intersections ----------------------------*/

/// Result of [`segment_intersection`].
///
/// * `t` – parameter along the first segment (strictly inside `0..1`).
/// * `u` – parameter along the second segment, which is treated as a ray
///   (`u > 0`, unbounded above).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point2D,
    pub t: f32,
    pub u: f32,
}

/// Intersect segment `a` with the ray that starts at `b.0` and passes
/// through `b.1`.
///
/// ```text
/// den = (x1-x2)(y3-y4) - (y1-y2)(x3-x4)
/// t   = ((x1-x3)(y3-y4) - (y1-y3)(x3-x4)) / den
/// u   = -((x1-x2)(y1-y3) - (y1-y2)(x1-x3)) / den
/// ```
///
/// Parallel and collinear inputs (`den == 0`, compared exactly) never
/// intersect, even when they overlap.
pub fn segment_intersection(
    a: (Point2D, Point2D),
    b: (Point2D, Point2D),
) -> Option<Intersection> {
    let (Vec2 { x: x1, y: y1 }, Vec2 { x: x2, y: y2 }) = a;
    let (Vec2 { x: x3, y: y3 }, Vec2 { x: x4, y: y4 }) = b;

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;
    if !(t > 0.0 && t < 1.0 && u > 0.0) {
        return None;
    }

    Some(Intersection {
        point: Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)),
        t,
        u,
    })
}

/*------------------------- occluders --------------------------------*/

/// Anything a ray can be stopped by.
pub trait Occluder {
    /// Intersect the ray `from → through` with this occluder.
    fn intersect(&self, from: Point2D, through: Point2D) -> Option<Intersection>;
}

/// One wall of the scene: an immutable pair of endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSegment {
    p1: Point2D,
    p2: Point2D,
}

impl WallSegment {
    pub const fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    /// Shorthand for integer-ish layouts: `WallSegment::from_coords(0., 0., 600., 0.)`.
    pub const fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[inline]
    pub fn p1(&self) -> Point2D {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Point2D {
        self.p2
    }
}

impl Occluder for WallSegment {
    #[inline]
    fn intersect(&self, from: Point2D, through: Point2D) -> Option<Intersection> {
        segment_intersection((self.p1, self.p2), (from, through))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(vec2(0.0, 0.0), vec2(3.0, 4.0)), 5.0);
        assert_eq!(distance(vec2(2.0, 2.0), vec2(2.0, 2.0)), 0.0);
    }

    #[test]
    fn axis_aligned_cross() {
        // horizontal wall y = 10, vertical ray along +y from the origin
        let hit = segment_intersection(
            (vec2(-5.0, 10.0), vec2(5.0, 10.0)),
            (vec2(0.0, 0.0), vec2(0.0, 25.0)),
        )
        .expect("segments cross");
        assert!(approx(hit.point, vec2(0.0, 10.0)));
        assert!((hit.t - 0.5).abs() < 1e-6);
        assert!((hit.u - 0.4).abs() < 1e-6);
    }

    #[test]
    fn diagonal_cross() {
        // y = x meets y = -x + 4 at (2, 2)
        let hit = segment_intersection(
            (vec2(0.0, 0.0), vec2(4.0, 4.0)),
            (vec2(0.0, 4.0), vec2(1.0, 3.0)),
        )
        .expect("diagonals cross");
        assert!(approx(hit.point, vec2(2.0, 2.0)));
        assert!((hit.t - 0.5).abs() < 1e-6);
        // (2, 2) is two steps along the ray direction (1, -1)
        assert!((hit.u - 2.0).abs() < 1e-6);
    }

    #[test]
    fn ray_side_is_unbounded() {
        // intersection lies 4x beyond the ray's second point
        let hit = segment_intersection(
            (vec2(-1.0, 100.0), vec2(1.0, 100.0)),
            (vec2(0.0, 0.0), vec2(0.0, 25.0)),
        )
        .expect("u > 1 is still a hit");
        assert!((hit.u - 4.0).abs() < 1e-6);
    }

    #[test]
    fn behind_the_ray_is_rejected() {
        assert!(
            segment_intersection(
                (vec2(-1.0, -10.0), vec2(1.0, -10.0)),
                (vec2(0.0, 0.0), vec2(0.0, 25.0)),
            )
            .is_none()
        );
    }

    #[test]
    fn wall_endpoints_are_excluded() {
        // ray passes exactly through p1 (t == 0)
        assert!(
            segment_intersection(
                (vec2(0.0, 10.0), vec2(5.0, 10.0)),
                (vec2(0.0, 0.0), vec2(0.0, 25.0)),
            )
            .is_none()
        );
        // … and through p2 (t == 1)
        assert!(
            segment_intersection(
                (vec2(-5.0, 10.0), vec2(0.0, 10.0)),
                (vec2(0.0, 0.0), vec2(0.0, 25.0)),
            )
            .is_none()
        );
    }

    #[test]
    fn parallel_and_collinear_never_intersect() {
        let ray = (vec2(0.0, 0.0), vec2(0.0, 25.0));
        // parallel, disjoint
        assert!(segment_intersection((vec2(3.0, 0.0), vec2(3.0, 10.0)), ray).is_none());
        // collinear and overlapping
        assert!(segment_intersection((vec2(0.0, 5.0), vec2(0.0, 10.0)), ray).is_none());
    }

    #[test]
    fn zero_length_ray_is_degenerate() {
        let p = vec2(1.0, 1.0);
        assert!(segment_intersection((vec2(0.0, 5.0), vec2(5.0, 0.0)), (p, p)).is_none());
    }

    #[test]
    fn wall_occludes_via_trait() {
        let wall = WallSegment::from_coords(-5.0, 10.0, 5.0, 10.0);
        let hit = wall.intersect(Vec2::ZERO, vec2(0.0, 25.0)).unwrap();
        assert!(approx(hit.point, vec2(0.0, 10.0)));
        assert_eq!((wall.p1(), wall.p2()), (vec2(-5.0, 10.0), vec2(5.0, 10.0)));
    }
}
