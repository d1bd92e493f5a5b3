pub mod camera;
pub mod geometry;
pub mod ray;
pub mod scene;

pub use geometry::{Intersection, Occluder, Point2D, WallSegment, distance, segment_intersection};

pub use camera::{LightSource, RaySegment};

pub use ray::{DEFAULT_LENGTH, Range, Ray};

pub use scene::{SceneState, reference_walls};
