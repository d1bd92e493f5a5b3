use tracing::debug;

use super::camera::LightSource;
use super::geometry::WallSegment;
use crate::config::Config;
use crate::maze::MazeGrid;

/// Everything one frame reads: the static walls and the light.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub walls: Vec<WallSegment>,
    pub light: LightSource,
}

impl SceneState {
    pub fn new(walls: Vec<WallSegment>, light: LightSource) -> Self {
        Self { walls, light }
    }

    /// The reference room: an outer box plus nine interior partitions.
    pub fn reference(cfg: &Config) -> Self {
        Self::new(reference_walls(cfg.scene_w, cfg.scene_h), LightSource::from_config(cfg))
    }

    /// Scene whose walls are the carved `maze`, scaled to the scene size.
    /// The light starts in the middle of the entry cell.
    pub fn from_maze(cfg: &Config, maze: &MazeGrid) -> Self {
        let walls = maze.to_wall_segments(cfg.scene_w, cfg.scene_h);
        let mut light = LightSource::from_config(cfg);
        light.set_position(maze.cell_centre(maze.entry(), cfg.scene_w, cfg.scene_h));
        debug!(
            cols = maze.cols(),
            rows = maze.rows(),
            walls = walls.len(),
            "scene built from maze"
        );
        Self::new(walls, light)
    }
}

/// Outer box of `w`×`h` followed by the fixed interior layout (designed for
/// a 600×500 scene).
pub fn reference_walls(w: f32, h: f32) -> Vec<WallSegment> {
    let seg = WallSegment::from_coords;
    vec![
        seg(0.0, 0.0, w, 0.0),
        seg(0.0, h, w, h),
        seg(w, 0.0, w, h),
        seg(0.0, 0.0, 0.0, h),
        seg(0.0, 200.0, 100.0, 200.0),
        seg(200.0, 200.0, 250.0, 200.0),
        seg(250.0, 100.0, 250.0, 200.0),
        seg(250.0, 100.0, 400.0, 100.0),
        seg(550.0, 0.0, 550.0, 200.0),
        seg(400.0, 200.0, 400.0, 350.0),
        seg(400.0, 350.0, 600.0, 350.0),
        seg(250.0, 300.0, 250.0, 500.0),
        seg(250.0, 400.0, 100.0, 400.0),
    ]
}
