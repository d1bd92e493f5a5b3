//! Scene, camera and shading parameters.
//!
//! `Config::default()` reproduces the reference layout: a 600×500 top-down
//! scene with the first-person strip view of the same size to its right,
//! 640 rays over a 40° fan.

use glam::{Vec2, vec2};
use thiserror::Error;

use crate::renderer::Rgba;
use crate::world::ray::Range;

/// Colours used by the engine when it emits draw calls (0x00RRGGBB).
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Rgba,
    pub wall: Rgba,
    pub ray: Rgba,
    pub light: Rgba,
    /// Base strip colour, scaled by brightness per column.
    pub strip: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: 0x00_00_00_00,
            wall: 0x00_FF_6F_69,
            ray: 0x00_FF_CC_5C,
            light: 0x00_96_CE_B4,
            strip: 0x00_FF_6F_69,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /* scene */
    pub scene_w: f32,
    pub scene_h: f32,

    /* light / camera */
    pub ray_count: usize,
    pub fov_deg: f32,
    pub range: Range,
    pub start_pos: Vec2,
    pub start_heading: f32, // radians
    pub move_speed: f32,    // units per frame
    pub turn_speed_deg: f32,

    /* shading */
    pub falloff: f32, // K in (K / n²)^(1/gamma)
    pub gamma: f32,
    pub height_scale: f32,
    pub max_strip_height: f32,
    pub min_normalized: f32,

    /* drawing */
    pub wall_width: f32,
    pub light_radius: f32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene_w: 600.0,
            scene_h: 500.0,

            ray_count: 640,
            fov_deg: 40.0,
            range: Range::Unbounded,
            start_pos: vec2(40.0, 40.0),
            start_heading: 0.0,
            move_speed: 3.0,
            turn_speed_deg: 2.0,

            falloff: 0.03,
            gamma: 2.2,
            height_scale: 100.0,
            max_strip_height: 500.0,
            min_normalized: 1e-4,

            wall_width: 6.0,
            light_radius: 20.0,
            palette: Palette::default(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("at least one ray is required")]
    NoRays,

    #[error("field of view must be in (0, 360] degrees, got {0}")]
    BadFov(f32),

    #[error("scene must have a positive size, got {w}×{h}")]
    BadScene { w: f32, h: f32 },

    #[error("shading constant `{0}` must be positive")]
    BadShading(&'static str),
}

impl Config {
    /// Window size needed to show the scene and the strip view side by side.
    #[inline]
    pub fn window_size(&self) -> (usize, usize) {
        ((self.scene_w * 2.0) as usize, self.scene_h as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ray_count == 0 {
            return Err(ConfigError::NoRays);
        }
        if !(self.fov_deg > 0.0 && self.fov_deg <= 360.0) {
            return Err(ConfigError::BadFov(self.fov_deg));
        }
        if !(self.scene_w > 0.0 && self.scene_h > 0.0) {
            return Err(ConfigError::BadScene {
                w: self.scene_w,
                h: self.scene_h,
            });
        }
        for (name, v) in [
            ("falloff", self.falloff),
            ("gamma", self.gamma),
            ("height_scale", self.height_scale),
            ("max_strip_height", self.max_strip_height),
            ("min_normalized", self.min_normalized),
        ] {
            if !(v > 0.0) {
                return Err(ConfigError::BadShading(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.window_size(), (1200, 500));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config {
            ray_count: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoRays));

        let cfg = Config {
            fov_deg: 0.0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::BadFov(0.0)));

        let cfg = Config {
            scene_h: -1.0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::BadScene { .. })));

        let cfg = Config {
            gamma: 0.0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::BadShading("gamma")));
    }
}
