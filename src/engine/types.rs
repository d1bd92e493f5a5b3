use crate::config::Config;

/// Constants that depend on the *frame-buffer*, not on the scene.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

/// Sub-rectangle of the frame-buffer, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Screen {
    pub fn from_config(cfg: &Config) -> Self {
        let (w, h) = cfg.window_size();
        Self { w, h }
    }
}

impl Viewport {
    /// Top-down view: left half of the window, one pixel per scene unit.
    pub fn top_down(cfg: &Config) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: cfg.scene_w,
            h: cfg.scene_h,
        }
    }

    /// First-person strip view: right half of the window.
    pub fn strips(cfg: &Config) -> Self {
        Self {
            x: cfg.scene_w,
            y: 0.0,
            w: cfg.scene_w,
            h: cfg.scene_h,
        }
    }
}
