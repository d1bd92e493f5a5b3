//! Distance → strip column mapping for the first-person view.
//!
//! ```text
//! n          = max(d / √(w² + h²), ε)
//! brightness = clamp((K / n²)^(1/γ), 0, 1)   // inverse-square, gamma corrected
//! height     = min(max_h, S / n)
//! ```

use crate::config::Config;
use crate::engine::types::Viewport;
use crate::renderer::Rgba;

/// Shading constants, pre-derived from [`Config`].
#[derive(Clone, Copy, Debug)]
pub struct Shading {
    /// World diagonal used to normalise distances.
    pub v1: f32,
    pub falloff: f32,
    pub inv_gamma: f32,
    pub height_scale: f32,
    pub max_strip_height: f32,
    pub min_normalized: f32,
}

/// One vertical slice of the strip view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripColumn {
    pub brightness: f32, // 0 … 1
    pub height: f32,     // pixels
}

impl Shading {
    pub fn new(cfg: &Config) -> Self {
        Self {
            v1: (cfg.scene_w * cfg.scene_w + cfg.scene_h * cfg.scene_h).sqrt(),
            falloff: cfg.falloff,
            inv_gamma: 1.0 / cfg.gamma,
            height_scale: cfg.height_scale,
            max_strip_height: cfg.max_strip_height,
            min_normalized: cfg.min_normalized,
        }
    }

    /// Shade a single hit distance.
    #[inline]
    pub fn shade(&self, d: f32) -> StripColumn {
        // a light standing on a wall gives d == 0
        let n = (d / self.v1).max(self.min_normalized);
        let brightness = (self.falloff / (n * n)).powf(self.inv_gamma).clamp(0.0, 1.0);
        let height = (self.height_scale / n).min(self.max_strip_height);
        StripColumn { brightness, height }
    }

    /// Shade every distance, keeping input order.
    pub fn project(&self, distances: &[f32]) -> Vec<StripColumn> {
        let mut columns = Vec::with_capacity(distances.len());
        self.project_into(distances, &mut columns);
        columns
    }

    /// Like [`project`](Self::project) but reuses `columns`.
    pub fn project_into(&self, distances: &[f32], columns: &mut Vec<StripColumn>) {
        columns.clear();
        columns.extend(distances.iter().map(|&d| self.shade(d)));
    }
}

/// Screen rectangle of a strip column: `(x, y, w, h)`.
///
/// Column 0 is the rightmost slice; each next ray moves one column left.
pub fn column_rect(col: &StripColumn, idx: usize, count: usize, vp: &Viewport) -> (f32, f32, f32, f32) {
    let w = vp.w / count as f32;
    let x = vp.x + vp.w - (idx + 1) as f32 * w;
    let y = vp.y + (vp.h - col.height) * 0.5;
    (x, y, w, col.height)
}

/// Scale each channel of a 0x00RRGGBB colour by `brightness`.
#[inline]
pub fn scale_colour(base: Rgba, brightness: f32) -> Rgba {
    let b = brightness.clamp(0.0, 1.0);
    let ch = |shift: u32| ((((base >> shift) & 0xFF) as f32 * b) as u32) << shift;
    ch(16) | ch(8) | ch(0)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
