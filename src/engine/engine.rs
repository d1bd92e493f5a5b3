use tracing::trace;

use crate::{
    config::{Config, ConfigError},
    engine::projection::{Shading, StripColumn, column_rect, scale_colour},
    engine::types::{Screen, Viewport},
    renderer::{DrawCall, Drawable, Renderer, RendererExt, Rgba, Stroke},
    sim::InputCmd,
    world::SceneState,
};

/// Output of one illumination + projection pass.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Hit distance per ray, in ray order.
    pub distances: Vec<f32>,
    /// Strip column per ray, in the same order.
    pub columns: Vec<StripColumn>,
}

/// Drives one frame at a time: input → illumination → projection → draw
/// calls → display surface.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub scene: SceneState,
    pub config: Config,
    pub screen: Screen,
    shading: Shading,
    top_down: Viewport,
    strips: Viewport,
    frame: Frame,
    calls: Vec<DrawCall>,
    frames: u64,
}

impl<R: Renderer> Engine<R> {
    /// Validate `config` and build the first frame from the scene as given,
    /// so [`frame`](Self::frame) and [`draw_calls`](Self::draw_calls) are
    /// never empty.
    pub fn new(renderer: R, scene: SceneState, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            renderer,
            scene,
            screen: Screen::from_config(&config),
            shading: Shading::new(&config),
            top_down: Viewport::top_down(&config),
            strips: Viewport::strips(&config),
            config,
            frame: Frame::default(),
            calls: Vec::new(),
            frames: 0,
        };
        engine.step(InputCmd::default());
        engine.build_draw_calls();
        Ok(engine)
    }

    /// Distances and columns of the last [`step`](Self::step).
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Draw calls of the last built frame, back to front.
    #[inline]
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Apply `cmd`, cast every ray and shade the result.
    pub fn step(&mut self, cmd: InputCmd) -> &Frame {
        cmd.apply(&mut self.scene.light, &self.config);

        let SceneState { walls, light } = &mut self.scene;
        light.illuminate_into(walls.as_slice(), &mut self.frame.distances);

        self.shading
            .project_into(&self.frame.distances, &mut self.frame.columns);
        &self.frame
    }

    /// Full frame: [`step`](Self::step), build the draw list and hand the
    /// finished buffer to `submit`.
    pub fn render_frame(&mut self, cmd: InputCmd, submit: impl FnOnce(&[Rgba], usize, usize)) {
        self.step(cmd);
        self.build_draw_calls();

        let clear = self.config.palette.background;
        let Self {
            renderer,
            calls,
            screen,
            ..
        } = self;
        renderer.draw_frame(screen.w, screen.h, clear, calls, submit);

        self.frames += 1;
        trace!(frame = self.frames, calls = self.calls.len(), "frame submitted");
    }

    /// Rebuild the draw list from the current scene and frame.
    pub fn build_draw_calls(&mut self) {
        let cfg = &self.config;
        let pal = cfg.palette;
        self.calls.clear();

        /* top-down: walls, then clipped rays */
        let wall_stroke = Stroke {
            width: cfg.wall_width,
            colour: pal.wall,
        };
        self.calls
            .extend(self.scene.walls.iter().map(|w| w.draw_call(wall_stroke)));

        let ray_stroke = Stroke {
            width: 1.0,
            colour: pal.ray,
        };
        self.calls.extend(
            self.scene
                .light
                .ray_segments()
                .map(|r| r.draw_call(ray_stroke)),
        );

        /* first-person strips */
        let count = self.frame.columns.len();
        for (i, col) in self.frame.columns.iter().enumerate() {
            let (x, y, w, h) = column_rect(col, i, count, &self.strips);
            self.calls.push(DrawCall::Rect {
                x,
                y,
                w,
                h,
                colour: scale_colour(pal.strip, col.brightness),
            });
        }

        /* light marker on top */
        self.calls.push(DrawCall::Circle {
            centre: self.scene.light.pos() + glam::vec2(self.top_down.x, self.top_down.y),
            radius: cfg.light_radius,
            colour: pal.light,
        });
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
