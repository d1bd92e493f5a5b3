//! Interactive viewer: top-down rays on the left, strip view on the right.
//!
//! Controls  W/S or ↑/↓ = forward/back  A/D = strafe  ←/→ = turn  Esc = quit
//!
//! ```bash
//! cargo run --release --bin view_rays -- --maze 8x6 --seed 3
//! ```

use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use torchlight::{
    Config,
    engine::Engine,
    maze::MazeGrid,
    renderer::Software,
    sim::InputCmd,
    world::{Range, SceneState},
};

/// `COLSxROWS`, e.g. `8x6`.
#[derive(Clone, Copy, Debug)]
struct MazeSize {
    cols: usize,
    rows: usize,
}

impl FromStr for MazeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (c, r) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected COLSxROWS, got `{s}`"))?;
        let cols = c.trim().parse().map_err(|e| format!("bad column count: {e}"))?;
        let rows = r.trim().parse().map_err(|e| format!("bad row count: {e}"))?;
        Ok(Self { cols, rows })
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Replace the reference room with a generated maze of this size
    #[arg(long, value_name = "COLSxROWS")]
    maze: Option<MazeSize>,

    /// Seed for the maze generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Only light walls within the default ray length
    #[arg(long)]
    torch: bool,

    /// Number of rays in the fan
    #[arg(long, default_value_t = 640)]
    rays: usize,

    /// Field of view in degrees
    #[arg(long, default_value_t = 40.0)]
    fov: f32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let filter = if opts.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let cfg = Config {
        ray_count: opts.rays,
        fov_deg: opts.fov,
        range: if opts.torch {
            Range::Torch
        } else {
            Range::Unbounded
        },
        ..Config::default()
    };
    cfg.validate()?;

    // ─────────── scene ────────────
    let scene = match opts.maze {
        Some(MazeSize { cols, rows }) => {
            let mut rng = match opts.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let maze = MazeGrid::generated(cols, rows, (0, 0), &mut rng)?;
            info!("maze {cols}×{rows}\n{maze}");
            SceneState::from_maze(&cfg, &maze)
        }
        None => SceneState::reference(&cfg),
    };
    info!(walls = scene.walls.len(), rays = cfg.ray_count, "scene ready");

    let (w, h) = cfg.window_size();
    let mut engine = Engine::new(Software::default(), scene, cfg)?;

    let mut win = Window::new("Rendering 2D Raycasting", w, h, WindowOptions::default())?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::A) {
            cmd.strafe -= 1.0;
        }
        if win.is_key_down(Key::D) {
            cmd.strafe += 1.0;
        }
        if win.is_key_down(Key::Left) {
            cmd.turn += 1.0;
        }
        if win.is_key_down(Key::Right) {
            cmd.turn -= 1.0;
        }

        let mut shown = Ok(());
        engine.render_frame(cmd, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            shown = win.update_with_buffer(fb, w, h);
        });
        shown?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
