//! gen_maze.rs - one-shot CLI that carves a perfect maze and writes it as
//! SVG and/or prints the text diagram.
//!
//! USAGE:
//! ```bash
//! cargo run --bin gen_maze -- \
//!     --cols 15 --rows 15 \
//!     --svg maze.svg --text
//! ```

use std::path::PathBuf;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use torchlight::maze::MazeGrid;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Number of columns
    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Number of rows
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Entry cell column
    #[arg(long, default_value_t = 0)]
    entry_col: usize,

    /// Entry cell row
    #[arg(long, default_value_t = 0)]
    entry_row: usize,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// File receiving the SVG drawing
    #[arg(long, value_name = "FILE", default_value = "maze.svg")]
    svg: PathBuf,

    /// Skip the SVG file
    #[arg(long)]
    no_svg: bool,

    /// Print the text diagram to stdout
    #[arg(long)]
    text: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let opts = Opts::parse();

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let maze = MazeGrid::generated(opts.cols, opts.rows, (opts.entry_col, opts.entry_row), &mut rng)?;

    if opts.text {
        print!("{maze}");
    }
    if !opts.no_svg {
        maze.write_svg(&opts.svg)?;
        info!(path = %opts.svg.display(), "wrote svg");
    }

    info!(
        cols = maze.cols(),
        rows = maze.rows(),
        passages = maze.open_passages(),
        "generated maze"
    );
    Ok(())
}
