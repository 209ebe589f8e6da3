//! Paintrig studio: interactive paint/figure window, or a headless PNG
//! snapshot of one frame.

mod app;
mod snapshot;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use paintrig_engine::controls::{Command, SceneContext, SceneMode};
use paintrig_engine::device::GpuInit;
use paintrig_engine::logging::{LoggingConfig, init_logging};
use paintrig_engine::rig::Joint;
use paintrig_engine::scene::{Picture, Scene, ShapeList};
use paintrig_engine::window::{Runtime, RuntimeConfig};

/// Paint shapes, view pictures and pose an articulated figure.
#[derive(Parser, Debug)]
#[command(name = "paintrig")]
#[command(about = "Immediate-mode paint and figure studio")]
struct Cli {
    /// Scene shown at startup
    #[arg(short, long, value_enum, default_value_t = ModeArg::Paint)]
    mode: ModeArg,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Render one frame on the CPU to this PNG and exit
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Animation time in seconds for the snapshot (enables all joint animations)
    #[arg(long)]
    time: Option<f64>,

    /// Global figure rotation about X, degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotate_x: f32,

    /// Global figure rotation about Y, degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotate_y: f32,

    /// Seed the shape list with one shape of each kind
    #[arg(long)]
    demo: bool,

    /// Log filter, env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Keep at most this many shapes, dropping the oldest
    #[arg(long)]
    max_shapes: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Paint,
    Star,
    Landscape,
    Figure,
}

impl From<ModeArg> for SceneMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Paint => SceneMode::Paint,
            ModeArg::Star => SceneMode::Picture(Picture::Star),
            ModeArg::Landscape => SceneMode::Picture(Picture::Landscape),
            ModeArg::Figure => SceneMode::Figure,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let ctx = initial_context(&cli)?;
    let scene = Scene::default();

    if let Some(path) = &cli.snapshot {
        return snapshot::write_png(path, &scene, &ctx, cli.width, cli.height);
    }

    let config = RuntimeConfig {
        title: "paintrig".to_string(),
        initial_size: (cli.width as f64, cli.height as f64).into(),
    };
    Runtime::run(config, GpuInit::default(), app::Studio::new(scene, ctx))
}

fn initial_context(cli: &Cli) -> Result<SceneContext> {
    let shapes = match cli.max_shapes {
        Some(n) => ShapeList::with_limit(n),
        None => ShapeList::new(),
    };
    let mut ctx = SceneContext::with_shapes(shapes);

    if cli.demo {
        snapshot::seed_demo(&mut ctx)?;
    }

    ctx.apply(Command::SetMode(cli.mode.into()))?;
    ctx.apply(Command::SetGlobalRotation {
        x: cli.rotate_x,
        y: cli.rotate_y,
    })?;

    if let Some(t) = cli.time {
        for joint in Joint::ALL {
            ctx.apply(Command::SetAnimation { joint, on: true })?;
        }
        ctx.advance(t);
    }

    Ok(ctx)
}
