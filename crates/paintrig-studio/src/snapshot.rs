use std::path::Path;

use anyhow::{Context, Result};

use paintrig_engine::controls::{Command, SceneContext};
use paintrig_engine::coords::Vec2;
use paintrig_engine::paint::Color;
use paintrig_engine::render::Rasterizer;
use paintrig_engine::scene::{Scene, ShapeKind};
use paintrig_engine::status::{self, SHAPE_COUNT_TARGET, SIDE_COUNT_TARGET, StatusBoard};

/// Renders one frame with the CPU rasterizer and writes it as a PNG.
pub fn write_png(path: &Path, scene: &Scene, ctx: &SceneContext, width: u32, height: u32) -> Result<()> {
    let mut raster = Rasterizer::new(width, height);
    let report = scene.render(ctx, &mut raster);

    let mut board = StatusBoard::with_targets([SHAPE_COUNT_TARGET, SIDE_COUNT_TARGET]);
    status::report(&report, &ctx.state, &mut board);

    let image = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.to_rgba8())
        .context("rasterizer buffer does not match its size")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("wrote {} ({}x{}): {}", path.display(), width, height, board.line());
    Ok(())
}

/// One shape of each kind across the canvas, in the brush presets.
pub fn seed_demo(ctx: &mut SceneContext) -> Result<()> {
    let strokes = [
        (ShapeKind::Point, Color::WHITE, 20.0, Vec2::new(-0.6, 0.5)),
        (ShapeKind::Triangle, Color::RED, 60.0, Vec2::new(-0.2, 0.3)),
        (ShapeKind::Circle, Color::GREEN, 40.0, Vec2::new(0.4, 0.4)),
        (ShapeKind::Cube, Color::rgba(0.2, 0.4, 1.0, 0.8), 50.0, Vec2::new(-0.3, -0.5)),
    ];

    for (kind, color, size, at) in strokes {
        ctx.apply(Command::SelectKind(kind))?;
        ctx.apply(Command::SetColor(color))?;
        ctx.apply(Command::SetSize(size))?;
        ctx.apply(Command::Place(at))?;
    }
    ctx.apply(Command::SelectKind(ShapeKind::default()))?;
    ctx.apply(Command::SetColor(Color::WHITE))?;
    Ok(())
}
