//! Render command implementation.
//!
//! Renders a single pixel map file to PNG.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{relative, Printer};
use crate::pipeline::{RenderRequest, Renderer};
use crate::render::write_png;
use crate::types::{Coordinate, Cursor, Direction};

use super::{
    ensure_dir, output_name, parse_cursor, print_modifications, read_input, ConfigArgs, ModsArgs,
    ShuffleArgs,
};

/// Render one pixel map to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Pixel map JSON file
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output PNG path (default: <output dir>/repix_nft_<name>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Highlight the pixel at X,Y with a cursor border
    #[arg(long, value_name = "X,Y")]
    pub cursor: Option<String>,

    /// Move the cursor before drawing (up, down, left, right; repeatable)
    #[arg(long = "move", value_name = "DIRECTION")]
    pub moves: Vec<Direction>,

    #[command(flatten)]
    pub mods: ModsArgs,

    #[command(flatten)]
    pub shuffle: ShuffleArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<PathBuf> {
    let (config, options) = args.config.resolve()?;
    let mods = args.mods.load()?;
    let cursor = resolve_cursor(args.cursor.as_deref(), &args.moves)?;
    let mut rng = args.shuffle.rng(&config);

    let name = relative(&args.file);
    printer.status("Rendering", &name);
    print_modifications(printer, &mods);
    let raw = read_input(&args.file)?;

    let request = RenderRequest::new(&mods)
        .shuffled(args.shuffle.shuffle)
        .with_cursor(cursor);
    let rendered = Renderer::new(options)
        .render(&raw, &request, &mut rng)
        .map_err(|e| e.in_input(name))?;

    let output = match args.output {
        Some(path) => path,
        None => config.output.join(output_name(&args.file)),
    };
    if let Some(parent) = output.parent() {
        ensure_dir(parent)?;
    }
    write_png(&rendered.image, &output)?;

    let (width, height) = rendered.dimensions();
    printer.status(
        "Wrote",
        &format!(
            "{} ({}x{}, scale {})",
            relative(&output),
            width,
            height,
            rendered.scale
        ),
    );

    Ok(output)
}

/// Start at `--cursor` (or the origin when only moves are given) and apply
/// each move in order. No cursor is drawn when neither is given.
fn resolve_cursor(start: Option<&str>, moves: &[Direction]) -> Result<Option<Coordinate>> {
    let start = start.map(parse_cursor).transpose()?;
    if start.is_none() && moves.is_empty() {
        return Ok(None);
    }

    let mut cursor = Cursor::new(start.unwrap_or_default());
    for &direction in moves {
        cursor.step(direction);
    }
    Ok(Some(cursor.position()))
}
