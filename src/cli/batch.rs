//! Batch command implementation.
//!
//! Renders many pixel map files with the same modifications. A file that
//! fails to read or render is reported and skipped; the rest still render.

use std::path::PathBuf;

use clap::Args;

use crate::error::{RepixError, Result};
use crate::output::{count, relative, Printer};
use crate::pipeline::{RenderRequest, Renderer};
use crate::render::write_png;

use super::inputs::collect_inputs;
use super::{ensure_dir, output_paths, read_input, ConfigArgs, ModsArgs, ShuffleArgs};

/// Render many pixel maps, continuing past failures
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Pixel map files or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output directory (default: from config, else "dist")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub mods: ModsArgs,

    #[command(flatten)]
    pub shuffle: ShuffleArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: BatchArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let (config, options) = args.config.resolve()?;
    let mods = args.mods.load()?;
    let mut rng = args.shuffle.rng(&config);

    let output_dir = args.output.unwrap_or_else(|| config.output.clone());
    ensure_dir(&output_dir)?;

    let files = collect_inputs(&args.paths);
    if files.is_empty() {
        printer.warning("Warning", "no pixel map files found");
        return Ok(Vec::new());
    }

    let total = files.len();
    let mut failed = 0;
    let mut loaded = Vec::with_capacity(total);
    let mut destinations = Vec::with_capacity(total);

    for (file, destination) in files.iter().zip(output_paths(&output_dir, &files)) {
        match read_input(file) {
            Ok(raw) => {
                loaded.push((relative(file), raw));
                destinations.push(destination);
            }
            Err(e) => {
                failed += 1;
                printer.error("error", &e.to_string());
            }
        }
    }

    let request = RenderRequest::new(&mods).shuffled(args.shuffle.shuffle);
    let outcomes = Renderer::new(options).render_batch(loaded, &request, &mut rng);

    let mut written = Vec::new();
    for (outcome, destination) in outcomes.into_iter().zip(destinations) {
        let result = outcome
            .result
            .and_then(|rendered| write_png(&rendered.image, &destination).map(|_| rendered));

        match result {
            Ok(rendered) => {
                let (width, height) = rendered.dimensions();
                printer.status(
                    "Rendered",
                    &format!(
                        "{} -> {} ({}x{})",
                        outcome.name,
                        relative(&destination),
                        width,
                        height
                    ),
                );
                written.push(destination);
            }
            Err(e) => {
                failed += 1;
                printer.error("error", &format!("{}: {}", outcome.name, e));
            }
        }
    }

    printer.info(
        "Finished",
        &format!(
            "{} to {}",
            count(written.len(), "image"),
            relative(&output_dir)
        ),
    );

    if failed > 0 {
        return Err(RepixError::Batch { failed, total });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(paths: Vec<PathBuf>, output: PathBuf) -> BatchArgs {
        BatchArgs {
            paths,
            output: Some(output),
            mods: ModsArgs::default(),
            shuffle: ShuffleArgs {
                shuffle: false,
                seed: Some(1),
            },
            config: ConfigArgs {
                config: None,
                max_dimension: Some(10),
            },
        }
    }

    #[test]
    fn test_batch_renders_directory() {
        let dir = tempdir().unwrap();
        let inputs = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&inputs).unwrap();
        fs::write(inputs.join("a.json"), r#"{"pixels": {"0,0": [1, 2, 3]}}"#).unwrap();
        fs::write(inputs.join("b.json"), r#"{"pixels": {"1,0": [4, 5, 6]}}"#).unwrap();

        let written = run(args(vec![inputs], output.clone()), &Printer::plain()).unwrap();

        assert_eq!(
            written,
            vec![output.join("repix_nft_a.png"), output.join("repix_nft_b.png")]
        );
        let b = image::open(output.join("repix_nft_b.png")).unwrap().to_rgb8();
        assert_eq!(b.dimensions(), (10, 5));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        let missing = dir.path().join("missing.json");
        fs::write(&good, r#"{"pixels": {"0,0": [1, 2, 3]}}"#).unwrap();
        fs::write(&bad, r#"{"pixels": {"x,0": [1, 2, 3]}}"#).unwrap();

        let err = run(args(vec![bad, missing, good], output.clone()), &Printer::plain()).unwrap_err();

        assert!(matches!(err, RepixError::Batch { failed: 2, total: 3 }));
        assert!(output.join("repix_nft_good.png").exists());
        assert!(!output.join("repix_nft_bad.png").exists());
    }

    #[test]
    fn test_batch_keeps_same_named_inputs_apart() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let inputs = dir.path().join("in");
        fs::create_dir_all(inputs.join("a")).unwrap();
        fs::create_dir_all(inputs.join("b")).unwrap();
        fs::write(inputs.join("a").join("punk.json"), r#"{"pixels": {"0,0": [1, 1, 1]}}"#).unwrap();
        fs::write(inputs.join("b").join("punk.json"), r#"{"pixels": {"0,0": [2, 2, 2]}}"#).unwrap();

        let written = run(args(vec![inputs], output.clone()), &Printer::plain()).unwrap();

        assert_eq!(
            written,
            vec![output.join("repix_nft_punk.png"), output.join("repix_nft_punk-2.png")]
        );
        assert_eq!(fs::read_dir(&output).unwrap().count(), 2);

        let first = image::open(&written[0]).unwrap().to_rgb8();
        let second = image::open(&written[1]).unwrap().to_rgb8();
        assert_eq!(first.get_pixel(0, 0).0, [1, 1, 1]);
        assert_eq!(second.get_pixel(0, 0).0, [2, 2, 2]);
    }

    #[test]
    fn test_batch_applies_shared_modifications() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        fs::write(&a, r#"{"pixels": {"0,0": [0, 0, 0], "1,1": [0, 0, 0]}}"#).unwrap();
        fs::write(&b, r#"{"pixels": {"1,1": [9, 9, 9]}}"#).unwrap();

        let mut batch_args = args(vec![a, b], output.clone());
        batch_args.mods.set = vec!["0,0=#FFFFFF".to_string()];
        run(batch_args, &Printer::plain()).unwrap();

        for name in ["repix_nft_a.png", "repix_nft_b.png"] {
            let img = image::open(output.join(name)).unwrap().to_rgb8();
            assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255], "{name}");
        }
    }
}
