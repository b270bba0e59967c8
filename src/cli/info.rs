//! Info command implementation.
//!
//! Reports the canvas a pixel map would render to, without writing an image.

use std::path::PathBuf;

use clap::Args;

use crate::error::{RepixError, Result};
use crate::output::{count, relative, Printer};
use crate::pipeline::{Renderer, Summary};

use super::{print_modifications, read_input, ConfigArgs, ModsArgs};

/// Report canvas size and scale without rendering
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Pixel map JSON file
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub mods: ModsArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<Summary> {
    let (_, options) = args.config.resolve()?;
    let mods = args.mods.load()?;
    let raw = read_input(&args.file)?;

    let summary = Renderer::new(options).summarize(&raw, &mods)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| RepixError::Parse {
            message: format!("Failed to serialise summary: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        printer.info("File", &relative(&args.file));
        printer.info(
            "Pixels",
            &format!(
                "{}, {}",
                count(summary.pixels, "pixel"),
                count(summary.colours, "colour")
            ),
        );
        printer.info("Canvas", &format!("{}x{}", summary.width, summary.height));
        printer.info("Scale", &summary.scale.to_string());
        printer.info(
            "Image Size",
            &format!("{}x{} pixels", summary.final_width, summary.final_height),
        );
        print_modifications(printer, &mods);
    }

    Ok(summary)
}
