pub mod batch;
pub mod completions;
pub mod info;
pub mod inputs;
pub mod render;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, RenderOptions};
use crate::error::{RepixError, Result};
use crate::output::Printer;
use crate::parser::parse_modifications;
use crate::types::{Colour, Coordinate, ModificationSet};

/// repix - Render sparse pixel maps into scaled-up PNG images
#[derive(Parser, Debug)]
#[command(name = "repix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one pixel map to PNG
    Render(render::RenderArgs),

    /// Render many pixel maps, continuing past failures
    Batch(batch::BatchArgs),

    /// Report canvas size and scale without rendering
    Info(info::InfoArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Config file and size overrides
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file (default: repix.yaml in the current directory, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Largest allowed output width or height
    #[arg(long)]
    pub max_dimension: Option<u32>,
}

impl ConfigArgs {
    /// Load the config file and apply command-line overrides.
    pub fn resolve(&self) -> Result<(Config, RenderOptions)> {
        let cwd = std::env::current_dir()?;
        let mut config = Config::discover(self.config.as_deref(), &cwd)?;
        if let Some(max) = self.max_dimension {
            config.max_dimension = max;
        }
        let options = config.render_options()?;
        Ok((config, options))
    }
}

/// Pixel overrides applied before rendering
#[derive(Args, Debug, Clone, Default)]
pub struct ModsArgs {
    /// JSON file of overrides: {"x,y": [r, g, b]}
    #[arg(long)]
    pub mods: Option<PathBuf>,

    /// Paint a pixel, as X,Y=#RRGGBB (repeatable, applied after --mods)
    #[arg(long = "set", value_name = "X,Y=COLOUR")]
    pub set: Vec<String>,
}

impl ModsArgs {
    pub fn load(&self) -> Result<ModificationSet> {
        let mut mods = match &self.mods {
            Some(path) => parse_modifications(&read_input(path)?)?,
            None => ModificationSet::new(),
        };

        for spec in &self.set {
            let (coord, colour) = parse_set(spec)?;
            mods.set(coord, colour);
        }

        Ok(mods)
    }
}

/// Colour shuffling
#[derive(Args, Debug, Clone, Default)]
pub struct ShuffleArgs {
    /// Randomly redistribute the map's colours across its pixels
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for --shuffle (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ShuffleArgs {
    pub fn rng(&self, config: &Config) -> StdRng {
        match self.seed.or(config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse an `X,Y=COLOUR` override.
pub fn parse_set(spec: &str) -> Result<(Coordinate, Colour)> {
    let (coord, colour) = spec.split_once('=').ok_or_else(|| RepixError::Parse {
        message: format!("Invalid pixel override '{}'", spec),
        help: Some("Use X,Y=#RRGGBB, for example: 3,4=#ff0000".to_string()),
    })?;

    Ok((Coordinate::parse_key(coord)?, Colour::from_hex(colour)?))
}

/// One line per active override, in coordinate order:
/// `pixel at 3,4: RGB(255, 0, 0)`.
pub fn describe_modifications(mods: &ModificationSet) -> Vec<String> {
    mods.iter()
        .map(|(coord, colour)| {
            let [r, g, b] = colour.to_rgb();
            format!("pixel at {}: RGB({}, {}, {})", coord, r, g, b)
        })
        .collect()
}

/// Print the active overrides, or nothing when there are none.
pub fn print_modifications(printer: &Printer, mods: &ModificationSet) {
    for line in describe_modifications(mods) {
        printer.info("Modified", &line);
    }
}

/// Parse an `X,Y` cursor position.
pub fn parse_cursor(spec: &str) -> Result<Coordinate> {
    Coordinate::parse_key(spec)
}

/// Read an input file.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| RepixError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

/// Output file name for an input: `repix_nft_<stem>.png`.
pub fn output_name(input: &Path) -> String {
    format!("repix_nft_{}.png", file_stem(input))
}

/// Output paths for a batch of inputs, one per input, in order.
///
/// Inputs sharing a stem (e.g. `a/punk.json` and `b/punk.json`) get
/// `-2`, `-3`, ... suffixes so no output overwrites another.
pub fn output_paths(dir: &Path, inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut taken = HashSet::new();

    inputs
        .iter()
        .map(|input| {
            let stem = file_stem(input);
            let mut name = format!("repix_nft_{}.png", stem);
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("repix_nft_{}-{}.png", stem, n);
                n += 1;
            }
            dir.join(name)
        })
        .collect()
}

fn file_stem(input: &Path) -> &str {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
}

/// Create a directory if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| RepixError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
