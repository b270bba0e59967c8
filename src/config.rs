//! Render options and the optional `repix.yaml` config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RepixError, Result};
use crate::types::Colour;

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILENAME: &str = "repix.yaml";

/// Tunables for scaling and cursor drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Largest allowed output width or height, in pixels.
    pub max_dimension: u32,
    /// Colour of the cursor border.
    pub cursor_colour: Colour,
    /// Thinnest cursor border, in output pixels.
    pub min_border_thickness: u32,
    /// Border thickness is `scale / border_divisor`, but never below the minimum.
    pub border_divisor: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_dimension: 2000,
            cursor_colour: Colour::RED,
            min_border_thickness: 2,
            border_divisor: 8,
        }
    }
}

impl RenderOptions {
    /// Cursor border thickness for a given scale factor.
    pub fn border_thickness(&self, scale: u32) -> u32 {
        let fraction = scale.checked_div(self.border_divisor).unwrap_or(0);
        fraction.max(self.min_border_thickness)
    }

    /// Check that the options can drive a render.
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(RepixError::Config {
                message: "max_dimension must be at least 1".to_string(),
                help: None,
            });
        }
        if self.border_divisor == 0 {
            return Err(RepixError::Config {
                message: "border_divisor must be at least 1".to_string(),
                help: Some("The default divisor is 8".to_string()),
            });
        }
        Ok(())
    }
}

/// Contents of `repix.yaml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_dimension: u32,
    /// Hex colour, e.g. `#FF0000`.
    pub cursor_colour: String,
    pub min_border_thickness: u32,
    pub border_divisor: u32,
    /// Default output directory.
    pub output: PathBuf,
    /// Default shuffle seed.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            max_dimension: options.max_dimension,
            cursor_colour: options.cursor_colour.to_string(),
            min_border_thickness: options.min_border_thickness,
            border_divisor: options.border_divisor,
            output: PathBuf::from("dist"),
            seed: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RepixError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RepixError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `explicit` if given, else `repix.yaml` in `dir` if it exists,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve into validated render options.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let cursor_colour = Colour::from_hex(&self.cursor_colour).map_err(|e| RepixError::Config {
            message: format!("cursor_colour: {}", e),
            help: Some("Use #RGB or #RRGGBB format".to_string()),
        })?;

        let options = RenderOptions {
            max_dimension: self.max_dimension,
            cursor_colour,
            min_border_thickness: self.min_border_thickness,
            border_divisor: self.border_divisor,
        };
        options.validate()?;
        Ok(options)
    }
}
