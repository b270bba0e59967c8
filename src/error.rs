use miette::Diagnostic;
use thiserror::Error;

use crate::types::Coordinate;

/// Main error type for repix operations
#[derive(Error, Diagnostic, Debug)]
pub enum RepixError {
    #[error("IO error: {0}")]
    #[diagnostic(code(repix::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(repix::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(repix::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Pixel map has no entries")]
    #[diagnostic(
        code(repix::empty),
        help("Add at least one \"x,y\": [r, g, b] entry under \"pixels\"")
    )]
    EmptyMap,

    #[error("Canvas {width}x{height} is too large to fit within {max_dimension} pixels")]
    #[diagnostic(
        code(repix::scale),
        help("Each side of the pixel map must be at most the maximum dimension")
    )]
    ScaleTooSmall {
        width: u32,
        height: u32,
        max_dimension: u32,
    },

    #[error("Coordinate {coordinate} lies outside the addressable canvas")]
    #[diagnostic(
        code(repix::range),
        help("Coordinate components must be below 4294967295")
    )]
    OutOfRange { coordinate: Coordinate },

    #[error("Invalid colour at {coordinate}: {message}")]
    #[diagnostic(
        code(repix::colour),
        help("Colours are [r, g, b] arrays of integers between 0 and 255")
    )]
    InvalidColour {
        coordinate: Coordinate,
        message: String,
    },

    #[error("Failed to render {name}")]
    #[diagnostic(code(repix::input))]
    Input {
        name: String,
        source: Box<RepixError>,
    },

    #[error("{failed} of {total} inputs failed to render")]
    #[diagnostic(code(repix::batch))]
    Batch { failed: usize, total: usize },

    #[error("Config error: {message}")]
    #[diagnostic(code(repix::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl RepixError {
    /// Attach the input file name to an error raised while rendering it.
    pub fn in_input(self, name: impl Into<String>) -> Self {
        RepixError::Input {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepixError>;
