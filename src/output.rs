//! Status lines for the repix CLI.
//!
//! Every line is a right-aligned verb followed by a message, written to
//! stderr so stdout stays free for `info --json`.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const VERB_COLUMN: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work done or in progress.
    Progress,
    /// Facts about an input.
    Note,
    Caution,
    Failure,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Caution => "\x1b[1;33m",
            Tone::Failure => "\x1b[1;31m",
        }
    }
}

/// Lay out one status line, without the trailing newline.
///
/// `None` leaves the verb uncoloured.
pub fn format_line(tone: Option<Tone>, verb: &str, message: &str) -> String {
    let verb = format!("{:>width$}", verb, width = VERB_COLUMN);
    match tone {
        Some(tone) => format!("{}{}\x1b[0m {}", tone.ansi(), verb, message),
        None => format!("{} {}", verb, message),
    }
}

/// Writes status lines to stderr, coloured when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn line(&self, tone: Tone, verb: &str, message: &str) {
        let text = format_line(self.color.then_some(tone), verb, message);
        let _ = writeln!(io::stderr().lock(), "{}", text);
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Caution, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Failure, verb, message);
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `count(1, "image")` is "1 image"; any other count takes an "s".
pub fn count(n: usize, noun: &str) -> String {
    match n {
        1 => format!("1 {}", noun),
        _ => format!("{} {}s", n, noun),
    }
}

/// Show `path` relative to the working directory when it lies inside it.
pub fn relative(path: &Path) -> String {
    let inside = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match inside {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
