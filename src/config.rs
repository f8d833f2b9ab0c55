//! Run configuration.
//!
//! A [`Config`] can be loaded from a JSON file; every field is optional there
//! and falls back to its default. Command-line flags are applied on top by the
//! binary.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PipeError, Result};
use crate::graph::{Traversal, WalkOptions};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default root program.
pub const DEFAULT_ROOT: &str = "0";

/// How the summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Edge trace, component lines and a plain-text summary.
    #[default]
    Text,
    /// A single JSON document; no trace lines are written.
    Json,
}

impl FromStr for OutputFormat {
    type Err = PipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(PipeError::InvalidChoice {
                what: "output format",
                value: other.to_owned(),
                expected: "text, json",
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Adjacency-list file to read.
    pub input: PathBuf,
    /// Program whose component is reported separately.
    pub root: String,
    /// Depth-first strategy.
    pub traversal: Traversal,
    /// Print one line per followed edge (text output only).
    pub trace: bool,
    /// Add missing reverse edges before walking.
    pub symmetrize: bool,
    /// Summary format.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            root: DEFAULT_ROOT.to_owned(),
            traversal: Traversal::default(),
            trace: true,
            symmetrize: false,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads a JSON config file.
    ///
    /// # Errors
    /// Returns [`PipeError::ConfigIo`] if the file cannot be read and
    /// [`PipeError::Config`] if it is not a valid config document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PipeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| PipeError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Options passed to every walk.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            traversal: self.traversal,
        }
    }

    /// Whether edge trace lines should be written.
    pub fn prints_trace(&self) -> bool {
        self.trace && self.format == OutputFormat::Text
    }
}
