//! Configuration loading.
//!
//! All run-time knobs live in one TOML file and are loaded into an immutable
//! [`Config`] exactly once at startup. The resolvers, the graph builder, and
//! the emitter all borrow the same `Config`; nothing mutates it afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::color::Color;
use incgraph_error::{Error, Result};

/// Granularity of the collapsed dependency space, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Granularity {
    /// One node per source file.
    #[default]
    Classes,
    /// Collapse files into their containing directory.
    Modules,
    /// Reserved coarser level. Currently collapses exactly like `Modules`;
    /// a deeper truncation has never been defined.
    TopLevelModules,
}

impl Granularity {
    /// Convert from the numeric config value, clamped into range.
    pub fn from_number(n: i64) -> Self {
        match n {
            n if n <= 0 => Self::Classes,
            1 => Self::Modules,
            _ => Self::TopLevelModules,
        }
    }

    /// Convert to the numeric config value.
    pub fn as_number(&self) -> i64 {
        match self {
            Self::Classes => 0,
            Self::Modules => 1,
            Self::TopLevelModules => 2,
        }
    }
}

/// On-disk shape of the configuration file. Every key is optional;
/// missing keys and sections behave as empty tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ConfigFile {
    file_ignore_pattern: String,
    library_ignore_list: Vec<String>,
    file_patterns: Vec<String>,
    granularity: i64,
    prefixed_headers: BTreeMap<String, String>,
    other_known_headers: BTreeMap<String, Vec<String>>,
    coloring: BTreeMap<String, String>,
}

/// Immutable run configuration.
#[derive(Debug, Default)]
pub struct Config {
    file_ignore: Option<Regex>,
    /// Node names suppressed from styled output.
    pub library_ignore: BTreeSet<String>,
    /// Filename globs selecting scan candidates; empty selects every file.
    pub file_patterns: Vec<String>,
    pub granularity: Granularity,
    /// First path segment of an include -> library display name.
    pub prefixed_libraries: BTreeMap<String, String>,
    /// Exact include text -> library display name.
    pub known_libraries: BTreeMap<String, String>,
    /// Seed node or library name -> color.
    pub coloring: BTreeMap<String, Color>,
}

impl Config {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("config::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::parse(&text)
            .map_err(|err| err.with_context("path", path.display().to_string()))
    }

    /// Parse the configuration from TOML text.
    pub fn parse(text: &str) -> Result<Config> {
        let raw: ConfigFile = toml::from_str(text).map_err(|err| {
            Error::config_invalid("configuration is not valid TOML")
                .with_operation("config::parse")
                .set_source(err)
        })?;

        let file_ignore = if raw.file_ignore_pattern.is_empty() {
            // An absent or empty pattern ignores nothing.
            None
        } else {
            let regex = Regex::new(&raw.file_ignore_pattern).map_err(|err| {
                Error::pattern_invalid(&raw.file_ignore_pattern, "invalid FileIgnorePattern")
                    .with_operation("config::parse")
                    .set_source(err)
            })?;
            Some(regex)
        };

        let mut prefixed_libraries = BTreeMap::new();
        for (prefix, display) in raw.prefixed_headers {
            // An empty display name means the prefix doubles as the library name.
            let display = if display.is_empty() {
                prefix.clone()
            } else {
                display
            };
            prefixed_libraries.insert(prefix, display);
        }

        let mut known_libraries = BTreeMap::new();
        for (display, headers) in raw.other_known_headers {
            for header in headers {
                known_libraries.insert(header.trim().to_string(), display.clone());
            }
        }

        let mut coloring = BTreeMap::new();
        for (seed, value) in raw.coloring {
            let color = Color::parse(&value)
                .map_err(|err| err.with_context("seed", seed.clone()))?;
            coloring.insert(seed, color);
        }

        Ok(Config {
            file_ignore,
            library_ignore: raw.library_ignore_list.into_iter().collect(),
            file_patterns: raw.file_patterns,
            granularity: Granularity::from_number(raw.granularity),
            prefixed_libraries,
            known_libraries,
            coloring,
        })
    }

    /// Whether a relative source path matches `FileIgnorePattern`.
    pub fn is_path_ignored(&self, path: &str) -> bool {
        self.file_ignore
            .as_ref()
            .is_some_and(|regex| regex.is_match(path))
    }

    /// Whether a node is suppressed from styled output.
    pub fn is_library_ignored(&self, node: &str) -> bool {
        self.library_ignore.contains(node)
    }

    /// Union of all configured library display names.
    pub fn library_names(&self) -> BTreeSet<&str> {
        self.prefixed_libraries
            .values()
            .chain(self.known_libraries.values())
            .map(String::as_str)
            .collect()
    }
}
