//! Configuration and constants for the aggregation pipeline.
//!
//! Filters can come from three places, in increasing priority:
//! a built-in preset, a TOML filter file, and explicit CLI patterns.

use super::error::ConfigError;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Record naming rules of the downstream results store.
// '.' is not allowed anywhere in a record name.
pub const FORBIDDEN_NAME_CHAR: char = '.';
pub const THREAD_NAME_SEPARATOR: char = '/';
pub const NAME_REPLACEMENT_CHAR: char = '_';
pub const RECORD_PATH_SEPARATOR: char = '|';

pub const COUNT_UNIT: &str = "count";
pub const TIME_UNIT: &str = "ms";
pub const AVG_SUFFIX: &str = "_avg";
pub const MAX_SUFFIX: &str = "_max";

/// Preset used when nothing else is specified
pub const DEFAULT_PRESET: &str = "all";

/// A named, built-in filter configuration
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub thread_pattern: &'static str,
    pub event_pattern: &'static str,
    pub counter_pattern: Option<&'static str>,
}

/// Built-in presets
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "all",
        description: "Every thread, event and counter",
        thread_pattern: "",
        event_pattern: "",
        counter_pattern: None,
    },
    Preset {
        name: "service_worker",
        description: "Service worker lifecycle and fetch events on the browser IO thread",
        thread_pattern: "IOThread",
        event_pattern: "(RegisterServiceWorker|\
                        UnregisterServiceWorker|\
                        ProcessAllocate|\
                        FindRegistrationForDocument|\
                        PrepareForMainResource|\
                        DispatchFetchEvent)",
        counter_pattern: None,
    },
];

/// Look up a preset by name
pub fn find_preset(name: &str) -> Result<&'static Preset, ConfigError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
}

/// Compiled filter configuration for one pipeline run
///
/// All patterns use search semantics: a name matches if the pattern
/// matches anywhere inside it.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    thread_pattern: Regex,
    event_pattern: Regex,
    counter_pattern: Option<Regex>,
}

impl FilterConfig {
    /// Compile a thread and event pattern
    pub fn new(thread_pattern: &str, event_pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            thread_pattern: compile("thread", thread_pattern)?,
            event_pattern: compile("event", event_pattern)?,
            counter_pattern: None,
        })
    }

    /// Restrict counters to those whose name matches `pattern`
    pub fn with_counter_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.counter_pattern = Some(compile("counter", pattern)?);
        Ok(self)
    }

    /// Build the filter for a built-in preset
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        FilterSpec {
            preset: Some(name.to_string()),
            ..Default::default()
        }
        .build()
    }

    pub fn thread_pattern(&self) -> &Regex {
        &self.thread_pattern
    }

    pub fn event_pattern(&self) -> &Regex {
        &self.event_pattern
    }

    pub fn counter_pattern(&self) -> Option<&Regex> {
        self.counter_pattern.as_ref()
    }

    /// Counters are included unless a counter pattern rejects them
    pub fn matches_counter(&self, name: &str) -> bool {
        self.counter_pattern
            .as_ref()
            .map_or(true, |re| re.is_match(name))
    }

    /// Source text of the patterns, for writing into result files
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            preset: None,
            thread_pattern: Some(self.thread_pattern.as_str().to_string()),
            event_pattern: Some(self.event_pattern.as_str().to_string()),
            counter_pattern: self.counter_pattern.as_ref().map(|re| re.as_str().to_string()),
        }
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern { field, source })
}

/// Uncompiled filter description, as read from TOML or the command line
///
/// Explicit patterns override the ones from `preset`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default)]
    pub thread_pattern: Option<String>,

    #[serde(default)]
    pub event_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_pattern: Option<String>,
}

impl FilterSpec {
    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: FilterSpec) -> FilterSpec {
        FilterSpec {
            preset: other.preset.or(self.preset),
            thread_pattern: other.thread_pattern.or(self.thread_pattern),
            event_pattern: other.event_pattern.or(self.event_pattern),
            counter_pattern: other.counter_pattern.or(self.counter_pattern),
        }
    }

    /// Resolve the preset and compile all patterns
    pub fn build(&self) -> Result<FilterConfig, ConfigError> {
        let preset = find_preset(self.preset.as_deref().unwrap_or(DEFAULT_PRESET))?;
        debug!("Resolving filter from preset '{}'", preset.name);

        let thread = self.thread_pattern.as_deref().unwrap_or(preset.thread_pattern);
        let event = self.event_pattern.as_deref().unwrap_or(preset.event_pattern);

        let config = FilterConfig::new(thread, event)?;
        match self.counter_pattern.as_deref().or(preset.counter_pattern) {
            Some(counter) => config.with_counter_pattern(counter),
            None => Ok(config),
        }
    }
}

/// Load a filter description from a TOML file
///
/// # Example
/// ```toml
/// preset = "service_worker"
/// thread_pattern = "IOThread"
/// counter_pattern = "^gpu"
/// ```
pub fn load_filter_file(path: impl AsRef<Path>) -> Result<FilterSpec, ConfigError> {
    let path = path.as_ref();
    debug!("Loading filter file: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let spec: FilterSpec = toml::from_str(&contents)?;
    Ok(spec)
}
