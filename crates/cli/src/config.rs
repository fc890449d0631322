//! Environment-driven configuration for the shell binary.

use stockroom_inventory::{FailedCommandPolicy, ServiceConfig};
use stockroom_observability::LogFormat;

use crate::render::OutputFormat;

pub const ENV_INITIAL_CAPACITY: &str = "STOCKROOM_INITIAL_CAPACITY";
pub const ENV_SEED_DEMO: &str = "STOCKROOM_SEED_DEMO";
pub const ENV_KEEP_FAILED_SNAPSHOTS: &str = "STOCKROOM_KEEP_FAILED_SNAPSHOTS";
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "STOCKROOM_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub service: ServiceConfig,
    /// Load the demo catalogue into the initial snapshot. On by default.
    pub seed_demo: bool,
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            seed_demo: true,
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Read the process environment.
    ///
    /// Tracing is not up yet when this runs (the log format is part of the
    /// configuration), so problems come back as warnings for the caller to log.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults;
    /// unparsable values keep their defaults and produce a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(ENV_INITIAL_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity >= 1 => config.service.initial_capacity = capacity,
                _ => warnings.push(format!(
                    "{ENV_INITIAL_CAPACITY}={raw:?} is not a positive integer; using {}",
                    config.service.initial_capacity
                )),
            }
        }

        if let Some(raw) = lookup(ENV_SEED_DEMO) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_demo = flag,
                None => warnings.push(format!("{ENV_SEED_DEMO}={raw:?} is not a boolean; ignoring")),
            }
        }

        if let Some(raw) = lookup(ENV_KEEP_FAILED_SNAPSHOTS) {
            match parse_flag(&raw) {
                Some(true) => config.service.failed_command_policy = FailedCommandPolicy::KeepSnapshot,
                Some(false) => config.service.failed_command_policy = FailedCommandPolicy::Discard,
                None => warnings.push(format!(
                    "{ENV_KEEP_FAILED_SNAPSHOTS}={raw:?} is not a boolean; ignoring"
                )),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => warnings.push(format!("{ENV_LOG_FORMAT}: {e}")),
            }
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse() {
                Ok(output) => config.output = output,
                Err(e) => warnings.push(format!("{ENV_OUTPUT}: {e}")),
            }
        }

        (config, warnings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
