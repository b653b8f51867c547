use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::event::InboundRequest;

/// Set by AWS Lambda inside a function's execution environment.
pub const RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";
/// Path to a JSON event file used in local mode.
pub const EVENT_PATH_VAR: &str = "TEST_FUNCTION_EVENT";
pub const DEFAULT_LOG_FILTER: &str = "function_core=info,bootstrap=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Lambda,
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub mode: RuntimeMode,
    pub event_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Local,
            event_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mode = match get(RUNTIME_API_VAR) {
            Some(_) => RuntimeMode::Lambda,
            None => RuntimeMode::Local,
        };

        Self {
            mode,
            event_path: get(EVENT_PATH_VAR).map(PathBuf::from),
            ..Self::default()
        }
    }
}

/// Loads the local-mode event from `path`, or from stdin when no path is set.
pub fn load_event(path: Option<&Path>) -> anyhow::Result<InboundRequest> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read event from stdin")?,
    };

    parse_event(&content)
}

/// Parses a gateway event. Blank input is treated as an empty event.
pub fn parse_event(content: &str) -> anyhow::Result<InboundRequest> {
    if content.trim().is_empty() {
        return Ok(InboundRequest::default());
    }
    serde_json::from_str(content).context("Event is not a valid API Gateway proxy event")
}
