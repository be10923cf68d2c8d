use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

// ── Output format ─────────────────────────────────────────────

/// How validation reports are rendered by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: '{}'", other)),
        }
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    /// Directory scanned for rule definition files.
    pub rules_dir: PathBuf,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub output: OutputFormat,
    /// Set when `ALERTPARAMS_OUTPUT` could not be parsed and `output` fell back to text.
    /// Reported by [`Config::log_summary`] once logging is up.
    #[serde(skip)]
    pub output_error: Option<String>,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `ALERTPARAMS_PROFILE`. When set (e.g. `CI`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("ALERTPARAMS_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();

        let (output, output_error) = match profiled_env_or(p, "ALERTPARAMS_OUTPUT", "text").parse() {
            Ok(output) => (output, None),
            Err(e) => (OutputFormat::Text, Some(e)),
        };

        Self {
            profile: p.to_string(),
            rules_dir: PathBuf::from(profiled_env_or(p, "ALERTPARAMS_RULES_DIR", "rules")),
            log_filter: profiled_env_or(p, "ALERTPARAMS_LOG", "warn"),
            output,
            output_error,
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        if let Some(error) = &self.output_error {
            tracing::warn!(error = %error, "falling back to text output");
        }
        tracing::debug!(
            profile = %self.profile_label(),
            rules_dir = %self.rules_dir.display(),
            output = %self.output,
            "config loaded"
        );
    }
}
