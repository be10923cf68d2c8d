//! On-disk rule definition: the subset of an alerting rule needed to validate its params.

use std::path::PathBuf;

use alertparams_core::Params;
use serde::{Deserialize, Serialize};

/// A rule definition file. Fields other than these are ignored so that full
/// rule resources can be checked as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleDefinition {
    pub name: String,
    pub rule_type_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub params: Params,
}

/// A definition together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedRule {
    pub path: PathBuf,
    pub definition: RuleDefinition,
}
