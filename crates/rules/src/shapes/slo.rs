//! `slo.rules.burnRate` params.

use serde::{Deserialize, Serialize};

/// A lookback window, e.g. `{ "value": 1, "unit": "h" }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WindowDuration {
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// One burn-rate window definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BurnRateWindow {
    pub id: Option<String>,
    pub burn_rate_threshold: Option<f64>,
    pub max_burn_rate_threshold: Option<f64>,
    pub long_window: Option<WindowDuration>,
    pub short_window: Option<WindowDuration>,
    pub action_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SloBurnRateParams {
    pub slo_id: Option<String>,
    pub windows: Option<Vec<BurnRateWindow>>,
}

pub const SLO_BURN_RATE_REQUIRED: &[&str] = &["sloId", "windows"];
