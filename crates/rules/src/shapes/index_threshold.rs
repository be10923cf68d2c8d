//! `.index-threshold` params.

use serde::{Deserialize, Serialize};

/// Params for the `.index-threshold` rule type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexThresholdParams {
    pub index: Option<Vec<String>>,
    pub threshold: Option<Vec<f64>>,
    pub threshold_comparator: Option<String>,
    pub time_field: Option<String>,
    pub time_window_size: Option<f64>,
    pub time_window_unit: Option<String>,
    pub agg_field: Option<String>,
    pub agg_type: Option<String>,
    pub filter_kuery: Option<String>,
    pub group_by: Option<String>,
    pub term_field: Option<String>,
    pub term_size: Option<f64>,
}

pub const INDEX_THRESHOLD_REQUIRED: &[&str] = &[
    "index",
    "threshold",
    "thresholdComparator",
    "timeField",
    "timeWindowSize",
    "timeWindowUnit",
];
