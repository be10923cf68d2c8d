//! `xpack.ml.anomaly_detection_alert` params.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobSelection {
    pub job_ids: Option<Vec<String>>,
    pub group_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MlAnomalyDetectionParams {
    pub job_selection: Option<JobSelection>,
    pub severity: Option<f64>,
    /// One of `bucket`, `record`, `influencer`.
    pub result_type: Option<String>,
    pub include_interim: Option<bool>,
    pub lookback_interval: Option<String>,
    pub top_n_buckets: Option<f64>,
}

pub const ML_ANOMALY_DETECTION_REQUIRED: &[&str] = &["jobSelection", "resultType", "severity"];
