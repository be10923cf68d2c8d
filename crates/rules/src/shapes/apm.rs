//! APM rule params: anomaly, error count, failed transaction rate, latency.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `apm.anomaly`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApmAnomalyParams {
    pub service_name: Option<String>,
    pub transaction_type: Option<String>,
    pub environment: Option<String>,
    pub window_size: Option<f64>,
    pub window_unit: Option<String>,
    pub anomaly_severity_type: Option<String>,
}

pub const APM_ANOMALY_REQUIRED: &[&str] = &[
    "anomalySeverityType",
    "environment",
    "windowSize",
    "windowUnit",
];

/// `apm.error_rate`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApmErrorCountParams {
    pub service_name: Option<String>,
    pub environment: Option<String>,
    pub threshold: Option<f64>,
    pub window_size: Option<f64>,
    pub window_unit: Option<String>,
    pub error_grouping_key: Option<String>,
    pub group_by: Option<Vec<String>>,
    pub use_kql_filter: Option<bool>,
    pub search_configuration: Option<Map<String, Value>>,
}

pub const APM_ERROR_COUNT_REQUIRED: &[&str] = &["environment", "threshold", "windowSize", "windowUnit"];

/// `apm.transaction_error_rate`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApmTransactionErrorRateParams {
    pub service_name: Option<String>,
    pub transaction_type: Option<String>,
    pub transaction_name: Option<String>,
    pub environment: Option<String>,
    pub threshold: Option<f64>,
    pub window_size: Option<f64>,
    pub window_unit: Option<String>,
    pub group_by: Option<Vec<String>>,
    pub use_kql_filter: Option<bool>,
    pub search_configuration: Option<Map<String, Value>>,
}

pub const APM_TRANSACTION_ERROR_RATE_REQUIRED: &[&str] =
    &["environment", "threshold", "windowSize", "windowUnit"];

/// `apm.transaction_duration`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApmTransactionDurationParams {
    pub service_name: Option<String>,
    pub transaction_type: Option<String>,
    pub transaction_name: Option<String>,
    pub environment: Option<String>,
    pub threshold: Option<f64>,
    pub window_size: Option<f64>,
    pub window_unit: Option<String>,
    pub aggregation_type: Option<String>,
    pub group_by: Option<Vec<String>>,
    pub use_kql_filter: Option<bool>,
    pub search_configuration: Option<Map<String, Value>>,
}

pub const APM_TRANSACTION_DURATION_REQUIRED: &[&str] = &[
    "aggregationType",
    "environment",
    "threshold",
    "windowSize",
    "windowUnit",
];
