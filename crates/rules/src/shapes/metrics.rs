//! Infrastructure metrics rule params.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single field name or a list of field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GroupBy {
    One(String),
    Many(Vec<String>),
}

/// `metrics.alert.threshold`
///
/// Criteria entries vary by aggregation, so only their object shape is checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetricThresholdParams {
    pub criteria: Option<Vec<Map<String, Value>>>,
    pub group_by: Option<GroupBy>,
    pub filter_query: Option<String>,
    pub source_id: Option<String>,
    pub alert_on_no_data: Option<bool>,
    pub alert_on_group_disappear: Option<bool>,
}

pub const METRIC_THRESHOLD_REQUIRED: &[&str] = &["criteria"];

/// `metrics.alert.inventory.threshold`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InventoryThresholdParams {
    pub criteria: Option<Vec<Map<String, Value>>>,
    pub node_type: Option<String>,
    pub filter_query: Option<String>,
    pub filter_query_text: Option<String>,
    pub source_id: Option<String>,
    pub alert_on_no_data: Option<bool>,
}

pub const INVENTORY_THRESHOLD_REQUIRED: &[&str] = &["criteria", "nodeType"];
