//! `.es-query` params: three mutually exclusive query shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field copied from matched documents into alert context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SourceField {
    pub label: Option<String>,
    pub search_path: Option<String>,
}

/// KQL / data-view shape (`searchType: searchSource`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EsQueryKqlParams {
    pub search_type: Option<String>,
    /// Serialized search source. Its contents are owned by the data view, not validated here.
    pub search_configuration: Option<Map<String, Value>>,
    pub size: Option<f64>,
    pub threshold: Option<Vec<f64>>,
    pub threshold_comparator: Option<String>,
    pub time_window_size: Option<f64>,
    pub time_window_unit: Option<String>,
    pub time_field: Option<String>,
    pub agg_field: Option<String>,
    pub agg_type: Option<String>,
    pub exclude_hits_from_previous_run: Option<bool>,
    pub group_by: Option<String>,
    pub term_field: Option<String>,
    pub term_size: Option<f64>,
    pub source_fields: Option<Vec<SourceField>>,
}

pub const ES_QUERY_KQL_REQUIRED: &[&str] = &[
    "searchType",
    "searchConfiguration",
    "size",
    "threshold",
    "thresholdComparator",
    "timeWindowSize",
    "timeWindowUnit",
];

/// Query DSL shape (`searchType: esQuery`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EsQueryDslParams {
    pub search_type: Option<String>,
    /// Query DSL serialized as a JSON string.
    pub es_query: Option<String>,
    pub index: Option<Vec<String>>,
    pub time_field: Option<String>,
    pub size: Option<f64>,
    pub threshold: Option<Vec<f64>>,
    pub threshold_comparator: Option<String>,
    pub time_window_size: Option<f64>,
    pub time_window_unit: Option<String>,
    pub agg_field: Option<String>,
    pub agg_type: Option<String>,
    pub exclude_hits_from_previous_run: Option<bool>,
    pub group_by: Option<String>,
    pub term_field: Option<String>,
    pub term_size: Option<f64>,
    pub source_fields: Option<Vec<SourceField>>,
}

pub const ES_QUERY_DSL_REQUIRED: &[&str] = &[
    "esQuery",
    "index",
    "size",
    "threshold",
    "thresholdComparator",
    "timeField",
    "timeWindowSize",
    "timeWindowUnit",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EsqlQuery {
    pub esql: Option<String>,
}

/// ES|QL shape (`searchType: esqlQuery`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EsQueryEsqlParams {
    pub search_type: Option<String>,
    pub esql_query: Option<EsqlQuery>,
    pub size: Option<f64>,
    pub threshold: Option<Vec<f64>>,
    pub threshold_comparator: Option<String>,
    pub time_field: Option<String>,
    pub time_window_size: Option<f64>,
    pub time_window_unit: Option<String>,
    pub exclude_hits_from_previous_run: Option<bool>,
    pub group_by: Option<String>,
}

pub const ES_QUERY_ESQL_REQUIRED: &[&str] = &[
    "esqlQuery",
    "searchType",
    "size",
    "threshold",
    "thresholdComparator",
    "timeField",
    "timeWindowSize",
    "timeWindowUnit",
];
