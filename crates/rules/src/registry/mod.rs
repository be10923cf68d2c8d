//! Static registries of params schemas and tolerated extra keys, keyed by rule type.
//!
//! Both tables are immutable `'static` data and are iterated in declaration
//! order. Candidate order within a rule type matters: on equal rank the
//! first-registered candidate's error is reported.

use std::collections::BTreeSet;

use alertparams_core::Params;
use serde_json::Value;

use crate::shapes::*;
use crate::validation::decode::{decode_into, DecodeError};

/// One candidate params shape for a rule type.
#[derive(Clone, Copy)]
pub struct ParamsSchemaSpec {
    /// Short identifier used in logs and listings.
    pub name: &'static str,
    /// Keys that must be present after a successful structural decode.
    pub required_keys: &'static [&'static str],
    decode: fn(&Value) -> Result<(), DecodeError>,
}

impl ParamsSchemaSpec {
    pub const fn new(
        name: &'static str,
        required_keys: &'static [&'static str],
        decode: fn(&Value) -> Result<(), DecodeError>,
    ) -> Self {
        Self {
            name,
            required_keys,
            decode,
        }
    }

    /// Strictly decode `params` into this spec's shape.
    pub fn decode(&self, params: &Value) -> Result<(), DecodeError> {
        (self.decode)(params)
    }

    /// Required keys absent from `params`, sorted.
    pub fn missing_keys(&self, params: &Params) -> Vec<&'static str> {
        self.required_keys
            .iter()
            .copied()
            .filter(|key| !params.contains_key(*key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl std::fmt::Debug for ParamsSchemaSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamsSchemaSpec")
            .field("name", &self.name)
            .field("required_keys", &self.required_keys)
            .finish()
    }
}

static SCHEMA_REGISTRY: &[(&str, &[ParamsSchemaSpec])] = &[
    (
        ".index-threshold",
        &[ParamsSchemaSpec::new(
            "index_threshold",
            INDEX_THRESHOLD_REQUIRED,
            decode_into::<IndexThresholdParams>,
        )],
    ),
    (
        ".es-query",
        &[
            ParamsSchemaSpec::new(
                "es_query_kql",
                ES_QUERY_KQL_REQUIRED,
                decode_into::<EsQueryKqlParams>,
            ),
            ParamsSchemaSpec::new(
                "es_query_dsl",
                ES_QUERY_DSL_REQUIRED,
                decode_into::<EsQueryDslParams>,
            ),
            ParamsSchemaSpec::new(
                "es_query_esql",
                ES_QUERY_ESQL_REQUIRED,
                decode_into::<EsQueryEsqlParams>,
            ),
        ],
    ),
    (
        "slo.rules.burnRate",
        &[ParamsSchemaSpec::new(
            "slo_burn_rate",
            SLO_BURN_RATE_REQUIRED,
            decode_into::<SloBurnRateParams>,
        )],
    ),
    (
        "apm.anomaly",
        &[ParamsSchemaSpec::new(
            "apm_anomaly",
            APM_ANOMALY_REQUIRED,
            decode_into::<ApmAnomalyParams>,
        )],
    ),
    (
        "apm.error_rate",
        &[ParamsSchemaSpec::new(
            "apm_error_count",
            APM_ERROR_COUNT_REQUIRED,
            decode_into::<ApmErrorCountParams>,
        )],
    ),
    (
        "apm.transaction_error_rate",
        &[ParamsSchemaSpec::new(
            "apm_transaction_error_rate",
            APM_TRANSACTION_ERROR_RATE_REQUIRED,
            decode_into::<ApmTransactionErrorRateParams>,
        )],
    ),
    (
        "apm.transaction_duration",
        &[ParamsSchemaSpec::new(
            "apm_transaction_duration",
            APM_TRANSACTION_DURATION_REQUIRED,
            decode_into::<ApmTransactionDurationParams>,
        )],
    ),
    (
        "xpack.ml.anomaly_detection_alert",
        &[ParamsSchemaSpec::new(
            "ml_anomaly_detection",
            ML_ANOMALY_DETECTION_REQUIRED,
            decode_into::<MlAnomalyDetectionParams>,
        )],
    ),
    (
        "metrics.alert.threshold",
        &[ParamsSchemaSpec::new(
            "metric_threshold",
            METRIC_THRESHOLD_REQUIRED,
            decode_into::<MetricThresholdParams>,
        )],
    ),
    (
        "metrics.alert.inventory.threshold",
        &[ParamsSchemaSpec::new(
            "inventory_threshold",
            INVENTORY_THRESHOLD_REQUIRED,
            decode_into::<InventoryThresholdParams>,
        )],
    ),
];

/// Keys the alerting API accepts that the shapes above do not model yet.
/// An entry must be removed once its rule type's shapes declare the key.
static ALLOWLIST_REGISTRY: &[(&str, &[&str])] = &[
    ("apm.anomaly", &["anomalyDetectorTypes"]),
    ("xpack.ml.anomaly_detection_alert", &["kqlQueryString"]),
    ("slo.rules.burnRate", &["dependencies"]),
    ("metrics.alert.threshold", &["filterQueryText"]),
];

/// Candidate schemas for `rule_type`, in registration order. Empty when unmodeled.
pub fn specs_for(rule_type: &str) -> &'static [ParamsSchemaSpec] {
    SCHEMA_REGISTRY
        .iter()
        .find(|(id, _)| *id == rule_type)
        .map(|(_, specs)| *specs)
        .unwrap_or(&[])
}

/// Extra keys tolerated for `rule_type`. Empty when none.
pub fn allowlist_for(rule_type: &str) -> &'static [&'static str] {
    ALLOWLIST_REGISTRY
        .iter()
        .find(|(id, _)| *id == rule_type)
        .map(|(_, keys)| *keys)
        .unwrap_or(&[])
}

/// Every rule type with registered schemas, in registration order.
pub fn registered_rule_types() -> impl Iterator<Item = &'static str> {
    SCHEMA_REGISTRY.iter().map(|(id, _)| *id)
}

/// Every rule type with allowlisted keys, in registration order.
pub fn allowlisted_rule_types() -> impl Iterator<Item = &'static str> {
    ALLOWLIST_REGISTRY.iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_rule_type_has_no_specs() {
        assert!(specs_for("custom.rule.type").is_empty());
        assert!(allowlist_for("custom.rule.type").is_empty());
    }

    #[test]
    fn es_query_candidates_are_ordered() {
        let names: Vec<_> = specs_for(".es-query").iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["es_query_kql", "es_query_dsl", "es_query_esql"]);
    }

    #[test]
    fn rule_types_are_unique() {
        let all: Vec<_> = registered_rule_types().collect();
        let unique: BTreeSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());

        let allowlisted: Vec<_> = allowlisted_rule_types().collect();
        let unique: BTreeSet<_> = allowlisted.iter().collect();
        assert_eq!(allowlisted.len(), unique.len());
    }

    #[test]
    fn allowlisted_rule_types_are_registered() {
        for rule_type in allowlisted_rule_types() {
            assert!(
                !specs_for(rule_type).is_empty(),
                "allowlist entry for unregistered rule type {rule_type}"
            );
        }
    }

    #[test]
    fn missing_keys_are_sorted() {
        let spec = &specs_for(".index-threshold")[0];
        let params = json!({ "timeField": "@timestamp", "index": ["logs-*"] });
        let params = params.as_object().unwrap();
        assert_eq!(
            spec.missing_keys(params),
            vec!["threshold", "thresholdComparator", "timeWindowSize", "timeWindowUnit"]
        );
    }

    #[test]
    fn null_counts_as_present() {
        let spec = &specs_for("slo.rules.burnRate")[0];
        let params = json!({ "sloId": null, "windows": [] });
        assert!(spec.missing_keys(params.as_object().unwrap()).is_empty());
    }
}
