//! Tests for params shapes.

use serde_json::json;

use super::*;

#[test]
fn parse_index_threshold_params() {
    let params: IndexThresholdParams = serde_json::from_value(json!({
        "index": ["logs-*"],
        "threshold": [1.0],
        "thresholdComparator": ">",
        "timeField": "@timestamp",
        "timeWindowSize": 5.0,
        "timeWindowUnit": "m",
        "aggType": "count",
        "groupBy": "all"
    }))
    .unwrap();

    assert_eq!(params.index, Some(vec!["logs-*".to_string()]));
    assert_eq!(params.threshold, Some(vec![1.0]));
    assert_eq!(params.time_window_unit.as_deref(), Some("m"));
    assert_eq!(params.group_by.as_deref(), Some("all"));
    assert!(params.agg_field.is_none());
}

#[test]
fn integer_numbers_decode_as_floats() {
    let params: IndexThresholdParams = serde_json::from_value(json!({
        "threshold": [10],
        "timeWindowSize": 5
    }))
    .unwrap();
    assert_eq!(params.threshold, Some(vec![10.0]));
    assert_eq!(params.time_window_size, Some(5.0));
}

#[test]
fn null_decodes_as_absent() {
    let params: EsQueryKqlParams = serde_json::from_value(json!({
        "size": null,
        "sourceFields": null
    }))
    .unwrap();
    assert!(params.size.is_none());
    assert!(params.source_fields.is_none());
}

#[test]
fn snake_case_keys_are_rejected() {
    let err = serde_json::from_value::<IndexThresholdParams>(json!({ "time_field": "@timestamp" }))
        .unwrap_err();
    assert!(err.to_string().contains("unknown field `time_field`"));
}

#[test]
fn parse_es_query_source_fields() {
    let params: EsQueryDslParams = serde_json::from_value(json!({
        "searchType": "esQuery",
        "esQuery": "{\"query\":{\"match_all\":{}}}",
        "index": ["logs-*"],
        "sourceFields": [{ "label": "host", "searchPath": "host.name" }]
    }))
    .unwrap();

    let fields = params.source_fields.unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].search_path.as_deref(), Some("host.name"));
}

#[test]
fn nested_objects_are_strict() {
    let err = serde_json::from_value::<EsQueryEsqlParams>(json!({
        "esqlQuery": { "esql": "FROM logs-*", "dialect": "v2" }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("unknown field `dialect`"));

    let err = serde_json::from_value::<SloBurnRateParams>(json!({
        "sloId": "slo-1",
        "windows": [{ "id": "w1", "longWindow": { "value": 1, "unit": "h", "tz": "UTC" } }]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("unknown field `tz`"));
}

#[test]
fn search_configuration_is_an_opaque_object() {
    let params: EsQueryKqlParams = serde_json::from_value(json!({
        "searchConfiguration": {
            "query": { "query": "host.name: *", "language": "kuery" },
            "index": "data-view-id"
        }
    }))
    .unwrap();
    assert_eq!(params.search_configuration.unwrap().len(), 2);

    assert!(serde_json::from_value::<EsQueryKqlParams>(json!({
        "searchConfiguration": "not-an-object"
    }))
    .is_err());
}

#[test]
fn parse_ml_and_metrics_params() {
    let ml: MlAnomalyDetectionParams = serde_json::from_value(json!({
        "jobSelection": { "jobIds": ["high_mean_response"] },
        "severity": 75,
        "resultType": "bucket",
        "topNBuckets": 3
    }))
    .unwrap();
    assert_eq!(ml.top_n_buckets, Some(3.0));
    assert_eq!(ml.job_selection.unwrap().group_ids, None);

    let metrics: MetricThresholdParams = serde_json::from_value(json!({
        "criteria": [{ "aggType": "avg", "metric": "system.cpu.user.pct" }],
        "groupBy": ["host.name", "service.name"]
    }))
    .unwrap();
    assert_eq!(metrics.criteria.unwrap().len(), 1);
    assert_eq!(
        metrics.group_by,
        Some(GroupBy::Many(vec!["host.name".to_string(), "service.name".to_string()]))
    );

    let metrics: MetricThresholdParams =
        serde_json::from_value(json!({ "groupBy": "host.name" })).unwrap();
    assert_eq!(metrics.group_by, Some(GroupBy::One("host.name".to_string())));
}

#[test]
fn required_key_lists_use_wire_names() {
    for required in [
        INDEX_THRESHOLD_REQUIRED,
        ES_QUERY_KQL_REQUIRED,
        ES_QUERY_DSL_REQUIRED,
        ES_QUERY_ESQL_REQUIRED,
        SLO_BURN_RATE_REQUIRED,
        ML_ANOMALY_DETECTION_REQUIRED,
    ] {
        for key in required {
            assert!(!key.contains('_'), "required key '{key}' is not camelCase");
        }
    }
}
