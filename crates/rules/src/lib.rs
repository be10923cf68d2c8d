//! Structural validation of alerting-rule params.
//!
//! This crate provides:
//! - Typed, strict params shapes for each modeled rule type
//! - Static schema and allowlist registries keyed by rule type
//! - Candidate ranking that reports the single most actionable error
//! - A filesystem loader for validating rule definition files offline

pub mod loader;
pub mod registry;
pub mod shapes;
pub mod validation;

pub use registry::{allowlist_for, registered_rule_types, specs_for, ParamsSchemaSpec};
pub use validation::{
    check_rule_params, format_params_validation_errors, params_schema_accepts_key,
    validate_rule_params, IssueKind, ParamsIssue, ParamsReport,
};
