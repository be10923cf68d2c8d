//! Structural validation of rule params against the registered candidate schemas.
//!
//! For a rule type, every candidate schema is tried in registration order.
//! Each attempt ends in one of three ranks (decode failed, decoded but
//! missing required keys, valid) and only the best-ranked error is reported,
//! so union-shaped rule types surface the complaint closest to the input.
//! Rule types without registered schemas are passed through untouched.

mod candidate;
pub(crate) mod decode;

pub(crate) mod fuzzy;

use alertparams_core::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::registry::{allowlist_for, specs_for, ParamsSchemaSpec};

pub use candidate::{CandidateOutcome, CandidateRank, ValidationCandidate};
pub use decode::DecodeError;

/// Prefix for type mismatches reported by the structural decoder.
pub const SCHEMA_MISMATCH_PREFIX: &str = "params do not match expected generated schema: ";
/// Prefix for required keys absent after a successful decode.
pub const MISSING_KEYS_PREFIX: &str = "missing required params keys: ";

// ── Result types ────────────────────────────────────────────────────

/// Failure category of a params issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnexpectedKey,
    MissingRequiredKey,
    TypeMismatch,
}

/// A single structural problem with a params object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsIssue {
    pub kind: IssueKind,
    pub message: String,
    /// Optional "did you mean …?" hint for unexpected keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ParamsIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }
}

/// Validation outcome for one params object. At most one issue per rule type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsReport {
    pub rule_type: String,
    pub valid: bool,
    pub issues: Vec<ParamsIssue>,
}

impl ParamsReport {
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.message.clone()).collect()
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate `params` for `rule_type`, returning the retained error messages.
///
/// An empty result means the params are structurally valid (or the rule type
/// is not modeled).
pub fn validate_rule_params(rule_type: &str, params: &Params) -> Vec<String> {
    check_rule_params(rule_type, params).messages()
}

/// Validate `params` for `rule_type`, returning a structured report.
pub fn check_rule_params(rule_type: &str, params: &Params) -> ParamsReport {
    let specs = specs_for(rule_type);
    if specs.is_empty() {
        trace!(rule_type, "no params schema registered, skipping validation");
        return ParamsReport {
            rule_type: rule_type.to_string(),
            valid: true,
            issues: Vec::new(),
        };
    }

    let decodable = without_allowlisted(params, allowlist_for(rule_type));
    let mut candidate = ValidationCandidate::new();
    for spec in specs {
        let outcome = evaluate(spec, &decodable, params);
        debug!(rule_type, schema = spec.name, rank = ?outcome.rank(), "evaluated params schema");
        candidate.consider(outcome);
    }

    let issue = candidate.into_issue();
    ParamsReport {
        rule_type: rule_type.to_string(),
        valid: issue.is_none(),
        issues: issue.into_iter().collect(),
    }
}

/// Join messages for display, one per line, in order.
pub fn format_params_validation_errors(errs: &[String]) -> String {
    errs.join("\n")
}

/// Whether any of `specs` recognizes `key` at the top level.
///
/// Decodes `{key: null}` against each spec. A type mismatch still counts as
/// accepted since the key itself was recognized.
pub fn params_schema_accepts_key(specs: &[ParamsSchemaSpec], key: &str) -> bool {
    let mut single = Params::new();
    single.insert(key.to_string(), Value::Null);
    let single = Value::Object(single);

    specs.iter().any(|spec| match spec.decode(&single) {
        Ok(()) => true,
        Err(e) => !e.is_unknown_field(),
    })
}

// ── Candidate evaluation ────────────────────────────────────────────

fn without_allowlisted(params: &Params, allowlist: &[&str]) -> Value {
    let mut object = params.clone();
    for key in allowlist {
        object.remove(*key);
    }
    Value::Object(object)
}

fn evaluate(spec: &ParamsSchemaSpec, decodable: &Value, params: &Params) -> CandidateOutcome {
    match spec.decode(decodable) {
        Err(err) => {
            let message = err.to_string();
            match err {
                DecodeError::UnknownField { key, expected } => {
                    let suggestion = fuzzy::fuzzy_match(&key, &expected)
                        .map(|name| format!("did you mean \"{name}\"?"));
                    CandidateOutcome::DecodeFailed(
                        ParamsIssue::new(IssueKind::UnexpectedKey, message)
                            .with_suggestion(suggestion),
                    )
                }
                DecodeError::Mismatch(_) => CandidateOutcome::DecodeFailed(ParamsIssue::new(
                    IssueKind::TypeMismatch,
                    format!("{SCHEMA_MISMATCH_PREFIX}{message}"),
                )),
            }
        }
        Ok(()) => {
            let missing = spec.missing_keys(params);
            if missing.is_empty() {
                CandidateOutcome::Valid
            } else {
                CandidateOutcome::DecodedMissingKeys(ParamsIssue::new(
                    IssueKind::MissingRequiredKey,
                    format!("{MISSING_KEYS_PREFIX}{}", missing.join(", ")),
                ))
            }
        }
    }
}
