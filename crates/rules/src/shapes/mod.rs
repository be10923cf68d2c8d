//! Typed params shapes for each modeled rule type.
//!
//! Every shape mirrors one variant of the alerting API's rule-type-specific
//! `params` object. Shapes are strict (`deny_unknown_fields`, nested objects
//! included) and every field is optional so that presence is checked
//! separately from structure: a `null` value decodes as `None` for any field.
//!
//! Numbers are `f64` throughout because params arrive as decoded JSON.

mod apm;
mod es_query;
mod index_threshold;
mod metrics;
mod ml;
mod slo;

pub use apm::*;
pub use es_query::*;
pub use index_threshold::*;
pub use metrics::*;
pub use ml::*;
pub use slo::*;

#[cfg(test)]
mod tests;
