//! Filesystem loader for rule definition files.
//!
//! Reads YAML or JSON rule definitions from a directory tree so their params
//! can be validated offline, before any rule is sent to the alerting API.

mod core;
mod definition;
mod error;


pub use self::core::RuleLoader;
pub use self::definition::{LoadedRule, RuleDefinition};
pub use self::error::{LoadResult, LoadStatus, LoaderError, Result};
