pub mod config;
pub mod error;
pub mod params;

pub use config::{Config, OutputFormat};
pub use error::*;
pub use params::*;
