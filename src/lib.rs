//! Declarative runtime class definitions.
//!
//! This crate ties the classforge crates together:
//! - Class building, instances and the registry (`classforge-model`)
//! - Diagnostics and reserved names (`classforge-common`)
//! - Options loading from JSON (`config`)
//! - Tracing subscriber setup (`tracing_config`)

pub mod config;
pub mod tracing_config;

pub use classforge_common::{Diagnostic, DiagnosticCategory, RESERVED_MEMBER_NAMES};
pub use classforge_model::*;
pub use config::{ClassforgeConfig, load_options, parse_options};
pub use tracing_config::{LogFormat, TracingSettings, init_tracing, try_init_tracing};
