//! Tracing setup for hosts that want to watch class builds.
//!
//! The model crate only emits `tracing` spans and events (`build_class`
//! spans, borrowed and dropped members, capability mismatches, registry
//! claims). Installing a subscriber is left to the host; `init_tracing`
//! does it from the environment:
//!
//! - `CLASSFORGE_LOG` (falling back to `RUST_LOG`): an `EnvFilter` directive
//! - `CLASSFORGE_LOG_FORMAT`: `text` (default), `tree` or `json`
//!
//! ```bash
//! CLASSFORGE_LOG=classforge_model=debug CLASSFORGE_LOG_FORMAT=tree cargo bench
//! CLASSFORGE_LOG="classforge_model::conformance=trace" cargo test
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Where build traces go and how much of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingSettings {
    /// `EnvFilter` directives. `None` leaves tracing off.
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl TracingSettings {
    /// Reads `CLASSFORGE_LOG`, `RUST_LOG` and `CLASSFORGE_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("CLASSFORGE_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var("CLASSFORGE_LOG_FORMAT").ok(),
        )
    }

    fn from_vars(own: Option<String>, rust_log: Option<String>, format: Option<String>) -> Self {
        Self {
            filter: own.or(rust_log),
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
        }
    }
}

/// Installs the global subscriber described by the environment.
///
/// Returns `Ok(false)` when neither `CLASSFORGE_LOG` nor `RUST_LOG` is set,
/// `Ok(true)` once a subscriber is installed, and an error when the host
/// already installed one.
pub fn init_tracing() -> Result<bool, TryInitError> {
    try_init_tracing(&TracingSettings::from_env())
}

/// Like `init_tracing`, with explicit settings. Output goes to stderr.
pub fn try_init_tracing(settings: &TracingSettings) -> Result<bool, TryInitError> {
    let Some(directives) = settings.filter.as_deref() else {
        return Ok(false);
    };
    let filter = EnvFilter::builder().parse_lossy(directives);

    match settings.format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init()?;
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()?;
        }
        LogFormat::Text => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish()
                .try_init()?;
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("xml"), LogFormat::Text);
    }

    #[test]
    fn test_settings_prefer_classforge_log() {
        let settings = TracingSettings::from_vars(
            Some("classforge_model=trace".to_string()),
            Some("warn".to_string()),
            Some("tree".to_string()),
        );
        assert_eq!(settings.filter.as_deref(), Some("classforge_model=trace"));
        assert_eq!(settings.format, LogFormat::Tree);

        let settings = TracingSettings::from_vars(None, Some("warn".to_string()), None);
        assert_eq!(settings.filter.as_deref(), Some("warn"));
        assert_eq!(settings.format, LogFormat::Text);

        assert_eq!(TracingSettings::from_vars(None, None, None), TracingSettings::default());
    }

    #[test]
    fn test_disabled_settings_install_nothing() {
        assert!(!try_init_tracing(&TracingSettings::default()).unwrap());
    }

    // The only test in this binary that installs a global subscriber.
    #[test]
    fn test_installs_once_then_reports_existing_subscriber() {
        let settings = TracingSettings {
            filter: Some("classforge_model=debug".to_string()),
            format: LogFormat::Tree,
        };
        assert!(try_init_tracing(&settings).unwrap());

        crate::define_class(crate::ClassDescriptor::new().name("Traced")).unwrap();

        assert!(try_init_tracing(&settings).is_err());
        assert!(
            try_init_tracing(&TracingSettings {
                format: LogFormat::Json,
                ..settings
            })
            .is_err()
        );
    }
}
