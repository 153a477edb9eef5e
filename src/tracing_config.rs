//! Tracing configuration for hosts embedding the annotator.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the host. This module offers the usual one, controlled by two
//! environment variables:
//!
//! - `RETYPE_LOG` (falling back to `RUST_LOG`): filter directives, e.g.
//!   `debug` or `retype_annotate::planner=debug`
//! - `RETYPE_LOG_FORMAT`: `text` (default), `tree` or `json`
//!
//! ```bash
//! # Why was a function skipped?
//! RETYPE_LOG=retype_annotate=debug RETYPE_LOG_FORMAT=tree my-host src/app.ts
//!
//! # Every node the walker visits, as JSON lines
//! RETYPE_LOG=retype_annotate::walker=trace RETYPE_LOG_FORMAT=json my-host src/app.ts
//! ```
//!
//! Nothing is installed unless one of the filter variables is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Unrecognised values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("RETYPE_LOG_FORMAT").unwrap_or_default())
    }
}

/// `RETYPE_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var("RETYPE_LOG") {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var("RUST_LOG").is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

/// Install the global subscriber, writing to stderr.
///
/// A no-op when neither `RETYPE_LOG` nor `RUST_LOG` is set, or when another
/// subscriber is already installed.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    // try_init: a host (or a test harness) may have installed one already.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
