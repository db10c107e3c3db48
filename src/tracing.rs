//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=freewrite::search=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/freewrite/logs/freewrite.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::CursorPosition;
use crate::model::Document;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to `~/.config/freewrite/logs/freewrite.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub location: usize,
    pub length: usize,
    pub position: CursorPosition,
    pub revision: u64,
}

impl SelectionSnapshot {
    pub fn from_document(document: &Document) -> Self {
        Self {
            location: document.selection.location,
            length: document.selection.length,
            position: document.cursor_position(),
            revision: document.revision,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.location != other.location || self.length != other.length {
            changes.push(format!(
                "selection {}+{} → {}+{}",
                self.location, self.length, other.location, other.length
            ));
        }
        if self.position != other.position {
            changes.push(format!(
                "({},{}) → ({},{})",
                self.position.line, self.position.column, other.position.line, other.position.column
            ));
        }
        if self.revision != other.revision {
            changes.push(format!("revision {} → {}", self.revision, other.revision));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
