//! Session state for the interactive shell.
//!
//! The session holds the current source buffer and the result of the last
//! analysis. Every edit discards the result and rebuilds it from scratch.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tonto_foundation::{Error, ErrorContext, Phase, Result};
use tracing::debug;

use crate::analysis::{AnalysisResult, analyze_with};
use crate::config::ReportConfig;

// =============================================================================
// Cancellation
// =============================================================================

/// Shared flag that stops an analysis at the next phase boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag that is not set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Clears a previous request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Returns true if cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Fails with `Cancelled` if cancellation was requested before `phase`.
    ///
    /// # Errors
    ///
    /// Returns [`tonto_foundation::ErrorKind::Cancelled`] naming `phase`.
    pub fn check(&self, phase: Phase) -> Result<()> {
        if self.is_cancelled() {
            debug!(%phase, "analysis cancelled");
            return Err(Error::cancelled(phase));
        }
        Ok(())
    }
}

// =============================================================================
// Session
// =============================================================================

/// Session state for an interactive session.
#[derive(Debug)]
pub struct Session {
    /// Accumulated source text.
    source: String,

    /// Result of the last successful analysis.
    result: Option<AnalysisResult>,

    /// Directory for relative file resolution.
    load_path: PathBuf,

    /// Report configuration.
    config: ReportConfig,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ReportConfig::interactive())
    }

    /// Creates an empty session with the given report configuration.
    #[must_use]
    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            source: String::new(),
            result: None,
            load_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config,
        }
    }

    /// Returns the source buffer.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the last analysis result.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Returns the report configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the current load path.
    #[must_use]
    pub fn load_path(&self) -> &Path {
        &self.load_path
    }

    /// Resolves a path relative to the load path.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.load_path.join(path)
        }
    }

    /// Replaces the source buffer and re-analyzes.
    ///
    /// # Errors
    ///
    /// Returns `EmptySource` for a blank buffer.
    pub fn set_source(&mut self, source: impl Into<String>) -> Result<&AnalysisResult> {
        self.source = source.into();
        self.analyze()
    }

    /// Appends text to the source buffer and re-analyzes.
    ///
    /// # Errors
    ///
    /// Returns `EmptySource` if the buffer is still blank.
    pub fn append(&mut self, text: &str) -> Result<&AnalysisResult> {
        if !self.source.is_empty() && !self.source.ends_with('\n') {
            self.source.push('\n');
        }
        self.source.push_str(text);
        self.analyze()
    }

    /// Reads a file into the source buffer and re-analyzes.
    ///
    /// The file's directory becomes the load path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or `EmptySource`.
    pub fn load_file(&mut self, path: &str) -> Result<&AnalysisResult> {
        let resolved = self.resolve_path(path);
        let source = fs::read_to_string(&resolved).map_err(|e| {
            Error::io(format!("failed to read {}: {e}", resolved.display()))
                .with_context(ErrorContext::new().with_source(resolved.display().to_string()))
        })?;
        if let Some(parent) = resolved.parent() {
            self.load_path = parent.to_path_buf();
        }
        self.set_source(source)
    }

    /// Clears the source buffer and the last result.
    pub fn reset(&mut self) {
        self.source.clear();
        self.result = None;
    }

    /// Re-analyzes the whole buffer.
    ///
    /// # Errors
    ///
    /// Returns `EmptySource` for a blank buffer.
    pub fn analyze(&mut self) -> Result<&AnalysisResult> {
        self.analyze_with(&CancelFlag::new())
    }

    /// Re-analyzes the whole buffer, stopping at a phase boundary if
    /// `cancel` is set. A stopped run leaves no result behind.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` or `EmptySource`.
    pub fn analyze_with(&mut self, cancel: &CancelFlag) -> Result<&AnalysisResult> {
        self.result = None;
        let result = analyze_with(&self.source, cancel)?;
        Ok(self.result.insert(result))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
