//! Report configuration.

/// How reports are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per analyzed file.
    Json,
}

/// Controls how analysis results are reported and what fails a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Semantic diagnostics also make a run fail.
    pub strict: bool,

    /// List satisfied patterns, not just violations.
    pub show_satisfied: bool,

    /// Use ANSI colors in text output.
    pub color: bool,

    /// Output format.
    pub format: OutputFormat,

    /// Print suggested corrections under diagnostics.
    pub show_suggestions: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            strict: false,
            show_satisfied: false,
            color: true,
            format: OutputFormat::Text,
            show_suggestions: true,
        }
    }
}

impl ReportConfig {
    /// Configuration for batch runs: plain text, violations only.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Configuration for the interactive shell: colored, everything shown.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            show_satisfied: true,
            ..Self::default()
        }
    }

    /// Builder method to set strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to show or hide satisfied patterns.
    #[must_use]
    pub fn with_show_satisfied(mut self, show: bool) -> Self {
        self.show_satisfied = show;
        self
    }

    /// Builder method to enable/disable colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to show or hide suggestions.
    #[must_use]
    pub fn with_suggestions(mut self, show: bool) -> Self {
        self.show_suggestions = show;
        self
    }
}
