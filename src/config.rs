//! Session configuration.
//!
//! Controls the interactive collaborator around the scoring engine: how
//! often to re-prompt and how the final report is rendered. Scoring rules
//! themselves are fixed and not configurable.

use serde::{Deserialize, Serialize};

/// Default prompt printed before each input line.
pub const DEFAULT_PROMPT: &str = "Enter bowling rolls separated by spaces:";

/// How the final report is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Frame table followed by the total.
    #[default]
    Text,
    /// Pretty-printed JSON of the scored game.
    Json,
}

/// Configuration for one scoring session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Failed attempts allowed before giving up (0 = unlimited).
    pub max_attempts: u32,

    /// Report rendering.
    pub format: ReportFormat,

    /// Print the cumulative total next to each frame in text reports.
    pub show_running_totals: bool,

    /// Line printed before reading each attempt.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            format: ReportFormat::Text,
            show_running_totals: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl SessionConfig {
    /// Limit the number of failed attempts.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the report format.
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Show running totals in text reports.
    #[must_use]
    pub fn with_running_totals(mut self, show: bool) -> Self {
        self.show_running_totals = show;
        self
    }

    /// Replace the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Whether another attempt is allowed after `failures` failed ones.
    #[must_use]
    pub fn allows_attempt(&self, failures: u32) -> bool {
        self.max_attempts == 0 || failures < self.max_attempts
    }
}
