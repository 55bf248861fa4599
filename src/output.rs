//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Conclusion, FailureSet, Verdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A verdict as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    /// `success` or `failure`
    pub conclusion: Conclusion,
    /// Verdict title
    pub title: String,
    /// Verdict summary
    pub summary: String,
    /// Branch the verdict applies to
    pub head_branch: String,
    /// Commit the verdict applies to
    pub head_sha: String,
    /// `owner/repo`, empty when unknown
    pub repository: String,
    /// Per-rule failure lists, when classified locally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<FailureSet>,
    /// Whether the verdict was submitted as a check run
    pub reported: bool,
}

impl VerdictReport {
    /// Build a report from a verdict
    #[must_use]
    pub fn new(verdict: &Verdict, reported: bool) -> Self {
        let repo = &verdict.context.repository;
        let repository = if repo.owner.is_empty() && repo.repo.is_empty() {
            String::new()
        } else {
            repo.to_string()
        };

        Self {
            conclusion: verdict.conclusion,
            title: verdict.title.clone(),
            summary: verdict.summary.clone(),
            head_branch: verdict.context.head_branch.clone(),
            head_sha: verdict.context.head_sha.clone(),
            repository,
            failures: None,
            reported,
        }
    }

    /// Attach the per-rule failure lists
    #[must_use]
    pub fn with_failures(mut self, failures: FailureSet) -> Self {
        self.failures = Some(failures);
        self
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let headline = match self.conclusion {
            Conclusion::Success => self.title.green().bold(),
            Conclusion::Failure => self.title.red().bold(),
        };

        let mut lines = vec![headline.to_string()];
        if !self.repository.is_empty() || !self.head_sha.is_empty() {
            lines.push(format!("  {} @ {} ({})", self.repository, self.head_branch, self.head_sha));
        }
        lines.push(String::new());
        lines.push(self.summary.clone());
        if self.reported {
            lines.push(String::new());
            lines.push("Check run reported.".to_string());
        }
        lines.join("\n")
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
