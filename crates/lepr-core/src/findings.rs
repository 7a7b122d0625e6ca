//! Validation findings and the run-scoped collector.
//!
//! Findings never abort a run; every rule violation across the whole
//! table is collected before anything is reported. The collector is owned
//! by one validation run, so two uploads can be checked in the same
//! process without sharing log state.

use std::fmt;

/// How bad a finding is.
///
/// `Critical` is reserved for missing metadata, which invalidates the
/// interpretation of an entire column rather than a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// One rule violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    /// Name of the rule that produced the finding.
    pub rule: &'static str,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---> {}..({}):: {}", self.severity, self.rule, self.message)
    }
}

/// Collector for the findings of one validation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindingLog {
    findings: Vec<Finding>,
}

impl FindingLog {
    pub fn new() -> FindingLog {
        FindingLog::default()
    }

    pub fn error(&mut self, rule: &'static str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Error,
            rule,
            message,
        });
    }

    pub fn critical(&mut self, rule: &'static str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Critical,
            rule,
            message,
        });
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl fmt::Display for FindingLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        Ok(())
    }
}
