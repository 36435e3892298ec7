//! Advisory diagnostics for a flat record collection.
//!
//! The builder is deliberately forgiving: dangling parent references,
//! duplicate ids and mother-only parentage are tolerated, and the affected
//! records just drop out of the tree. [`check_records`] surfaces those
//! conditions so a caller can report them instead of discovering silently
//! missing people in the rendered output.
//!
//! ```rust,ignore
//! let report = check_records(&records);
//! if !report.is_healthy() {
//!     eprintln!("{report}");
//! }
//! ```
//!
//! All checks are linear scans over the input; none of them change what
//! the builder produces.

use std::collections::{HashMap, HashSet};

use super::node::VIRTUAL_ROOT_ID;
use crate::record::{PersonId, PersonRecord};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational, not a problem.
    Info,
    /// Something the builder tolerates but that loses data.
    Warning,
    /// The build cannot produce a usable tree.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A single issue found while checking a record collection.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Record the issue concerns, if any.
    pub record_id: Option<PersonId>,
}

impl ValidationIssue {
    /// Create a new issue.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            record_id: None,
        }
    }

    /// Attach the offending record's id.
    pub fn with_record(mut self, id: PersonId) -> Self {
        self.record_id = Some(id);
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        if let Some(id) = self.record_id {
            write!(f, " (record {})", id)?;
        }
        Ok(())
    }
}

/// Report from a record-collection check.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// All issues found, in detection order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue to the report.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Check if the report contains no error-level issues.
    pub fn is_healthy(&self) -> bool {
        !self.issues.iter().any(|i| i.severity >= Severity::Error)
    }

    /// Check if there are any issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Get issues of a specific severity or higher.
    pub fn issues_at_level(&self, min_severity: Severity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity >= min_severity)
            .collect()
    }

    /// Count issues by severity.
    pub fn counts(&self) -> HashMap<Severity, usize> {
        let mut counts = HashMap::new();
        for issue in &self.issues {
            *counts.entry(issue.severity).or_default() += 1;
        }
        counts
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_clean() {
            return write!(f, "Record check passed: no issues found");
        }

        let counts = self.counts();
        let parts: Vec<String> = [
            (Severity::Error, "errors"),
            (Severity::Warning, "warnings"),
            (Severity::Info, "info"),
        ]
        .iter()
        .filter_map(|(sev, name)| counts.get(sev).map(|c| format!("{} {}", c, name)))
        .collect();

        writeln!(f, "Record check: {}", parts.join(", "))?;
        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}

/// Check a flat record collection for conditions the builder tolerates
/// silently.
///
/// Issue taxonomy:
/// - `Error`: a record uses the reserved synthetic-root id; no root
///   candidate exists (the build will return `None`).
/// - `Warning`: duplicate id (first occurrence wins); dangling `pai_id`
///   (record drops out of the tree); mother-only parentage (ditto).
/// - `Info`: dangling `mae_id` (not used for attachment); more than one
///   root candidate (a synthetic root will join them).
pub fn check_records(records: &[PersonRecord]) -> ValidationReport {
    let mut report = ValidationReport::new();

    let mut known: HashSet<PersonId> = HashSet::with_capacity(records.len());
    for record in records {
        if record.id == VIRTUAL_ROOT_ID {
            report.add(
                ValidationIssue::new(
                    Severity::Error,
                    format!("id {} is reserved for the synthetic root", VIRTUAL_ROOT_ID),
                )
                .with_record(record.id),
            );
        }
        if !known.insert(record.id) {
            report.add(
                ValidationIssue::new(Severity::Warning, "duplicate id; first occurrence wins")
                    .with_record(record.id),
            );
        }
    }

    let mut root_candidates = 0usize;
    for record in records {
        match record.pai_id {
            Some(pai) if !known.contains(&pai) => {
                report.add(
                    ValidationIssue::new(
                        Severity::Warning,
                        format!("father reference {} does not resolve; record drops out of the tree", pai),
                    )
                    .with_record(record.id),
                );
            }
            Some(_) => {}
            None => {
                if let Some(mae) = record.mae_id {
                    report.add(
                        ValidationIssue::new(
                            Severity::Warning,
                            format!(
                                "mother-only parentage (mother {}); record drops out of the tree",
                                mae
                            ),
                        )
                        .with_record(record.id),
                    );
                } else {
                    root_candidates += 1;
                }
            }
        }
        if let Some(mae) = record.mae_id {
            if !known.contains(&mae) {
                report.add(
                    ValidationIssue::new(
                        Severity::Info,
                        format!("mother reference {} does not resolve", mae),
                    )
                    .with_record(record.id),
                );
            }
        }
    }

    match root_candidates {
        0 => report.add(ValidationIssue::new(
            Severity::Error,
            "no root candidate; no tree can be built",
        )),
        1 => {}
        n => report.add(ValidationIssue::new(
            Severity::Info,
            format!("{} root candidates; a synthetic root will join them", n),
        )),
    }

    report
}
