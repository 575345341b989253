//! Conversion report types.
//!
//! The report summarizes one run: what was read, what was written, and
//! which input quirks are likely to surprise whoever consumes the output.
//! It never changes the output itself.

use serde::Serialize;
use std::fmt;

/// Summary of one conversion run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversionReport {
    /// Input format name.
    pub from: String,
    /// Coordinate mode of the written values.
    pub mode: String,
    pub counts: ConversionCounts,
    pub issues: Vec<ConversionIssue>,
}

impl ConversionReport {
    pub fn new(from: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            mode: mode.into(),
            ..Default::default()
        }
    }

    pub fn add(&mut self, issue: ConversionIssue) {
        self.issues.push(issue);
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Info)
            .count()
    }

    /// Iterate over warning-level issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ConversionIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Warning)
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Converted {} labels ({})", self.from, self.mode)?;
        writeln!(
            f,
            "  {} lines, {} images, {} objects, {} classes",
            self.counts.records, self.counts.images, self.counts.objects, self.counts.classes
        )?;

        let warnings = self.warning_count();
        if warnings > 0 {
            writeln!(f)?;
            writeln!(f, "Warnings ({}):", warnings)?;
            for issue in self.warnings() {
                writeln!(f, "  - {}", issue.message)?;
            }
        }

        let infos = self.info_count();
        if infos > 0 {
            writeln!(f)?;
            writeln!(f, "Notes ({}):", infos)?;
            for issue in self
                .issues
                .iter()
                .filter(|i| i.severity == ConversionSeverity::Info)
            {
                writeln!(f, "  - {}", issue.message)?;
            }
        }

        Ok(())
    }
}

/// Counts gathered from the parsed records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConversionCounts {
    /// Output lines (one per record).
    pub records: usize,
    /// Distinct image paths.
    pub images: usize,
    pub objects: usize,
    /// Names in the class index.
    pub classes: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConversionIssue {
    pub severity: ConversionSeverity,
    pub code: ConversionIssueCode,
    pub message: String,
}

impl ConversionIssue {
    pub fn warning(code: ConversionIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: ConversionSeverity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn info(code: ConversionIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: ConversionSeverity::Info,
            code,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionSeverity {
    /// The output is probably not what the user expects.
    Warning,
    /// Worth knowing, harmless.
    Info,
}

/// Stable issue codes for programmatic consumption.
///
/// These codes are part of the JSON output and should remain stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionIssueCode {
    /// An image path occurs on more than one output line.
    SplitImageGroups,
    /// Objects whose min corner is greater than the max corner.
    UnorderedCorners,
    /// Objects with a corner outside the image.
    OutOfBounds,
    /// Classes listed in the classes file but never used.
    UnusedClasses,
}
