// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for accessibility diagnostics.
//!
//! Supports two output formats:
//! - Text: human-readable `path:line:col` listings with a summary
//! - JSON: structured diagnostics for programmatic consumption

use crate::scanner::FileReport;
use crate::validators::Severity;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from per-file diagnostics
pub fn generate_report(reports: &[FileReport], format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// Generate human-readable text report
fn generate_text_report(reports: &[FileReport]) -> String {
    let mut output = String::new();

    output.push_str("=== a11ylint Accessibility Report ===\n\n");

    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    if total == 0 {
        output.push_str("No accessibility issues found. All checks passed.\n");
        return output;
    }

    let count = |severity: Severity| -> usize {
        reports
            .iter()
            .flat_map(|r| &r.diagnostics)
            .filter(|d| d.severity == severity)
            .count()
    };

    output.push_str(&format!(
        "Found {} issue(s): {} error(s), {} warning(s), {} hint(s)\n\n",
        total,
        count(Severity::Error),
        count(Severity::Warning),
        count(Severity::Hint)
    ));

    for report in reports {
        if report.diagnostics.is_empty() {
            continue;
        }
        for diagnostic in &report.diagnostics {
            output.push_str(&format!(
                "{}:{}:{}: {} {}\n",
                report.path.display(),
                diagnostic.range.start.line + 1,
                diagnostic.range.start.column + 1,
                severity_label(diagnostic.severity),
                diagnostic.message
            ));
        }
    }

    output
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error:",
        Severity::Warning => "warning:",
        Severity::Hint => "hint:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::analyze_html;
    use std::path::PathBuf;

    fn report_for(source: &str) -> FileReport {
        FileReport {
            path: PathBuf::from("page.html"),
            diagnostics: analyze_html(source).unwrap(),
        }
    }

    #[test]
    fn test_text_report_clean() {
        let reports = vec![FileReport {
            path: PathBuf::from("page.html"),
            diagnostics: Vec::new(),
        }];
        let text = generate_report(&reports, OutputFormat::Text).unwrap();
        assert!(text.contains("No accessibility issues found"));
    }

    #[test]
    fn test_text_report_lists_locations() {
        let reports = vec![report_for("<html></html>")];
        let text = generate_report(&reports, OutputFormat::Text).unwrap();
        assert!(text.contains("page.html:1:1:"));
        assert!(text.contains("error:"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let reports = vec![report_for("<html></html>")];
        let json = generate_report(&reports, OutputFormat::Json).unwrap();
        let parsed: Vec<FileReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].diagnostics.len(), reports[0].diagnostics.len());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }
}
