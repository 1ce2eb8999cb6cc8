use crate::reports::formatters::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};
use crate::types::RouteReport;
use anyhow::Result;

/// Report generator for creating various output formats
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate report in the specified format
    pub fn generate(&self, report: &RouteReport, format: &str) -> Result<String> {
        match format.to_lowercase().as_str() {
            "json" => JsonFormatter.format(report),
            "markdown" => MarkdownFormatter.format(report),
            "text" => TextFormatter.format(report),
            _ => Err(anyhow::anyhow!("Unsupported format: {}", format)),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_dispatches_on_format() {
        let report = RouteReport::new("A".to_string(), "B".to_string(), 0, Vec::new());
        let generator = ReportGenerator::new();

        assert!(generator.generate(&report, "JSON").unwrap().trim_start().starts_with('{'));
        assert!(generator.generate(&report, "text").unwrap().starts_with("Routes from A to B"));
        assert!(generator.generate(&report, "markdown").unwrap().starts_with('#'));
        assert!(generator.generate(&report, "xml").is_err());
    }
}
