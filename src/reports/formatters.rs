use crate::types::RouteReport;
use anyhow::Result;
use std::fmt::Write;

/// Trait for report formatters
pub trait ReportFormatter {
    fn format(&self, report: &RouteReport) -> Result<String>;
}

fn hops_summary(report: &RouteReport) -> String {
    match (report.shortest_hops(), report.longest_hops()) {
        (Some(shortest), Some(longest)) => format!("{} to {} hops", shortest, longest),
        _ => "n/a".to_string(),
    }
}

/// Markdown formatter
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &RouteReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "# Routes from `{}` to `{}`", report.source, report.target)?;
        writeln!(out)?;
        writeln!(out, "- **Links searched**: {}", report.link_count)?;
        writeln!(out, "- **Routes found**: {}", report.route_count())?;
        writeln!(out, "- **Route length**: {}", hops_summary(report))?;
        writeln!(out)?;

        if report.routes.is_empty() {
            writeln!(out, "No route exists.")?;
        } else {
            writeln!(out, "## Routes")?;
            for (i, route) in report.routes.iter().enumerate() {
                writeln!(out, "{}. `{}`", i + 1, route)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(out, "*Generated at: {}*", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(out)
    }
}

/// JSON formatter
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RouteReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Plain text formatter
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RouteReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Routes from {} to {}", report.source, report.target)?;
        writeln!(out, "===================")?;
        writeln!(out)?;
        writeln!(out, "Links searched: {}", report.link_count)?;
        writeln!(out, "Routes found: {}", report.route_count())?;
        writeln!(out, "Route length: {}", hops_summary(report))?;
        writeln!(out)?;

        for route in &report.routes {
            writeln!(out, "  {}", route)?;
        }

        Ok(out)
    }
}
