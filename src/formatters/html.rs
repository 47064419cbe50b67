use anyhow::Result;
use std::fmt::Write;

use super::ReportFormatter;
use crate::core::ComparisonReport;

/// Single-page tabular report, no external assets.
#[derive(Debug)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &ComparisonReport) -> Result<String> {
        let mut rows = String::new();
        for result in &report.results {
            writeln!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                result.analysis.bundler_name,
                result.analysis.eliminated_symbols,
                result.analysis.retained_unused,
                result.metrics.bundle_size_bytes,
                result.metrics.build_time_ms,
                result.metrics.warnings.len(),
                result.metrics.errors.len()
            )?;
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head><title>Tree Shaking Comparison Report</title>
<style>table {{ border-collapse: collapse; width: 100%; }} th, td {{ border: 1px solid #ddd; padding: 8px; }} th {{ background: #f2f2f2; }}</style>
</head>
<body>
<h1>Tree Shaking Comparison: {project}</h1>
<table>
<tr><th>Bundler</th><th>Eliminated</th><th>Retained Unused</th><th>Size (B)</th><th>Time (ms)</th><th>Warnings</th><th>Errors</th></tr>
{rows}</table>
<p>Summary: Best={best}, Total Elim={total}, Avg Time={avg:.0}ms</p>
</body></html>
"#,
            project = report.project,
            rows = rows,
            best = report.summary.best_bundler,
            total = report.summary.total_eliminated,
            avg = report.summary.avg_build_time_ms
        ))
    }
}
