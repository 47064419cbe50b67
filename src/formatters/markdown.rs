use anyhow::Result;
use std::fmt::Write;

use super::ReportFormatter;
use crate::core::ComparisonReport;

/// Human-readable report for terminals and code review.
#[derive(Debug)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ComparisonReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "# Tree Shaking Comparison: {}", report.project)?;
        writeln!(out)?;
        writeln!(out, "Entry module: `{}`", report.entry)?;
        writeln!(out)?;

        writeln!(out, "## Summary")?;
        writeln!(out)?;
        writeln!(out, "- Best tree shaker: **{}**", report.summary.best_bundler)?;
        writeln!(
            out,
            "- Total eliminated symbols: {}",
            report.summary.total_eliminated
        )?;
        writeln!(
            out,
            "- Total bundle size: {} bytes",
            report.summary.total_bundle_size_bytes
        )?;
        writeln!(
            out,
            "- Average build time: {:.0} ms",
            report.summary.avg_build_time_ms
        )?;
        writeln!(
            out,
            "- Warnings: {} / Errors: {}",
            report.summary.total_warnings, report.summary.total_errors
        )?;
        writeln!(out)?;

        writeln!(out, "## Results")?;
        writeln!(out)?;
        writeln!(
            out,
            "| Bundler | Eliminated | Retained Unused | Size (B) | Time (ms) | Warnings | Errors |"
        )?;
        writeln!(out, "|---|---:|---:|---:|---:|---:|---:|")?;
        for result in &report.results {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} | {} |",
                result.analysis.bundler_name,
                result.analysis.eliminated_symbols,
                result.analysis.retained_unused,
                result.metrics.bundle_size_bytes,
                result.metrics.build_time_ms,
                result.metrics.warnings.len(),
                result.metrics.errors.len()
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Retained unused symbols")?;
        writeln!(out)?;
        let mut any_reasons = false;
        for result in &report.results {
            if result.analysis.reasons.is_empty() {
                continue;
            }
            any_reasons = true;
            writeln!(out, "### {}", result.analysis.bundler_name)?;
            writeln!(out)?;
            for (key, reason) in &result.analysis.reasons {
                writeln!(out, "- `{}`: {}", key, reason)?;
            }
            writeln!(out)?;
        }
        if !any_reasons {
            writeln!(
                out,
                "Every statically unused symbol was eliminated by every bundler."
            )?;
        }

        Ok(out)
    }
}
