use anyhow::Result;

use super::ReportFormatter;
use crate::core::ComparisonReport;

/// Machine-readable report, pretty-printed for diffability.
#[derive(Debug)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ComparisonReport) -> Result<String> {
        let mut content = serde_json::to_string_pretty(report)?;
        content.push('\n');
        Ok(content)
    }
}
