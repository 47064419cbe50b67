pub mod html;
pub mod json;
pub mod markdown;

use anyhow::Result;
use std::path::Path;

use crate::core::ComparisonReport;

pub trait ReportFormatter: std::fmt::Debug {
    fn format(&self, report: &ComparisonReport) -> Result<String>;

    fn format_to_file(&self, report: &ComparisonReport, output_path: &Path) -> Result<()> {
        let content = self.format(report)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }
}

pub fn formatter_for(format: &str) -> Result<Box<dyn ReportFormatter>> {
    match format {
        "markdown" => Ok(Box::new(markdown::MarkdownFormatter::new())),
        "json" => Ok(Box::new(json::JsonFormatter::new())),
        "html" => Ok(Box::new(html::HtmlFormatter::new())),
        _ => anyhow::bail!("Unsupported format: {}", format),
    }
}
