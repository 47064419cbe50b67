use anyhow::Result;
use std::path::PathBuf;

use super::analyzer::SourceAnalyzer;
use super::reachability::mark_used_symbols;
use super::report::{summarize, BundlerComparison, ComparisonReport};
use super::retention::BundleInspector;
use crate::bundlers::BundlerAdapter;

#[derive(Debug)]
pub struct ComparisonOptions {
    pub project_root: PathBuf,
    pub entry: String,
    /// Artifact directory relative to the project root; each bundler gets a
    /// subdirectory named after it.
    pub out_dir: String,
    pub project_name: String,
}

/// Runs the whole pipeline: analyze sources, mark reachability, build with
/// every configured bundler, classify each artifact, and fold the results
/// into one report. Adapters run in their given order; any stage failure
/// aborts the run, no partial report is produced.
#[derive(Debug)]
pub struct ComparisonRunner {
    options: ComparisonOptions,
    analyzer: SourceAnalyzer,
    inspector: BundleInspector,
    adapters: Vec<Box<dyn BundlerAdapter + Send + Sync>>,
}

impl ComparisonRunner {
    pub fn new(
        options: ComparisonOptions,
        adapters: Vec<Box<dyn BundlerAdapter + Send + Sync>>,
    ) -> Result<Self> {
        if !options.project_root.exists() {
            anyhow::bail!(
                "Comparison: project root not found: {}",
                options.project_root.display()
            );
        }
        if options.entry.trim().is_empty() {
            anyhow::bail!("Comparison: entry module is required");
        }
        if options.out_dir.trim().is_empty() {
            anyhow::bail!("Comparison: output directory is required");
        }
        if adapters.is_empty() {
            anyhow::bail!("Comparison: at least one bundler is required");
        }

        Ok(Self {
            options,
            analyzer: SourceAnalyzer::new(),
            inspector: BundleInspector::new(),
            adapters,
        })
    }

    pub fn run(&self) -> Result<ComparisonReport> {
        let root = &self.options.project_root;
        let source_root = root.to_string_lossy().to_string();

        let mut analysis = self.analyzer.analyze(root)?;
        if analysis.symbols.is_empty() {
            anyhow::bail!(
                "Comparison: no exported symbols found in {}",
                root.display()
            );
        }

        println!("Marking reachable symbols...");
        mark_used_symbols(&analysis.graph, &mut analysis.symbols, &self.options.entry)?;
        let used = analysis.symbols.values().filter(|s| s.is_used).count();
        println!(
            "{} of {} exported symbols statically used",
            used,
            analysis.symbols.len()
        );

        let mut results: Vec<BundlerComparison> = Vec::with_capacity(self.adapters.len());
        for adapter in &self.adapters {
            let name = adapter.name();
            println!("Bundling with {}...", name);
            let out_rel = format!("{}/{}", self.options.out_dir, name);
            let metrics = adapter.build(root, &self.options.entry, &out_rel)?;
            println!(
                "{} wrote {} ({} bytes in {} ms)",
                name,
                metrics.bundle_path.display(),
                metrics.bundle_size_bytes,
                metrics.build_time_ms
            );

            let bundle_analysis =
                self.inspector
                    .analyze_bundle(&metrics.bundle_path, &analysis.symbols, name, &source_root)?;
            results.push(BundlerComparison {
                analysis: bundle_analysis,
                metrics,
            });
        }

        let summary = summarize(&results);
        Ok(ComparisonReport {
            project: self.options.project_name.clone(),
            entry: self.options.entry.clone(),
            results,
            summary,
        })
    }
}
