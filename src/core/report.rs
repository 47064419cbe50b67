use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::retention::RetentionVerdict;
use super::symbols::SymbolInfo;

/// What one bundler build produced, independent of symbol analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetrics {
    pub bundle_path: PathBuf,
    pub bundle_size_bytes: u64,
    pub build_time_ms: u64,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Classification of one bundler's artifact against the symbol table.
///
/// `retained_symbols` are copies carrying the original `is_used` flag;
/// retention never rewrites static usage. `eliminated_symbols` is always
/// `total_exports - retained_symbols.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleAnalysis {
    pub bundler_name: String,
    pub bundle_path: PathBuf,
    pub total_exports: usize,
    pub retained_symbols: Vec<SymbolInfo>,
    pub eliminated_symbols: usize,
    pub retained_unused: usize,
    /// Symbol key → canned explanation, present only for retained symbols
    /// that were statically unused.
    pub reasons: BTreeMap<String, String>,
    /// Symbol key → which rule of the decision procedure fired.
    pub verdicts: BTreeMap<String, RetentionVerdict>,
}

/// One bundler's full result: its build metrics and its classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerComparison {
    pub analysis: BundleAnalysis,
    pub metrics: ArtifactMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub best_bundler: String,
    pub eliminated_by_bundler: BTreeMap<String, usize>,
    pub total_eliminated: usize,
    pub total_bundle_size_bytes: u64,
    pub avg_build_time_ms: f64,
    pub total_warnings: usize,
    pub total_errors: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub project: String,
    pub entry: String,
    /// Per-bundler results in invocation order.
    pub results: Vec<BundlerComparison>,
    pub summary: ComparisonSummary,
}

/// Folds per-bundler results into the summary. Pure; an empty input yields
/// zeroed totals and an `"unknown"` best bundler.
pub fn summarize(results: &[BundlerComparison]) -> ComparisonSummary {
    let mut best_bundler = String::from("unknown");
    let mut best_eliminated = 0usize;
    let mut eliminated_by_bundler = BTreeMap::new();
    let mut total_eliminated = 0usize;
    let mut total_bundle_size_bytes = 0u64;
    let mut total_build_time_ms = 0u64;
    let mut total_warnings = 0usize;
    let mut total_errors = 0usize;

    for (i, result) in results.iter().enumerate() {
        let eliminated = result.analysis.eliminated_symbols;
        // Strict comparison keeps the first bundler on ties.
        if i == 0 || eliminated > best_eliminated {
            best_eliminated = eliminated;
            best_bundler = result.analysis.bundler_name.clone();
        }
        eliminated_by_bundler.insert(result.analysis.bundler_name.clone(), eliminated);
        total_eliminated += eliminated;
        total_bundle_size_bytes += result.metrics.bundle_size_bytes;
        total_build_time_ms += result.metrics.build_time_ms;
        total_warnings += result.metrics.warnings.len();
        total_errors += result.metrics.errors.len();
    }

    let avg_build_time_ms = if results.is_empty() {
        0.0
    } else {
        total_build_time_ms as f64 / results.len() as f64
    };

    ComparisonSummary {
        best_bundler,
        eliminated_by_bundler,
        total_eliminated,
        total_bundle_size_bytes,
        avg_build_time_ms,
        total_warnings,
        total_errors,
    }
}
