use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use super::report::BundleAnalysis;
use super::symbols::{SymbolInfo, SymbolTable};
use crate::parsers::artifact::{ArtifactParser, ArtifactScan, TreeSitterArtifactParser};

/// Module paths containing this marker are treated as side-effecting and
/// assumed kept by every bundler.
pub const SIDE_EFFECT_MARKER: &str = "side-effects";

/// Which rule of the retention decision procedure matched. The whole
/// procedure is string-matching against the artifact and therefore
/// approximate; keeping the verdict explicit lets callers and tests see why
/// a symbol was kept instead of getting a bare boolean.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RetentionVerdict {
    /// The exact name survived as a free identifier or top-level re-export.
    RetainedByName,
    /// The name occurs somewhere in the raw artifact text.
    RetainedBySubstring,
    /// A sourcemap was loaded and the owning module's path appears in the
    /// artifact.
    RetainedBySourcemap,
    /// The owning module is a side-effect module; kept unconditionally.
    RetainedBySideEffect,
    Eliminated,
}

impl RetentionVerdict {
    pub fn is_retained(&self) -> bool {
        !matches!(self, RetentionVerdict::Eliminated)
    }
}

/// Sources listed by a bundle's sourcemap. Loading is best-effort; the
/// index's existence is what the classifier keys on.
pub struct SourcemapIndex {
    sources: Vec<String>,
}

impl SourcemapIndex {
    /// Follows a `//# sourceMappingURL=` comment next to `bundle_path`.
    /// Returns `None`, after logging, on any failure along the way.
    pub fn load_for_bundle(bundle_path: &Path, bundle_text: &str) -> Option<Self> {
        let reference = find_sourcemap_reference(bundle_text)?;
        let map_path = bundle_path.parent()?.join(reference);
        match Self::load(&map_path) {
            Ok(index) => Some(index),
            Err(err) => {
                eprintln!(
                    "Warning: Failed to load sourcemap {}: {}",
                    map_path.display(),
                    err
                );
                None
            }
        }
    }

    fn load(map_path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(map_path)?;
        let value: Value = serde_json::from_str(&raw)?;
        let sources = value
            .get("sources")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self { sources })
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

fn find_sourcemap_reference(bundle_text: &str) -> Option<String> {
    let pattern = Regex::new(r"//# sourceMappingURL=(.+\.map)").ok()?;
    pattern
        .captures(bundle_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Classifies which symbols a bundler's artifact retained.
#[derive(Debug)]
pub struct BundleInspector {
    artifact_parser: Box<dyn ArtifactParser + Send + Sync>,
}

impl BundleInspector {
    pub fn new() -> Self {
        Self {
            artifact_parser: Box::new(TreeSitterArtifactParser::new()),
        }
    }

    #[allow(dead_code)]
    pub fn with_parser(artifact_parser: Box<dyn ArtifactParser + Send + Sync>) -> Self {
        Self { artifact_parser }
    }

    /// Runs the retention decision procedure over every symbol in the table.
    ///
    /// Hard failures: missing bundle, empty symbol table, missing bundler
    /// name or source root, unparsable artifact. Sourcemap loading is the
    /// only soft step.
    pub fn analyze_bundle(
        &self,
        bundle_path: &Path,
        symbols: &SymbolTable,
        bundler_name: &str,
        source_root: &str,
    ) -> Result<BundleAnalysis> {
        if !bundle_path.exists() {
            anyhow::bail!("Bundle analysis: bundle not found: {}", bundle_path.display());
        }
        if symbols.is_empty() {
            anyhow::bail!("Bundle analysis: symbol table is empty");
        }
        if bundler_name.trim().is_empty() {
            anyhow::bail!("Bundle analysis: bundler name is required");
        }
        if source_root.trim().is_empty() {
            anyhow::bail!("Bundle analysis: source root is required");
        }

        let scan = self
            .artifact_parser
            .scan_artifact(bundle_path)
            .with_context(|| format!("Failed to analyze bundle {}", bundle_path.display()))?;

        let sourcemap = SourcemapIndex::load_for_bundle(bundle_path, scan.text());
        if let Some(index) = &sourcemap {
            println!(
                "Loaded sourcemap for {} ({} sources)",
                bundler_name,
                index.source_count()
            );
        }

        let mut retained_symbols = Vec::new();
        let mut reasons = BTreeMap::new();
        let mut verdicts = BTreeMap::new();
        let mut retained_unused = 0usize;

        for symbol in symbols.values() {
            let verdict = classify_symbol(symbol, &scan, sourcemap.as_ref());
            verdicts.insert(symbol.key(), verdict);
            if !verdict.is_retained() {
                continue;
            }

            let mut kept = symbol.clone();
            if !kept.is_used {
                retained_unused += 1;
                let reason = retention_reason(bundler_name, &kept.module);
                reasons.insert(kept.key(), reason.clone());
                kept.retention_reason = Some(reason);
            }
            retained_symbols.push(kept);
        }

        let total_exports = symbols.len();
        let eliminated_symbols = total_exports - retained_symbols.len();

        Ok(BundleAnalysis {
            bundler_name: bundler_name.to_string(),
            bundle_path: bundle_path.to_path_buf(),
            total_exports,
            retained_symbols,
            eliminated_symbols,
            retained_unused,
            reasons,
            verdicts,
        })
    }
}

impl Default for BundleInspector {
    fn default() -> Self {
        Self::new()
    }
}

/// First matching rule wins; order matters and is part of the contract.
fn classify_symbol(
    symbol: &SymbolInfo,
    scan: &ArtifactScan,
    sourcemap: Option<&SourcemapIndex>,
) -> RetentionVerdict {
    if scan.references(&symbol.name) {
        return RetentionVerdict::RetainedByName;
    }
    if scan.contains_text(&symbol.name) {
        return RetentionVerdict::RetainedBySubstring;
    }
    if sourcemap.is_some() && scan.contains_text(&symbol.module) {
        return RetentionVerdict::RetainedBySourcemap;
    }
    if symbol.module.contains(SIDE_EFFECT_MARKER) {
        return RetentionVerdict::RetainedBySideEffect;
    }
    RetentionVerdict::Eliminated
}

/// Canned explanation for a retained-but-unused symbol. The side-effect
/// explanation outranks the per-bundler ones.
fn retention_reason(bundler_name: &str, module: &str) -> String {
    if module.contains(SIDE_EFFECT_MARKER) {
        return "Side effects in module prevent full elimination".to_string();
    }
    match bundler_name {
        "webpack" => "Webpack conservative tree shaking due to export analysis".to_string(),
        "vite" => "Rollup tree shaking with sideEffect flag consideration".to_string(),
        _ => "Rolldown specific retention (new bundler behavior)".to_string(),
    }
}
