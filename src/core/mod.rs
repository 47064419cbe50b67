pub mod analyzer;
pub mod comparison;
pub mod graph;
pub mod reachability;
pub mod report;
pub mod retention;
pub mod scanner;
pub mod symbols;

pub use analyzer::{ProjectAnalysis, SourceAnalyzer};
pub use comparison::{ComparisonOptions, ComparisonRunner};
pub use graph::{ImportBinding, ImportedName, ModuleGraph, ModuleRecord};
pub use reachability::mark_used_symbols;
pub use report::{
    summarize, ArtifactMetrics, BundleAnalysis, BundlerComparison, ComparisonReport,
    ComparisonSummary,
};
pub use retention::{BundleInspector, RetentionVerdict, SourcemapIndex, SIDE_EFFECT_MARKER};
pub use scanner::FileScanner;
pub use symbols::{symbol_key, SymbolInfo, SymbolTable};
