use shakedown::core::report::{summarize, ArtifactMetrics, BundleAnalysis, BundlerComparison};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn comparison(bundler: &str, eliminated: usize, size: u64, time_ms: u64) -> BundlerComparison {
    BundlerComparison {
        analysis: BundleAnalysis {
            bundler_name: bundler.to_string(),
            bundle_path: PathBuf::from(format!("dist/{}/bundle.js", bundler)),
            total_exports: 7,
            retained_symbols: Vec::new(),
            eliminated_symbols: eliminated,
            retained_unused: 0,
            reasons: BTreeMap::new(),
            verdicts: BTreeMap::new(),
        },
        metrics: ArtifactMetrics {
            bundle_path: PathBuf::from(format!("dist/{}/bundle.js", bundler)),
            bundle_size_bytes: size,
            build_time_ms: time_ms,
            warnings: vec!["warn".to_string()],
            errors: Vec::new(),
        },
    }
}

#[test]
fn best_bundler_takes_max_eliminations() {
    let results = vec![
        comparison("webpack", 2, 2000, 900),
        comparison("vite", 5, 1500, 600),
        comparison("rolldown", 4, 1400, 300),
    ];
    let summary = summarize(&results);

    assert_eq!(summary.best_bundler, "vite");
    assert_eq!(summary.total_eliminated, 11);
    assert_eq!(summary.total_bundle_size_bytes, 4900);
    assert_eq!(summary.avg_build_time_ms, 600.0);
    assert_eq!(summary.total_warnings, 3);
    assert_eq!(summary.total_errors, 0);
    assert_eq!(summary.eliminated_by_bundler["rolldown"], 4);
}

#[test]
fn ties_resolve_to_first_in_invocation_order() {
    let results = vec![
        comparison("webpack", 4, 1000, 100),
        comparison("vite", 4, 1000, 100),
    ];
    let summary = summarize(&results);
    assert_eq!(summary.best_bundler, "webpack");
}

#[test]
fn empty_input_summarizes_to_unknown() {
    let summary = summarize(&[]);
    assert_eq!(summary.best_bundler, "unknown");
    assert_eq!(summary.total_eliminated, 0);
    assert_eq!(summary.avg_build_time_ms, 0.0);
    assert!(summary.eliminated_by_bundler.is_empty());
}
