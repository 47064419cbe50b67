use shakedown::core::report::{
    summarize, ArtifactMetrics, BundleAnalysis, BundlerComparison, ComparisonReport,
};
use shakedown::formatters::html::HtmlFormatter;
use shakedown::formatters::{formatter_for, ReportFormatter};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn sample_report() -> ComparisonReport {
    let results = vec![BundlerComparison {
        analysis: BundleAnalysis {
            bundler_name: "webpack".to_string(),
            bundle_path: PathBuf::from("dist/webpack/bundle.js"),
            total_exports: 5,
            retained_symbols: Vec::new(),
            eliminated_symbols: 2,
            retained_unused: 1,
            reasons: BTreeMap::new(),
            verdicts: BTreeMap::new(),
        },
        metrics: ArtifactMetrics {
            bundle_path: PathBuf::from("dist/webpack/bundle.js"),
            bundle_size_bytes: 4096,
            build_time_ms: 640,
            warnings: Vec::new(),
            errors: vec!["Error: loader".to_string()],
        },
    }];
    let summary = summarize(&results);
    ComparisonReport {
        project: "demo_project".to_string(),
        entry: "index.ts".to_string(),
        results,
        summary,
    }
}

#[test]
fn html_report_renders_the_comparison_table() {
    let out = HtmlFormatter::new().format(&sample_report()).unwrap();

    assert!(out.contains("<h1>Tree Shaking Comparison: demo_project</h1>"));
    assert!(out.contains(
        "<tr><th>Bundler</th><th>Eliminated</th><th>Retained Unused</th><th>Size (B)</th><th>Time (ms)</th><th>Warnings</th><th>Errors</th></tr>"
    ));
    assert!(out.contains(
        "<tr><td>webpack</td><td>2</td><td>1</td><td>4096</td><td>640</td><td>0</td><td>1</td></tr>"
    ));
    assert!(out.contains("Summary: Best=webpack, Total Elim=2, Avg Time=640ms"));
}

#[test]
fn formatter_factory_dispatches_by_name() {
    let report = sample_report();
    for format in ["markdown", "json", "html"] {
        let formatter = formatter_for(format).unwrap();
        assert!(!formatter.format(&report).unwrap().is_empty());
    }
    let err = formatter_for("yaml").unwrap_err();
    assert!(err.to_string().contains("Unsupported format"));
}
