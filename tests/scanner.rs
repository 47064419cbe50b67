use shakedown::core::scanner::FileScanner;
use std::fs;
use std::path::Path;

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "// test").unwrap();
}

#[test]
fn scanner_collects_source_files_sorted_by_module() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("lib")).unwrap();

    touch(root.join("index.ts"));
    touch(root.join("lib/helper.js"));
    touch(root.join("app.tsx"));
    touch(root.join("readme.txt"));

    let scanner = FileScanner::new();
    let files = scanner.scan_directory(root).unwrap();

    let modules: Vec<_> = files.iter().map(|f| f.module.as_str()).collect();
    assert_eq!(modules, vec!["app", "index", "lib/helper"]);

    let app = files.iter().find(|f| f.module == "app").unwrap();
    assert_eq!(app.language, "typescript");
    let helper = files.iter().find(|f| f.module == "lib/helper").unwrap();
    assert_eq!(helper.language, "javascript");
}

#[test]
fn scanner_skips_config_files_and_build_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();

    touch(root.join("index.ts"));
    touch(root.join("webpack.config.js"));
    touch(root.join("vite.config.ts"));
    touch(root.join("node_modules/pkg/index.js"));
    touch(root.join("dist/bundle.js"));

    let scanner = FileScanner::new();
    let files = scanner.scan_directory(root).unwrap();

    let modules: Vec<_> = files.iter().map(|f| f.module.as_str()).collect();
    assert_eq!(modules, vec!["index"]);
}

#[test]
fn scanner_handles_mjs_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("worker.mjs"));

    let scanner = FileScanner::new();
    let files = scanner.scan_directory(root).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].module, "worker");
    assert_eq!(files[0].language, "javascript");
}
