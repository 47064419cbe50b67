use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::graph::strip_source_extension;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// Module path relative to the scan root, extension stripped.
    pub module: String,
    pub language: String,
}

/// Directories that never contain project source.
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist", ".git"];

#[derive(Debug)]
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Walks `root_path` and returns every TypeScript/JavaScript source file,
    /// sorted by module path. Build outputs, dependencies, and bundler config
    /// files (`*.config.*`) are skipped.
    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<FileInfo>> {
        let extensions = supported_extensions();

        let mut files: Vec<FileInfo> = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !(entry.path().is_dir() && SKIPPED_DIRS.contains(&name.as_ref()))
            })
            .filter_map(|e| e.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let path = entry.path();
                if is_config_file(path) {
                    return None;
                }
                let language = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(|ext| extensions.get(ext))?;
                let module = module_path(root_path, path)?;
                Some(FileInfo {
                    path: path.to_path_buf(),
                    module,
                    language: language.to_string(),
                })
            })
            .collect();

        files.sort_by(|a, b| a.module.cmp(&b.module));
        Ok(files)
    }
}

fn supported_extensions() -> HashMap<&'static str, &'static str> {
    let mut extensions = HashMap::new();
    extensions.insert("ts", "typescript");
    extensions.insert("tsx", "typescript");
    extensions.insert("js", "javascript");
    extensions.insert("jsx", "javascript");
    extensions.insert("mjs", "javascript");
    extensions
}

/// `webpack.config.js`, `vite.config.ts`, and friends are bundler input, not
/// project source.
fn is_config_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.ends_with(".config"))
        .unwrap_or(false)
}

fn module_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Some(strip_source_extension(&joined))
}
