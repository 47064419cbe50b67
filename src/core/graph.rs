use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// What an import statement binds from the target module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImportedName {
    /// `import { name }` or `import { name as alias }`. Carries the name as
    /// exported by the target module, never the local alias.
    Named(String),
    /// `import name from "..."`.
    Default,
    /// `import * as ns from "..."`.
    Namespace,
    /// `import "..."`, evaluated for side effects only.
    ExecutionOnly,
}

/// One import edge between two modules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportBinding {
    pub specifier: String,
    pub imported: ImportedName,
}

/// Per-module parse result: what it imports and what it exports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Module path relative to the project root, extension stripped.
    pub path: String,
    /// Raw import specifiers in source order, duplicates preserved.
    pub imports: Vec<ImportBinding>,
    /// Exported names in declaration order.
    pub exports: Vec<String>,
}

impl ModuleRecord {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn add_import(&mut self, specifier: &str, imported: ImportedName) {
        self.imports.push(ImportBinding {
            specifier: specifier.to_string(),
            imported,
        });
    }

    pub fn add_export(&mut self, name: &str) {
        if !self.exports.iter().any(|e| e == name) {
            self.exports.push(name.to_string());
        }
    }
}

/// Import graph over project modules. Nodes are module paths, edges carry the
/// binding that crosses them. Specifiers pointing outside the scanned set
/// (bare package names, unresolved relatives) produce no edge.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    pub graph: DiGraph<String, ImportedName>,
    node_map: HashMap<String, NodeIndex>,
    records: BTreeMap<String, ModuleRecord>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, record: ModuleRecord) {
        self.intern(&record.path);
        self.records.insert(record.path.clone(), record);
    }

    fn intern(&mut self, path: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(path) {
            return idx;
        }
        let idx = self.graph.add_node(path.to_string());
        self.node_map.insert(path.to_string(), idx);
        idx
    }

    /// Resolves every import of every module and materializes the edges.
    /// Call once, after all records are added.
    pub fn connect(&mut self) {
        let records: Vec<ModuleRecord> = self.records.values().cloned().collect();
        for record in records {
            let from = self.intern(&record.path);
            for binding in &record.imports {
                if let Some(target) = self.resolve_specifier(&record.path, &binding.specifier) {
                    let to = self.intern(&target);
                    self.graph.add_edge(from, to, binding.imported.clone());
                }
            }
        }
    }

    /// Maps an import specifier to a known module path, or `None` for bare
    /// package imports and relatives that leave the scanned set.
    pub fn resolve_specifier(&self, importer: &str, specifier: &str) -> Option<String> {
        if !specifier.starts_with('.') {
            return None;
        }
        let base = match Path::new(importer).parent() {
            Some(parent) => parent.join(specifier),
            None => Path::new(specifier).to_path_buf(),
        };
        let candidate = normalize_module_path(&base.to_string_lossy());
        if self.records.contains_key(&candidate) {
            return Some(candidate);
        }
        // Directory import: `./dir` means `./dir/index`.
        let index = format!("{}/index", candidate);
        if self.records.contains_key(&index) {
            return Some(index);
        }
        None
    }

    pub fn node_index(&self, path: &str) -> Option<NodeIndex> {
        self.node_map.get(path).copied()
    }

    #[allow(dead_code)]
    pub fn contains_module(&self, path: &str) -> bool {
        self.records.contains_key(path)
    }

    #[allow(dead_code)]
    pub fn record(&self, path: &str) -> Option<&ModuleRecord> {
        self.records.get(path)
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.records.values()
    }

    pub fn module_count(&self) -> usize {
        self.records.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Normalizes a slash-joined module path: collapses `.` and `..` segments and
/// strips a trailing source extension. `..` escaping the root is clamped.
pub fn normalize_module_path(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let joined = segments.join("/");
    strip_source_extension(&joined)
}

pub fn strip_source_extension(path: &str) -> String {
    for ext in [".tsx", ".ts", ".jsx", ".js", ".mjs"] {
        if let Some(stem) = path.strip_suffix(ext) {
            return stem.to_string();
        }
    }
    path.to_string()
}
