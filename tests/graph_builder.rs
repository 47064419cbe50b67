use shakedown::core::graph::{
    normalize_module_path, strip_source_extension, ImportedName, ModuleGraph, ModuleRecord,
};

fn module(path: &str) -> ModuleRecord {
    ModuleRecord::new(path)
}

#[test]
fn normalize_collapses_dot_segments_and_strips_extensions() {
    assert_eq!(normalize_module_path("./utils.ts"), "utils");
    assert_eq!(normalize_module_path("a/b/../c.ts"), "a/c");
    assert_eq!(normalize_module_path("lib/./nested/mod.js"), "lib/nested/mod");
    assert_eq!(strip_source_extension("app.tsx"), "app");
    assert_eq!(strip_source_extension("plain"), "plain");
}

#[test]
fn resolve_prefers_exact_match_then_index_fallback() {
    let mut graph = ModuleGraph::new();
    graph.add_module(module("index"));
    graph.add_module(module("utils"));
    graph.add_module(module("lib/index"));

    assert_eq!(
        graph.resolve_specifier("index", "./utils"),
        Some("utils".to_string())
    );
    assert_eq!(
        graph.resolve_specifier("index", "./lib"),
        Some("lib/index".to_string())
    );
    assert_eq!(graph.resolve_specifier("index", "react"), None);
    assert_eq!(graph.resolve_specifier("index", "./missing"), None);
}

#[test]
fn resolve_is_relative_to_the_importing_module() {
    let mut graph = ModuleGraph::new();
    graph.add_module(module("nested/a"));
    graph.add_module(module("nested/b"));
    graph.add_module(module("top"));

    assert_eq!(
        graph.resolve_specifier("nested/a", "./b"),
        Some("nested/b".to_string())
    );
    assert_eq!(
        graph.resolve_specifier("nested/a", "../top"),
        Some("top".to_string())
    );
}

#[test]
fn connect_adds_edges_for_resolved_imports_only() {
    let mut graph = ModuleGraph::new();
    let mut index = module("index");
    index.add_import("./utils", ImportedName::Named("usedFunction".to_string()));
    index.add_import("react", ImportedName::Default);
    graph.add_module(index);
    graph.add_module(module("utils"));
    graph.connect();

    assert_eq!(graph.module_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn cyclic_imports_connect_without_duplicating_modules() {
    let mut graph = ModuleGraph::new();
    let mut a = module("a");
    a.add_import("./b", ImportedName::Named("fromB".to_string()));
    let mut b = module("b");
    b.add_import("./a", ImportedName::Named("fromA".to_string()));
    graph.add_module(a);
    graph.add_module(b);
    graph.connect();

    assert_eq!(graph.module_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains_module("a"));
    assert!(graph.contains_module("b"));
}

#[test]
fn duplicate_exports_are_recorded_once() {
    let mut record = module("m");
    record.add_export("name");
    record.add_export("name");
    assert_eq!(record.exports, vec!["name"]);
}
