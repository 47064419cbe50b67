use shakedown::core::graph::{ImportedName, ModuleRecord};
use shakedown::parsers::javascript::JavaScriptParser;
use shakedown::parsers::ModuleParser;
use std::fs;

fn parse(source: &str) -> ModuleRecord {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("mod.js");
    fs::write(&path, source).unwrap();
    let parser = JavaScriptParser::new().unwrap();
    parser.parse_module(&path, "mod").unwrap()
}

#[test]
fn javascript_imports_and_exports_are_extracted() {
    let record = parse(
        "import { helper } from './helper';\n\
         import './polyfill';\n\
         export function run() { return helper(); }\n\
         export var flag = true;\n",
    );

    assert_eq!(record.imports.len(), 2);
    assert_eq!(
        record.imports[0].imported,
        ImportedName::Named("helper".to_string())
    );
    assert_eq!(record.imports[1].imported, ImportedName::ExecutionOnly);
    assert_eq!(record.exports, vec!["run", "flag"]);
}

#[test]
fn javascript_export_star_records_namespace_import() {
    let record = parse("export * from './everything';\n");
    assert!(record.exports.is_empty());
    assert_eq!(record.imports.len(), 1);
    assert_eq!(record.imports[0].specifier, "./everything");
    assert_eq!(record.imports[0].imported, ImportedName::Namespace);
}

#[test]
fn javascript_re_export_with_alias() {
    let record = parse("export { a as b } from './source';\n");
    assert_eq!(record.exports, vec!["b"]);
    assert_eq!(
        record.imports[0].imported,
        ImportedName::Named("a".to_string())
    );
}
