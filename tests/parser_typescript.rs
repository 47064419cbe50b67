use shakedown::core::graph::{ImportBinding, ImportedName, ModuleRecord};
use shakedown::parsers::typescript::TypeScriptParser;
use shakedown::parsers::ModuleParser;
use std::fs;

fn parse(source: &str) -> ModuleRecord {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("mod.ts");
    fs::write(&path, source).unwrap();
    let parser = TypeScriptParser::new().unwrap();
    parser.parse_module(&path, "mod").unwrap()
}

fn binding(specifier: &str, imported: ImportedName) -> ImportBinding {
    ImportBinding {
        specifier: specifier.to_string(),
        imported,
    }
}

#[test]
fn named_import_records_exported_name_not_alias() {
    let record = parse("import { usedBarrel as barrelUsed } from './barrel';\n");
    assert_eq!(
        record.imports,
        vec![binding(
            "./barrel",
            ImportedName::Named("usedBarrel".to_string())
        )]
    );
}

#[test]
fn default_namespace_and_side_effect_imports() {
    let record = parse(
        "import main from './main';\n\
         import * as helpers from './helpers';\n\
         import './setup';\n",
    );
    assert_eq!(
        record.imports,
        vec![
            binding("./main", ImportedName::Default),
            binding("./helpers", ImportedName::Namespace),
            binding("./setup", ImportedName::ExecutionOnly),
        ]
    );
}

#[test]
fn namespace_member_access_expands_to_named_binding() {
    let record = parse(
        "import * as side from './side-effects';\n\
         side.usedSideEffect();\n",
    );
    assert!(record
        .imports
        .contains(&binding("./side-effects", ImportedName::Namespace)));
    assert!(record.imports.contains(&binding(
        "./side-effects",
        ImportedName::Named("usedSideEffect".to_string())
    )));
    // Only accessed members expand; nothing marks the rest of the module.
    assert_eq!(record.imports.len(), 2);
}

#[test]
fn export_declarations_record_names() {
    let record = parse(
        "export function usedFunction(): string { return 'used'; }\n\
         export const limit = 3;\n\
         export class Widget {}\n\
         export enum Mode { A, B }\n",
    );
    assert_eq!(
        record.exports,
        vec!["usedFunction", "limit", "Widget", "Mode"]
    );
}

#[test]
fn export_clause_uses_alias_as_public_name() {
    let record = parse(
        "const internal = 1;\n\
         export { internal as publicName };\n",
    );
    assert_eq!(record.exports, vec!["publicName"]);
    assert!(record.imports.is_empty());
}

#[test]
fn re_export_adds_import_binding_for_original_name() {
    let record = parse("export { internalHelper as usedBarrel } from './barrel-internal';\n");
    assert_eq!(record.exports, vec!["usedBarrel"]);
    assert_eq!(
        record.imports,
        vec![binding(
            "./barrel-internal",
            ImportedName::Named("internalHelper".to_string())
        )]
    );
}

#[test]
fn default_export_uses_reserved_name() {
    let record = parse("export default function main() { return 1; }\n");
    assert_eq!(record.exports, vec!["default"]);
}

#[test]
fn namespace_re_export_records_namespace_import() {
    let record = parse("export * as helpers from './helpers';\n");
    assert_eq!(record.exports, vec!["helpers"]);
    assert_eq!(
        record.imports,
        vec![binding("./helpers", ImportedName::Namespace)]
    );
}

#[test]
fn type_only_exports_are_not_tracked() {
    let record = parse(
        "export interface Config { name: string }\n\
         export type Alias = string;\n\
         export function real(): void {}\n",
    );
    assert_eq!(record.exports, vec!["real"]);
}
