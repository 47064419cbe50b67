use std::collections::{BTreeSet, HashMap};
use tree_sitter::{Node as TSNode, Tree};

use crate::core::graph::{ImportedName, ModuleRecord};
use crate::parsers::common::{
    extract_string_literal, extract_text, find_child_by_kind, find_children_by_kind,
};

/// Walks a parsed TypeScript/JavaScript tree and records the module's imports
/// and exports. Shared by both source languages; the grammars agree on every
/// node kind touched here.
pub fn extract_module_record(tree: &Tree, source: &[u8], module: &str) -> ModuleRecord {
    let mut record = ModuleRecord::new(module);
    // Local name of each `import * as ns` binding, for member-access expansion.
    let mut namespace_locals: HashMap<String, String> = HashMap::new();

    let root = tree.root_node();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "import_statement" => {
                extract_import(&child, source, &mut record, &mut namespace_locals)
            }
            "export_statement" => extract_export(&child, source, &mut record),
            _ => {}
        }
    }

    if !namespace_locals.is_empty() {
        let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
        collect_namespace_member_uses(&root, source, &namespace_locals, &mut seen);
        for (specifier, name) in seen {
            record.add_import(&specifier, ImportedName::Named(name));
        }
    }

    record
}

fn extract_import(
    node: &TSNode,
    source: &[u8],
    record: &mut ModuleRecord,
    namespace_locals: &mut HashMap<String, String>,
) {
    let specifier = match node.child_by_field_name("source") {
        Some(src) => extract_string_literal(&src, source),
        None => return,
    };

    let clause = match find_child_by_kind(node, "import_clause") {
        Some(clause) => clause,
        // `import "./side-effects"` binds nothing but still executes the module.
        None => {
            record.add_import(&specifier, ImportedName::ExecutionOnly);
            return;
        }
    };

    let mut cursor = clause.walk();
    for part in clause.children(&mut cursor) {
        match part.kind() {
            "identifier" => {
                record.add_import(&specifier, ImportedName::Default);
            }
            "namespace_import" => {
                record.add_import(&specifier, ImportedName::Namespace);
                if let Some(local) = find_child_by_kind(&part, "identifier") {
                    namespace_locals
                        .insert(extract_text(&local, source).to_string(), specifier.clone());
                }
            }
            "named_imports" => {
                for spec in find_children_by_kind(&part, "import_specifier") {
                    // The "name" field is the name as exported by the target
                    // module; a trailing `as alias` only renames the local.
                    if let Some(name) = spec.child_by_field_name("name") {
                        record.add_import(
                            &specifier,
                            ImportedName::Named(extract_text(&name, source).to_string()),
                        );
                    }
                }
            }
            _ => {}
        }
    }
}

fn extract_export(node: &TSNode, source: &[u8], record: &mut ModuleRecord) {
    let source_specifier = node
        .child_by_field_name("source")
        .map(|src| extract_string_literal(&src, source));

    // `export * as ns from "./x"`.
    if let Some(ns) = find_child_by_kind(node, "namespace_export") {
        if let Some(local) = find_child_by_kind(&ns, "identifier") {
            record.add_export(extract_text(&local, source));
        }
        if let Some(specifier) = &source_specifier {
            record.add_import(specifier, ImportedName::Namespace);
        }
        return;
    }

    if find_child_by_kind(node, "default").is_some() {
        record.add_export("default");
        return;
    }

    if let Some(declaration) = node.child_by_field_name("declaration") {
        extract_declaration_names(&declaration, source, record);
        return;
    }

    if let Some(clause) = find_child_by_kind(node, "export_clause") {
        for spec in find_children_by_kind(&clause, "export_specifier") {
            let name = match spec.child_by_field_name("name") {
                Some(name) => extract_text(&name, source).to_string(),
                None => continue,
            };
            let exported = spec
                .child_by_field_name("alias")
                .map(|alias| extract_text(&alias, source).to_string())
                .unwrap_or_else(|| name.clone());
            record.add_export(&exported);
            // A re-export also imports the original name from its source.
            if let Some(specifier) = &source_specifier {
                record.add_import(specifier, ImportedName::Named(name));
            }
        }
        return;
    }

    // `export * from "./x"` has a source but neither clause nor namespace.
    if let Some(specifier) = &source_specifier {
        record.add_import(specifier, ImportedName::Namespace);
    }
}

fn extract_declaration_names(declaration: &TSNode, source: &[u8], record: &mut ModuleRecord) {
    match declaration.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "class_declaration"
        | "abstract_class_declaration"
        | "enum_declaration" => {
            if let Some(name) = declaration.child_by_field_name("name") {
                record.add_export(extract_text(&name, source));
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            for declarator in find_children_by_kind(declaration, "variable_declarator") {
                if let Some(name) = declarator.child_by_field_name("name") {
                    if name.kind() == "identifier" {
                        record.add_export(extract_text(&name, source));
                    }
                }
            }
        }
        // Type-only declarations never reach a bundle.
        "interface_declaration" | "type_alias_declaration" => {}
        _ => {}
    }
}

/// Finds `ns.member` accesses for every namespace import local, so that
/// member-level usage is as precise as a named import.
fn collect_namespace_member_uses(
    node: &TSNode,
    source: &[u8],
    namespace_locals: &HashMap<String, String>,
    seen: &mut BTreeSet<(String, String)>,
) {
    if node.kind() == "member_expression" {
        if let (Some(object), Some(property)) = (
            node.child_by_field_name("object"),
            node.child_by_field_name("property"),
        ) {
            if object.kind() == "identifier" && property.kind() == "property_identifier" {
                if let Some(specifier) = namespace_locals.get(extract_text(&object, source)) {
                    seen.insert((
                        specifier.clone(),
                        extract_text(&property, source).to_string(),
                    ));
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_namespace_member_uses(&child, source, namespace_locals, seen);
    }
}
