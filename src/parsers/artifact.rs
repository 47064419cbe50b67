use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, find_child_by_kind, find_children_by_kind, TreeSitterParser};

/// Lexical facts about one built bundle: its full text and the identifiers
/// that appear without a local binding. Minified bundles rename local
/// bindings, so a surviving original name shows up either as a free
/// identifier or as a raw substring.
#[derive(Debug, Clone)]
pub struct ArtifactScan {
    text: String,
    free_identifiers: BTreeSet<String>,
}

impl ArtifactScan {
    pub fn new(text: String, free_identifiers: BTreeSet<String>) -> Self {
        Self {
            text,
            free_identifiers,
        }
    }

    /// True when `name` occurs as an identifier with no binding in the bundle.
    pub fn references(&self, name: &str) -> bool {
        self.free_identifiers.contains(name)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[allow(dead_code)]
    pub fn free_identifiers(&self) -> &BTreeSet<String> {
        &self.free_identifiers
    }
}

pub trait ArtifactParser: std::fmt::Debug {
    fn scan_artifact(&self, bundle_path: &Path) -> Result<ArtifactScan>;
}

/// Bundle output is JavaScript regardless of the project's source language.
#[derive(Debug)]
pub struct TreeSitterArtifactParser;

impl TreeSitterArtifactParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeSitterArtifactParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactParser for TreeSitterArtifactParser {
    fn scan_artifact(&self, bundle_path: &Path) -> Result<ArtifactScan> {
        let mut parser = TreeSitterParser::new(tree_sitter_javascript::language())?;
        let text = parser.get_source(bundle_path)?;
        let tree = parser.parse_source(&text, bundle_path)?;
        if tree.root_node().has_error() {
            anyhow::bail!(
                "Bundle is not valid JavaScript: {}",
                bundle_path.display()
            );
        }

        let mut declared = BTreeSet::new();
        let mut referenced = BTreeSet::new();
        let mut free = BTreeSet::new();
        collect_identifiers(
            &tree.root_node(),
            text.as_bytes(),
            &mut declared,
            &mut referenced,
            &mut free,
        );
        for name in referenced.difference(&declared) {
            free.insert(name.clone());
        }

        Ok(ArtifactScan::new(text, free))
    }
}

fn collect_identifiers(
    node: &TSNode,
    source: &[u8],
    declared: &mut BTreeSet<String>,
    referenced: &mut BTreeSet<String>,
    free: &mut BTreeSet<String>,
) {
    match node.kind() {
        "identifier" => {
            referenced.insert(extract_text(node, source).to_string());
            return;
        }
        "function_declaration" | "generator_function_declaration" | "class_declaration"
        | "function" | "function_expression" | "class" => {
            if let Some(name) = node.child_by_field_name("name") {
                declared.insert(extract_text(&name, source).to_string());
            }
        }
        "variable_declarator" => {
            if let Some(name) = node.child_by_field_name("name") {
                collect_pattern_identifiers(&name, source, declared);
            }
        }
        "formal_parameters" => {
            collect_pattern_identifiers(node, source, declared);
        }
        "catch_clause" => {
            if let Some(param) = node.child_by_field_name("parameter") {
                collect_pattern_identifiers(&param, source, declared);
            }
        }
        "import_statement" => {
            collect_import_locals(node, source, declared);
            return;
        }
        "export_statement" => {
            // Exported names are part of the bundle's public surface, binding
            // or not, so they always count as present.
            if let Some(clause) = find_child_by_kind(node, "export_clause") {
                for spec in find_children_by_kind(&clause, "export_specifier") {
                    let exported = spec
                        .child_by_field_name("alias")
                        .or_else(|| spec.child_by_field_name("name"));
                    if let Some(exported) = exported {
                        free.insert(extract_text(&exported, source).to_string());
                    }
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_identifiers(&child, source, declared, referenced, free);
    }
}

fn collect_pattern_identifiers(node: &TSNode, source: &[u8], out: &mut BTreeSet<String>) {
    match node.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => {
            out.insert(extract_text(node, source).to_string());
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect_pattern_identifiers(&child, source, out);
            }
        }
    }
}

fn collect_import_locals(node: &TSNode, source: &[u8], declared: &mut BTreeSet<String>) {
    let clause = match find_child_by_kind(node, "import_clause") {
        Some(clause) => clause,
        None => return,
    };
    let mut cursor = clause.walk();
    for part in clause.children(&mut cursor) {
        match part.kind() {
            "identifier" => {
                declared.insert(extract_text(&part, source).to_string());
            }
            "namespace_import" => {
                if let Some(local) = find_child_by_kind(&part, "identifier") {
                    declared.insert(extract_text(&local, source).to_string());
                }
            }
            "named_imports" => {
                for spec in find_children_by_kind(&part, "import_specifier") {
                    let local = spec
                        .child_by_field_name("alias")
                        .or_else(|| spec.child_by_field_name("name"));
                    if let Some(local) = local {
                        declared.insert(extract_text(&local, source).to_string());
                    }
                }
            }
            _ => {}
        }
    }
}
