use anyhow::Result;
use std::path::Path;

use super::common::TreeSitterParser;
use super::{ecma, ModuleParser};
use crate::core::graph::ModuleRecord;

pub struct TypeScriptParser {
    #[allow(dead_code)]
    parser: TreeSitterParser,
}

impl TypeScriptParser {
    pub fn new() -> Result<Self> {
        let language = tree_sitter_typescript::language_typescript();
        let parser = TreeSitterParser::new(language)?;
        Ok(Self { parser })
    }
}

impl ModuleParser for TypeScriptParser {
    fn parse_module(&self, file_path: &Path, module: &str) -> Result<ModuleRecord> {
        // Fresh parser per call so modules can be parsed from worker threads.
        let mut parser = TreeSitterParser::new(tree_sitter_typescript::language_typescript())?;
        let source = parser.get_source(file_path)?;
        let tree = parser.parse_source(&source, file_path)?;
        Ok(ecma::extract_module_record(
            &tree,
            source.as_bytes(),
            module,
        ))
    }

    fn language_name(&self) -> &str {
        "typescript"
    }
}
