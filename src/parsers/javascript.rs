use anyhow::Result;
use std::path::Path;

use super::common::TreeSitterParser;
use super::{ecma, ModuleParser};
use crate::core::graph::ModuleRecord;

pub struct JavaScriptParser {
    #[allow(dead_code)]
    parser: TreeSitterParser,
}

impl JavaScriptParser {
    pub fn new() -> Result<Self> {
        let language = tree_sitter_javascript::language();
        let parser = TreeSitterParser::new(language)?;
        Ok(Self { parser })
    }
}

impl ModuleParser for JavaScriptParser {
    fn parse_module(&self, file_path: &Path, module: &str) -> Result<ModuleRecord> {
        // Fresh parser per call so modules can be parsed from worker threads.
        let mut parser = TreeSitterParser::new(tree_sitter_javascript::language())?;
        let source = parser.get_source(file_path)?;
        let tree = parser.parse_source(&source, file_path)?;
        Ok(ecma::extract_module_record(
            &tree,
            source.as_bytes(),
            module,
        ))
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}
