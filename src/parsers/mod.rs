pub mod artifact;
pub mod common;
pub mod ecma;
pub mod javascript;
pub mod typescript;

use anyhow::Result;
use std::path::Path;

use crate::core::graph::ModuleRecord;

pub trait ModuleParser {
    fn parse_module(&self, file_path: &Path, module: &str) -> Result<ModuleRecord>;
    #[allow(dead_code)]
    fn language_name(&self) -> &str;
}

#[derive(Debug)]
pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_parser(&self, language: &str) -> Result<Box<dyn ModuleParser + Send + Sync>> {
        match language {
            "typescript" => Ok(Box::new(typescript::TypeScriptParser::new()?)),
            "javascript" => Ok(Box::new(javascript::JavaScriptParser::new()?)),
            _ => anyhow::bail!("Unsupported language: {}", language),
        }
    }
}
