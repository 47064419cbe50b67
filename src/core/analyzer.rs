use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;

use super::graph::{ModuleGraph, ModuleRecord};
use super::scanner::FileScanner;
use super::symbols::SymbolTable;
use crate::parsers::ParserFactory;

/// Static view of a project: its import graph and every exported symbol.
pub struct ProjectAnalysis {
    pub graph: ModuleGraph,
    pub symbols: SymbolTable,
}

#[derive(Debug)]
pub struct SourceAnalyzer {
    file_scanner: FileScanner,
    parser_factory: ParserFactory,
}

impl SourceAnalyzer {
    pub fn new() -> Self {
        Self {
            file_scanner: FileScanner::new(),
            parser_factory: ParserFactory::new(),
        }
    }

    /// Scans `root_path`, parses every module, and assembles the import graph
    /// and symbol table. Any unreadable or unparsable module aborts the
    /// analysis; a partial graph would silently misclassify symbols later.
    pub fn analyze(&self, root_path: &Path) -> Result<ProjectAnalysis> {
        println!("Scanning source files...");
        let files = self.file_scanner.scan_directory(root_path)?;
        println!("Found {} modules to analyze", files.len());

        println!("Parsing modules...");
        let records: Vec<ModuleRecord> = files
            .par_iter()
            .map(|file_info| {
                let parser = self.parser_factory.get_parser(&file_info.language)?;
                parser
                    .parse_module(&file_info.path, &file_info.module)
                    .with_context(|| format!("Failed to parse {}", file_info.path.display()))
            })
            .collect::<Result<Vec<_>>>()?;

        println!("Building import graph...");
        let mut graph = ModuleGraph::new();
        for record in records {
            graph.add_module(record);
        }
        graph.connect();

        let mut symbols = SymbolTable::new();
        for record in graph.modules() {
            for name in &record.exports {
                symbols.insert(&record.path, name);
            }
        }

        println!(
            "Graph: {} modules, {} import edges, {} exported symbols",
            graph.module_count(),
            graph.edge_count(),
            symbols.len()
        );

        Ok(ProjectAnalysis { graph, symbols })
    }
}

impl Default for SourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
