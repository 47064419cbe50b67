use anyhow::Result;
use petgraph::visit::{Bfs, EdgeRef};

use super::graph::{normalize_module_path, ImportedName, ModuleGraph};
use super::symbols::SymbolTable;

/// Marks every symbol that is imported, transitively, from `entry_module`.
///
/// Breadth-first over the resolved import edges. Named and default imports
/// mark the target symbol; namespace and execution-only imports make the
/// target module reachable without marking any name (member accesses on a
/// namespace import were already expanded to named bindings at parse time).
/// Marking is monotone and the traversal visits each module once, so cyclic
/// imports terminate.
pub fn mark_used_symbols(
    graph: &ModuleGraph,
    symbols: &mut SymbolTable,
    entry_module: &str,
) -> Result<()> {
    let entry = normalize_module_path(entry_module);
    let start = match graph.node_index(&entry) {
        Some(idx) => idx,
        None => anyhow::bail!("Entry module '{}' not found in project", entry),
    };

    let mut bfs = Bfs::new(&graph.graph, start);
    while let Some(node) = bfs.next(&graph.graph) {
        for edge in graph.graph.edges(node) {
            let target = &graph.graph[edge.target()];
            match edge.weight() {
                ImportedName::Named(name) => {
                    symbols.mark_used(target, name);
                }
                ImportedName::Default => {
                    symbols.mark_used(target, "default");
                }
                ImportedName::Namespace | ImportedName::ExecutionOnly => {}
            }
        }
    }

    Ok(())
}
