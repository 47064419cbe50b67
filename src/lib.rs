//! # SHAKEDOWN
//!
//! Compare tree-shaking effectiveness across JavaScript bundlers.
//!
//! SHAKEDOWN statically analyzes a small multi-module project to determine
//! which exported symbols are reachable from its entry point, builds the same
//! project with each bundler under test, and classifies which symbols each
//! bundler actually kept in its output.
//!
//! ## Pipeline
//!
//! 1. **Source analysis**: walk the project, parse every module's imports and
//!    exports, assemble the dependency graph and symbol table
//! 2. **Reachability marking**: BFS from the entry module over import edges
//! 3. **Bundling**: invoke each bundler as a subprocess with a generated config
//! 4. **Retention classification**: inspect each artifact per symbol
//! 5. **Aggregation**: single comparative report (markdown, JSON, or HTML)
//!
//! ## Supported Bundlers
//!
//! webpack, vite, rolldown

pub mod bundlers;
pub mod core;
pub mod formatters;
pub mod parsers;
