//! qlhier - Render the class hierarchy of a CodeQL library
//!
//! Walks a tree of `.ql`/`.qll` sources, picks up single-line class
//! declarations and their `extends` parent, and writes the resulting
//! inheritance graph as Graphviz DOT.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod parser;
pub mod walker;

// Re-export main types
pub use analysis::{Analyzer, ClassNode, ClassRegistry, EmitSummary, InheritanceGraph, ScanReport};
pub use config::Config;
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use output::{write_dot, DotRenderer};
pub use parser::{ClassDeclaration, LineParser};
