// Graphviz DOT output
//
// Renders the inheritance graph as a `digraph` block and writes it to disk.

use crate::analysis::InheritanceGraph;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Renders an inheritance graph as DOT text
pub struct DotRenderer {
    /// Name of the top-level digraph
    graph_name: String,
    /// Indentation for statements inside the block
    indent: String,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self {
            graph_name: "G".to_string(),
            indent: "    ".to_string(),
        }
    }

    /// Set the digraph name
    pub fn with_graph_name(mut self, name: &str) -> Self {
        self.graph_name = name.to_string();
        self
    }

    /// Render all nodes, then all edges, in graph insertion order
    pub fn render(&self, graph: &InheritanceGraph) -> String {
        let mut lines = Vec::new();
        lines.push(format!("digraph {} {{", graph_id(&self.graph_name)));

        for name in graph.nodes() {
            lines.push(format!("{}{};", self.indent, quote_id(name)));
        }

        for (parent, child) in graph.edges() {
            lines.push(format!(
                "{}{} -> {};",
                self.indent,
                quote_id(parent),
                quote_id(child)
            ));
        }

        lines.push("}".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Create (or truncate) `path` and write `dot` to it.
///
/// The file handle is closed when this returns, on success or failure.
pub fn write_dot(path: &Path, dot: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::output_create(path, e))?;
    file.write_all(dot.as_bytes())?;
    file.flush()?;
    info!(path = %path.display(), bytes = dot.len(), "wrote DOT file");
    Ok(())
}

/// Quote a DOT identifier, escaping `"` and `\`
fn quote_id(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Graph names that are plain DOT identifiers are written bare
fn graph_id(s: &str) -> String {
    let plain = s
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        s.to_string()
    } else {
        quote_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ClassRegistry;
    use crate::parser::ClassDeclaration;
    use std::fs;
    use tempfile::TempDir;

    fn graph(decls: &[(&str, Option<&str>)]) -> InheritanceGraph {
        let mut registry = ClassRegistry::new();
        for (name, parent) in decls {
            registry.record(ClassDeclaration::new(*name, *parent));
        }
        InheritanceGraph::from_registry(&registry)
    }

    #[test]
    fn test_quote_id() {
        assert_eq!(quote_id("Foo"), "\"Foo\"");
        assert_eq!(quote_id("Java.Expr"), "\"Java.Expr\"");
        assert_eq!(quote_id("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_graph_id() {
        assert_eq!(graph_id("G"), "G");
        assert_eq!(graph_id("_hier2"), "_hier2");
        assert_eq!(graph_id("my graph"), "\"my graph\"");
        assert_eq!(graph_id("2nd"), "\"2nd\"");
    }

    #[test]
    fn test_render_empty_graph() {
        let dot = DotRenderer::new().render(&InheritanceGraph::new());
        assert_eq!(dot, "digraph G {\n}\n");
    }

    #[test]
    fn test_render_nodes_then_edges() {
        let dot = DotRenderer::new().render(&graph(&[("Foo", Some("Bar"))]));
        assert_eq!(
            dot,
            "digraph G {\n    \"Bar\";\n    \"Foo\";\n    \"Bar\" -> \"Foo\";\n}\n"
        );
    }

    #[test]
    fn test_render_root_has_no_incoming_edge() {
        let dot = DotRenderer::new().render(&graph(&[("Base", None)]));
        assert!(dot.contains("\"Base\";"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn test_with_graph_name() {
        let dot = DotRenderer::new()
            .with_graph_name("Hierarchy")
            .render(&InheritanceGraph::new());
        assert!(dot.starts_with("digraph Hierarchy {"));
    }

    #[test]
    fn test_write_dot_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inheritance.dot");
        fs::write(&path, "stale content that is longer than the new one").unwrap();

        write_dot(&path, "digraph G {\n}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "digraph G {\n}\n");
    }

    #[test]
    fn test_write_dot_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.dot");

        let err = write_dot(&path, "digraph G {\n}\n").unwrap_err();

        assert!(matches!(err, Error::OutputCreate { .. }));
        assert!(!path.exists());
    }
}
