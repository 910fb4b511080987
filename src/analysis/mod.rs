// Analysis module for building the class hierarchy of a QL source tree

pub mod graph;
pub mod registry;

pub use graph::*;
pub use registry::*;

use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::output::{write_dot, DotRenderer};
use crate::parser::LineParser;
use crate::walker::{walk_source_files, SourceFilter};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

/// Result of scanning a source tree
#[derive(Debug)]
pub struct ScanReport {
    /// Every class declared or referenced as a parent
    pub registry: ClassRegistry,
    /// Non-fatal problems, in the order they were hit
    pub diagnostics: Vec<Diagnostic>,
    /// Files handed to the parser
    pub files_scanned: usize,
    /// Declaration lines recorded
    pub declarations: usize,
}

/// What was written by [`Analyzer::emit`]
#[derive(Debug, Clone)]
pub struct EmitSummary {
    pub path: PathBuf,
    pub nodes: usize,
    pub edges: usize,
}

/// Main analyzer that orchestrates walk, parse and emit
pub struct Analyzer {
    config: Config,
    parser: LineParser,
    filter: SourceFilter,
    verbose: bool,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let parser = LineParser::new()?;
        let filter = SourceFilter::from_config(&config.scan)?;

        Ok(Self {
            config,
            parser,
            filter,
            verbose: false,
        })
    }

    /// Create analyzer with verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan the configured root and build the registry.
    ///
    /// Never fails: unreadable directories and files end up in
    /// `ScanReport::diagnostics`.
    pub fn analyze(&self) -> ScanReport {
        let root = &self.config.scan.root;
        info!(root = %root.display(), "scanning source tree");

        let mut registry = ClassRegistry::new();
        let mut diagnostics = Vec::new();
        let mut declarations = 0;

        let progress = if self.verbose {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {pos} files {msg}") {
                pb.set_style(style);
            }
            Some(pb)
        } else {
            None
        };

        let files_scanned = walk_source_files(root, &self.filter, &mut diagnostics, |path, diagnostics| {
            if let Some(ref pb) = progress {
                let msg = path.file_name().unwrap_or_default().to_string_lossy().to_string();
                pb.set_message(msg);
                pb.inc(1);
            }

            declarations += self.parser.parse_file(path, &mut registry, diagnostics);
        });

        if let Some(pb) = progress {
            pb.finish_with_message("scan complete");
        }

        info!(
            files = files_scanned,
            declarations,
            classes = registry.len(),
            diagnostics = diagnostics.len(),
            "scan finished"
        );

        ScanReport {
            registry,
            diagnostics,
            files_scanned,
            declarations,
        }
    }

    /// Render the report's graph as DOT text
    pub fn render(&self, report: &ScanReport) -> (InheritanceGraph, String) {
        let graph = InheritanceGraph::from_registry(&report.registry);
        let dot = DotRenderer::new()
            .with_graph_name(&self.config.output.graph_name)
            .render(&graph);
        (graph, dot)
    }

    /// Build the graph and write it to the configured output path
    pub fn emit(&self, report: &ScanReport) -> Result<EmitSummary> {
        let (graph, dot) = self.render(report);
        let path = self.config.output.path.clone();
        write_dot(&path, &dot)?;

        Ok(EmitSummary {
            path,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        })
    }
}
