//! CLI module for qlhier

mod args;

pub use args::Args;

use crate::analysis::{Analyzer, ScanReport};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
///
/// Always exits successfully; problems are printed and the run either
/// continues or stops without output.
pub fn run() -> ExitCode {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    init_logging(args.verbose);

    if let Err(e) = execute(args) {
        println!("{}", e);
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default = if verbose { "qlhier=debug" } else { "qlhier=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(args: Args) -> Result<()> {
    let Args {
        root,
        output,
        config,
        exclude,
        verbose,
    } = args;

    // Load config file if it exists
    let mut cfg = match &config {
        Some(config_path) => Config::load_or_default(config_path),
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    };

    // Merge CLI arguments (CLI takes precedence)
    cfg.merge_cli(root, output, exclude);

    if verbose {
        println!("Scanning: {}", cfg.scan.root.display());
        println!("Output: {}", cfg.output.path.display());
        println!("Extensions: {:?}", cfg.scan.extensions);
        if !cfg.scan.exclude.is_empty() {
            println!("Exclude: {:?}", cfg.scan.exclude);
        }
    }

    let analyzer = Analyzer::new(cfg)?.with_verbose(verbose);
    let report = analyzer.analyze();

    print_diagnostics(&report);

    let summary = analyzer.emit(&report)?;

    println!(
        "Wrote {}: {} classes, {} inheritance edges from {} files",
        summary.path.display(),
        summary.nodes,
        summary.edges,
        report.files_scanned
    );

    if verbose {
        let placeholders: Vec<&str> = report.registry.placeholders().collect();
        if !placeholders.is_empty() {
            println!("\nReferenced but never declared ({}):", placeholders.len());
            for name in placeholders.iter().take(10) {
                println!("  {}", name);
            }
            if placeholders.len() > 10 {
                println!("  ... and {} more", placeholders.len() - 10);
            }
        }
    }

    Ok(())
}

fn print_diagnostics(report: &ScanReport) {
    for diagnostic in &report.diagnostics {
        println!("{}", diagnostic);
    }
}
