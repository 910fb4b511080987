//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Render the class hierarchy of a CodeQL library as a Graphviz DOT file
#[derive(Parser, Debug)]
#[command(name = "qlhier")]
#[command(about = "Render the class hierarchy of a CodeQL library as a Graphviz DOT file")]
#[command(version)]
pub struct Args {
    /// Directory to scan for .ql and .qll files [default: ./ql/java]
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// DOT file to write [default: inheritance.dot]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path [default: qlhier.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob patterns to exclude, relative to the root (can be repeated)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }
}
