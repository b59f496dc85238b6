//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Single-file component compiler
#[derive(Parser, Debug, Clone)]
#[command(name = "vue-sfc-rs")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Component files to compile (defaults to scanning the workspace)
    pub files: Vec<PathBuf>,

    /// Workspace directory to scan
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Directory for compiled artifacts (defaults to .js siblings)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Component file extension to scan for
    #[arg(long)]
    pub ext: Option<String>,

    /// Invocation expression for the style-loading call
    #[arg(long)]
    pub load_css_method: Option<String>,

    /// Path to a JSON config file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Ignore patterns (glob)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Trace each document as it is processed
    #[arg(short, long)]
    pub debug: bool,
}
