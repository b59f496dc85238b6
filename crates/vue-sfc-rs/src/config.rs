//! Configuration loading and merging.

use crate::cli::Args;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;
use sfc_compiler::{CompileOptions, SassOptions};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "sfc.config.json";

/// On-disk configuration, all fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigFile {
    /// Trace each document as it is processed.
    pub debug: Option<bool>,
    /// Invocation expression for the style-loading call.
    pub load_css_method: Option<String>,
    /// Directory for compiled artifacts.
    pub out_dir: Option<PathBuf>,
    /// Component file extension.
    pub ext: Option<String>,
    /// Ignore patterns.
    pub ignore: Vec<String>,
    /// Extra import directories for the SASS-family compile.
    pub sass_load_paths: Vec<PathBuf>,
}

impl ConfigFile {
    /// Load an explicit config file, or `sfc.config.json` from the
    /// workspace if present, or defaults.
    pub fn load(workspace: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = workspace.join(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text)
            .into_diagnostic()
            .wrap_err_with(|| format!("parsing {}", path.display()))
    }
}

/// Effective settings after merging the config file and CLI flags.
/// CLI flags take precedence on conflicts.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Workspace root directory.
    pub workspace: PathBuf,
    /// Output directory, if redirecting artifacts.
    pub out_dir: Option<PathBuf>,
    /// Component file extension.
    pub ext: String,
    /// Ignore patterns.
    pub ignore: Vec<String>,
    /// Per-document compile options.
    pub compile: CompileOptions,
}

impl Settings {
    /// Merge CLI arguments with the loaded config file.
    pub fn from_args(args: &Args) -> Result<Self> {
        let workspace = args.workspace.clone().unwrap_or_else(|| PathBuf::from("."));
        let file = ConfigFile::load(&workspace, args.config.as_deref())?;

        let mut compile = CompileOptions {
            debug: args.debug || file.debug.unwrap_or(false),
            ..CompileOptions::default()
        };
        if let Some(method) = args.load_css_method.clone().or(file.load_css_method) {
            compile.load_css_method = method;
        }
        compile.sass = SassOptions {
            load_paths: file.sass_load_paths,
            ..SassOptions::default()
        };

        let mut ignore = file.ignore;
        ignore.extend(args.ignore.iter().cloned());

        Ok(Self {
            workspace,
            out_dir: args.out_dir.clone().or(file.out_dir),
            ext: args
                .ext
                .clone()
                .or(file.ext)
                .unwrap_or_else(|| "vue".to_string()),
            ignore,
            compile,
        })
    }
}
