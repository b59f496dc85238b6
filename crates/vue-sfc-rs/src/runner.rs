//! Batch compilation over a workspace.

use crate::cli::Args;
use crate::config::Settings;
use globset::{Glob, GlobSet, GlobSetBuilder};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;
use sfc_compiler::{
    compile_document, DocumentContents, FsLoader, SourceDocument, TextEncoding,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Number of components processed.
    pub file_count: usize,
    /// Number of components that failed to compile.
    pub error_count: usize,
    /// Time taken.
    pub duration_ms: u64,
}

/// Drives discovery and parallel compilation of component files.
pub struct Runner {
    settings: Settings,
    files: Vec<PathBuf>,
}

impl Runner {
    /// Create a runner from parsed arguments.
    pub fn new(args: Args) -> Result<Self> {
        let settings = Settings::from_args(&args)?;
        Ok(Self {
            settings,
            files: args.files,
        })
    }

    /// Compile every component, reporting failures per document.
    pub fn run(&self) -> Result<RunResult> {
        let start = Instant::now();

        let files = if self.files.is_empty() {
            self.find_component_files()?
        } else {
            self.files.clone()
        };

        if files.is_empty() {
            return Err(miette!(
                "no .{} components found under {}",
                self.settings.ext,
                self.settings.workspace.display()
            ));
        }

        if self.settings.compile.debug {
            eprintln!("[vue-sfc-rs] found {} components", files.len());
        }

        // Each document's compilation owns its own state; nothing is
        // shared across the pool beyond the read-only settings.
        let failures: Vec<_> = files
            .par_iter()
            .filter_map(|path| self.compile_one(path).err().map(|err| (path.clone(), err)))
            .collect();

        for (path, err) in &failures {
            eprintln!("error: {}: {err:?}", path.display());
        }

        Ok(RunResult {
            file_count: files.len(),
            error_count: failures.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn compile_one(&self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        let document = SourceDocument {
            path: path.to_path_buf(),
            contents: DocumentContents::Buffer(bytes),
            encoding: TextEncoding::Utf8,
        };

        let artifact =
            compile_document(&document, &self.settings.compile, &FsLoader).into_diagnostic()?;

        let out_path = self.output_path(path);
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).into_diagnostic()?;
        }
        std::fs::write(&out_path, artifact.text().unwrap_or_default())
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {}", out_path.display()))?;
        Ok(())
    }

    /// Map an input path to its artifact path: `.js` extension, placed
    /// under the output directory when one is configured.
    fn output_path(&self, input: &Path) -> PathBuf {
        let with_ext = input.with_extension("js");
        match &self.settings.out_dir {
            Some(out_dir) => {
                let relative = with_ext
                    .strip_prefix(&self.settings.workspace)
                    .unwrap_or(&with_ext);
                out_dir.join(relative)
            }
            None => with_ext,
        }
    }

    fn find_component_files(&self) -> Result<Vec<PathBuf>> {
        let ignore = build_ignore_set(&self.settings.ignore)?;
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.settings.workspace)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.settings.ext.as_str()) {
                continue;
            }
            if ignore.is_match(path) {
                continue;
            }
            files.push(path.to_path_buf());
        }
        files.sort();
        Ok(files)
    }
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).into_diagnostic()?);
    }
    builder.build().into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn runner_with(settings: Settings) -> Runner {
        Runner {
            settings,
            files: Vec::new(),
        }
    }

    fn settings(workspace: &Path) -> Settings {
        Settings {
            workspace: workspace.to_path_buf(),
            out_dir: None,
            ext: "vue".to_string(),
            ignore: Vec::new(),
            compile: Default::default(),
        }
    }

    #[test]
    fn test_output_path_is_a_js_sibling_by_default() {
        let runner = runner_with(settings(Path::new("src")));
        assert_eq!(
            runner.output_path(Path::new("src/app/List.vue")),
            PathBuf::from("src/app/List.js")
        );
    }

    #[test]
    fn test_output_path_is_rebased_under_out_dir() {
        let mut s = settings(Path::new("src"));
        s.out_dir = Some(PathBuf::from("dist"));
        let runner = runner_with(s);
        assert_eq!(
            runner.output_path(Path::new("src/app/List.vue")),
            PathBuf::from("dist/app/List.js")
        );
    }

    #[test]
    fn test_discovery_filters_by_extension_and_ignore() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("vendor")).unwrap();
        std::fs::write(root.join("App.vue"), "<script>export default {}</script>").unwrap();
        std::fs::write(root.join("notes.txt"), "skip me").unwrap();
        std::fs::write(
            root.join("vendor/Lib.vue"),
            "<script>export default {}</script>",
        )
        .unwrap();

        let mut s = settings(root);
        s.ignore = vec!["**/vendor/**".to_string()];
        let runner = runner_with(s);
        let files = runner.find_component_files().unwrap();
        assert_eq!(files, vec![root.join("App.vue")]);
    }

    #[test]
    fn test_end_to_end_compile_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(
            root.join("App.vue"),
            "<template><div>Hi</div></template><script>export default { name: 'app' }</script>",
        )
        .unwrap();

        let runner = runner_with(settings(root));
        let result = runner.run().unwrap();
        assert_eq!(result.file_count, 1);
        assert_eq!(result.error_count, 0);

        let artifact = std::fs::read_to_string(root.join("App.js")).unwrap();
        assert!(artifact.contains("template: \"<div>Hi</div>\","));
    }
}
