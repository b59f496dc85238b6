//! Injected read-file capability for `include`/`href` resolution.

use std::io;
use std::path::Path;

/// Read-file capability used to resolve `include` and `href` paths.
///
/// The compiler never walks the filesystem itself; the host injects
/// whatever resolution strategy it needs. Reads are treated as pure,
/// side-effect-free operations.
pub trait FileLoader {
    /// Read the file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Loader backed by the process filesystem, resolving paths relative to
/// the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl FileLoader for FsLoader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
