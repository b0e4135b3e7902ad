//! Source file loading

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A source file queued for review: its path plus UTF-8 contents
///
/// Read once per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    contents: String,
}

impl SourceFile {
    /// Read a source file from disk
    ///
    /// Fails with a path-carrying error when the file is missing or unreadable.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path).map_err(|source| Error::ReadFile {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, contents })
    }

    /// Construct a source file from already-loaded contents
    ///
    /// Used by tests and callers that read through other means.
    pub fn from_contents(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Path this file was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Whether the path carries a `.py` extension
    ///
    /// Other extensions are still reviewable; callers use this to warn.
    pub fn is_python(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("py"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_existing_file() {
        let mut file = NamedTempFile::with_suffix(".py").unwrap();
        writeln!(file, "def greet():\n    return 'hello'").unwrap();

        let source = SourceFile::read(file.path()).unwrap();
        assert_eq!(source.path(), file.path());
        assert!(source.contents().contains("def greet"));
    }

    #[test]
    fn test_read_missing_file() {
        let result = SourceFile::read("/nonexistent/path/12345.py");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/12345.py"));
    }

    #[test]
    fn test_is_python() {
        let py = SourceFile::from_contents("app/main.py", "");
        assert!(py.is_python());

        let upper = SourceFile::from_contents("SCRIPT.PY", "");
        assert!(upper.is_python());

        let rs = SourceFile::from_contents("src/main.rs", "");
        assert!(!rs.is_python());

        let bare = SourceFile::from_contents("Makefile", "");
        assert!(!bare.is_python());
    }
}
