//! [`TestProject`] builder for add-extension scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build descriptor file name, mirrored here to keep this crate free of
/// workspace dependencies.
pub const DESCRIPTOR_FILENAME: &str = "project.toml";

/// A temporary project directory with helper methods for setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use extcat_test_utils::project::TestProject;
///
/// let project = TestProject::with_descriptor("demo");
/// project.assert_file_exists("project.toml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project with a minimal `project.toml` naming it `name`.
    pub fn with_descriptor(name: &str) -> Self {
        let project = Self::new();
        project.write_descriptor(&format!("[project]\nname = \"{name}\"\n"));
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.root().join(DESCRIPTOR_FILENAME)
    }

    /// Overwrite `project.toml` with raw content.
    pub fn write_descriptor(&self, content: &str) {
        fs::write(self.descriptor_path(), content).unwrap();
    }

    pub fn descriptor(&self) -> String {
        fs::read_to_string(self.descriptor_path()).unwrap_or_else(|_| {
            panic!(
                "Could not read descriptor: {}",
                self.descriptor_path().display()
            )
        })
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `project.toml` contains `content`.
    ///
    /// # Panics
    /// Panics if the descriptor cannot be read or does not contain `content`.
    pub fn assert_descriptor_contains(&self, content: &str) {
        let actual = self.descriptor();
        assert!(
            actual.contains(content),
            "Descriptor does not contain expected content.\nExpected: {}\nActual: {}",
            content,
            actual
        );
    }

    /// Assert that `project.toml` does **not** contain `content`.
    pub fn assert_descriptor_lacks(&self, content: &str) {
        let actual = self.descriptor();
        assert!(
            !actual.contains(content),
            "Descriptor unexpectedly contains: {}\nActual: {}",
            content,
            actual
        );
    }
}
