use std::path::{Path, PathBuf};

use cruet::Inflector;

use crate::error::{Result, SipaError};

/// Canonical lowercase, hyphen-separated form of a project name.
///
/// `"My App"` becomes `"my-app"`, `"myApp"` becomes `"my-app"`.
pub fn dash_case(name: &str) -> String {
    name.trim().to_kebab_case()
}

/// Where a project lands on disk: `<base_dir>/<dash-case(project_name)>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPath {
    dir_name: String,
    path: PathBuf,
}

impl DestinationPath {
    pub fn resolve(base_dir: &Path, project_name: &str) -> Self {
        let dir_name = dash_case(project_name);
        let path = base_dir.join(&dir_name);
        Self { dir_name, path }
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// True when nothing (file, directory or dangling symlink) occupies the path.
    ///
    /// The answer can go stale if another process creates the path before it is used.
    pub fn is_free(&self) -> bool {
        !self.dir_name.is_empty() && std::fs::symlink_metadata(&self.path).is_err()
    }
}

/// Decides whether a candidate project name maps to a free destination directory.
#[derive(Debug, Clone)]
pub struct NameValidator {
    base_dir: PathBuf,
}

impl NameValidator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn from_current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir().map_err(|e| SipaError::Io {
            context: "getting current directory".into(),
            source: e,
        })?;
        Ok(Self::new(base_dir))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn destination(&self, candidate: &str) -> DestinationPath {
        DestinationPath::resolve(&self.base_dir, candidate)
    }

    pub fn is_available(&self, candidate: &str) -> bool {
        self.destination(candidate).is_free()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("My App", "my-app")]
    #[case("Demo", "demo")]
    #[case("myApp", "my-app")]
    #[case("my_app", "my-app")]
    #[case("  spaced out  ", "spaced-out")]
    #[case("already-dashed", "already-dashed")]
    fn test_dash_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(dash_case(input), expected);
    }

    #[test]
    fn test_destination_joins_base_dir() {
        let dest = DestinationPath::resolve(Path::new("/work"), "My App");
        assert_eq!(dest.dir_name(), "my-app");
        assert_eq!(dest.path(), Path::new("/work/my-app"));
    }

    #[test]
    fn test_is_available_detects_existing_directory() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("my-app")).unwrap();

        let validator = NameValidator::new(base.path());
        assert!(!validator.is_available("My App"));
        assert!(validator.is_available("Other App"));
    }

    #[test]
    fn test_is_available_detects_existing_file() {
        let base = tempfile::tempdir().unwrap();
        std::fs::write(base.path().join("demo"), "occupied").unwrap();

        let validator = NameValidator::new(base.path());
        assert!(!validator.is_available("Demo"));
    }

    #[test]
    fn test_blank_name_is_never_available() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        assert!(!validator.is_available("   "));
    }
}
