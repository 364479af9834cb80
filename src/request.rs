use std::path::Path;

use crate::naming::{dash_case, DestinationPath};

/// Answers gathered by the project wizard.
///
/// Built once by the collector and passed by reference to every later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Name as the user typed it, minus leading and trailing whitespace.
    pub project_name: String,
    pub project_version: String,
    pub author: String,
    pub email: String,
}

impl ScaffoldRequest {
    pub fn dash_name(&self) -> String {
        dash_case(&self.project_name)
    }

    pub fn destination(&self, base_dir: &Path) -> DestinationPath {
        DestinationPath::resolve(base_dir, &self.project_name)
    }
}
