use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SipaError};
use crate::render::VariableBindings;
use crate::request::ScaffoldRequest;

/// File written at the root of every generated project.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Field order here is the order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl ProjectDescriptor {
    pub fn from_request(request: &ScaffoldRequest) -> Self {
        Self {
            name: request.dash_name(),
            description: request.project_name.clone(),
            version: request.project_version.clone(),
            author: Author {
                name: request.author.clone(),
                email: request.email.clone(),
            },
        }
    }

    /// The variables template files may reference.
    pub fn bindings(&self) -> VariableBindings {
        [
            ("version", self.version.as_str()),
            ("project_name", self.name.as_str()),
        ]
        .into_iter()
        .collect()
    }
}

/// Write `package.json` into `destination_root` and return the substitution bindings.
///
/// An existing descriptor (one shipped inside the template) is replaced.
pub fn write_descriptor(
    request: &ScaffoldRequest,
    destination_root: &Path,
) -> Result<VariableBindings> {
    let descriptor = ProjectDescriptor::from_request(request);
    let path = destination_root.join(DESCRIPTOR_FILE);

    if path.exists() {
        tracing::warn!(
            path = %path.display(),
            "template ships its own descriptor, replacing it"
        );
    }

    let content = serde_json::to_string_pretty(&descriptor)
        .map_err(|e| SipaError::DescriptorSerialize { source: e })?;

    std::fs::write(&path, content).map_err(|e| SipaError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })?;

    Ok(descriptor.bindings())
}
