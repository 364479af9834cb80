#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SipaError {
    #[error("Destination directory already exists: {path}")]
    #[diagnostic(help("Choose another project name or remove the existing directory"))]
    DestinationExists { path: PathBuf },

    #[error("Template directory not found: {path}")]
    #[diagnostic(help("Set `template_dir` in your sipa config.toml to a valid project template"))]
    TemplateDirectoryMissing { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy template into {destination}: {context}")]
    #[diagnostic(help(
        "The destination was left partially populated; remove {destination} manually before retrying",
        destination = destination.display()
    ))]
    CopyFailed {
        destination: PathBuf,
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize the project descriptor")]
    DescriptorSerialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unresolved placeholder '{{{{{token}}}}}' in {file}")]
    #[diagnostic(help("Bind the variable or switch `unresolved` to \"keep\" or \"remove\""))]
    UnresolvedPlaceholder { file: PathBuf, token: String },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("Check the TOML syntax in your sipa config.toml"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

pub type Result<T> = std::result::Result<T, SipaError>;
