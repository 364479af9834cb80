pub mod config;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod prompt;
pub mod render;
pub mod request;
pub mod template;

use std::path::{Path, PathBuf};

use console::style;

use crate::config::{load_user_config, UserConfig};
use crate::error::Result;
use crate::naming::NameValidator;
use crate::prompt::{collect, InquirePrompter, Prompter};
use crate::render::{apply, SubstitutionReport, UnresolvedPolicy, VariableBindings};
use crate::request::ScaffoldRequest;
use crate::template::{default_template_dir, materialize};

/// Everything the non-interactive pipeline needs besides the request itself.
pub struct ScaffoldOptions {
    pub template_dir: PathBuf,
    /// Directory the project directory is created in.
    pub base_dir: PathBuf,
    pub policy: UnresolvedPolicy,
}

impl ScaffoldOptions {
    pub fn from_config(config: &UserConfig, base_dir: &Path) -> Self {
        Self {
            template_dir: config
                .template_dir
                .clone()
                .unwrap_or_else(default_template_dir),
            base_dir: base_dir.to_path_buf(),
            policy: config.unresolved,
        }
    }
}

pub struct ScaffoldedProject {
    pub destination: PathBuf,
    pub bindings: VariableBindings,
    pub report: SubstitutionReport,
}

/// Copy the template, write the descriptor, then fill in placeholders.
///
/// Stops at the first error. Anything already written stays on disk.
pub fn scaffold(request: &ScaffoldRequest, options: &ScaffoldOptions) -> Result<ScaffoldedProject> {
    tracing::info!(template = %options.template_dir.display(), "copying project template");
    let destination = materialize(request, &options.template_dir, &options.base_dir)?;

    tracing::info!("writing project descriptor");
    let bindings = descriptor::write_descriptor(request, &destination)?;

    tracing::info!(policy = ?options.policy, "substituting placeholders");
    let report = apply(&destination, &bindings, options.policy)?;

    Ok(ScaffoldedProject {
        destination,
        bindings,
        report,
    })
}

/// Interactive `new` command: ask for the project metadata and scaffold it in the current
/// directory.
pub fn run_new_project_wizard() -> Result<ScaffoldedProject> {
    let config = load_user_config()?;
    let validator = NameValidator::from_current_dir()?;
    let mut prompter = InquirePrompter;
    run_wizard(&mut prompter, &validator, &config)
}

/// The wizard with its collaborators supplied by the caller.
pub fn run_wizard(
    prompter: &mut dyn Prompter,
    validator: &NameValidator,
    config: &UserConfig,
) -> Result<ScaffoldedProject> {
    print_section(
        "Create new project",
        &[
            "Welcome to the project wizard to create a new sipa project!",
            "Answer the questions wisely!",
        ],
    );

    let request = collect(prompter, validator, &config.defaults)?;

    print_section("Creating project ...", &[]);
    let options = ScaffoldOptions::from_config(config, validator.base_dir());
    let project = scaffold(&request, &options)?;

    println!(
        "  {} {}",
        style("Project dir").bold(),
        style(project.destination.display()).green()
    );
    println!(
        "  {} files fitted, {} left as is",
        project.report.files_rewritten.len(),
        project.report.files_unchanged.len() + project.report.files_skipped.len()
    );

    print_section(
        "Ready to start!",
        &[
            "Hey, your basic project has been created, it's time to have fun again!",
            "",
            format!(
                "To start the development server, {} into your project directory and run {}.",
                style(format!("cd {}", request.dash_name())).green(),
                style("sipa server").green()
            )
            .as_str(),
        ],
    );

    Ok(project)
}

fn print_section(header: &str, lines: &[&str]) {
    println!("\n{}", style(header).cyan().bold());
    for line in lines {
        println!("  {line}");
    }
}
