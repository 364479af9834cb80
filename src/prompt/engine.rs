use console::style;

use crate::config::PromptDefaults;
use crate::error::{Result, SipaError};
use crate::naming::NameValidator;
use crate::request::ScaffoldRequest;

/// Source of answers for the project wizard.
pub trait Prompter {
    /// Ask a free-text question. `default` is offered to the user when present.
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Tell the user an answer was rejected.
    fn reject(&mut self, message: &str);
}

/// Terminal prompter backed by inquire.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut prompt = inquire::Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        prompt.prompt().map_err(|_| SipaError::PromptCancelled)
    }

    fn reject(&mut self, message: &str) {
        eprintln!("  {}", style(message).red());
    }
}

/// Ask for a project name until one maps to a free destination directory, then ask for
/// version, author and email.
///
/// There is no attempt limit; cancelling the prompt is the only way out of the name loop.
/// Empty answers to the later questions fall back to `defaults`.
pub fn collect(
    prompter: &mut dyn Prompter,
    validator: &NameValidator,
    defaults: &PromptDefaults,
) -> Result<ScaffoldRequest> {
    let project_name = loop {
        let answer = prompter.text("Please enter your project name", None)?;
        let candidate = answer.trim();

        if candidate.is_empty() {
            prompter.reject("A project name is required.");
            continue;
        }

        let destination = validator.destination(candidate);
        if destination.dir_name().is_empty() {
            prompter.reject(&format!(
                "Project name '{candidate}' has no letters or digits to build a directory name from."
            ));
            continue;
        }

        if validator.is_available(candidate) {
            break candidate.to_string();
        }

        tracing::debug!(path = %destination.path().display(), "destination taken");
        prompter.reject(&format!(
            "Invalid project name '{candidate}'. There is already a directory '{}'.",
            destination.dir_name()
        ));
    };

    let project_version = ask_with_default(
        prompter,
        "Please enter your initial project version",
        &defaults.version,
    )?;
    let author = ask_with_default(
        prompter,
        "Please enter your project author name",
        &defaults.author,
    )?;
    let email = ask_with_default(
        prompter,
        "Please enter your project author email address",
        &defaults.email,
    )?;

    Ok(ScaffoldRequest {
        project_name,
        project_version,
        author,
        email,
    })
}

fn ask_with_default(prompter: &mut dyn Prompter, message: &str, default: &str) -> Result<String> {
    let offered = (!default.is_empty()).then_some(default);
    let answer = prompter.text(message, offered)?;
    let answer = answer.trim();

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Prompter that replays canned answers, for tests and non-interactive callers.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    /// Every question asked, in order.
    pub questions: Vec<String>,
    /// Every rejection shown, in order.
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, _default: Option<&str>) -> Result<String> {
        self.questions.push(message.to_string());
        self.answers.pop_front().ok_or(SipaError::PromptCancelled)
    }

    fn reject(&mut self, message: &str) {
        self.rejections.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_all_fields() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter = ScriptedPrompter::new(["Demo", "1.2.0", "Ann", "ann@example.com"]);

        let request = collect(&mut prompter, &validator, &PromptDefaults::default()).unwrap();

        assert_eq!(
            request,
            ScaffoldRequest {
                project_name: "Demo".to_string(),
                project_version: "1.2.0".to_string(),
                author: "Ann".to_string(),
                email: "ann@example.com".to_string(),
            }
        );
        assert_eq!(prompter.questions.len(), 4);
        assert!(prompter.rejections.is_empty());
    }

    #[test]
    fn test_collect_applies_defaults_for_empty_answers() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter = ScriptedPrompter::new(["Demo", "", "  ", ""]);

        let request = collect(&mut prompter, &validator, &PromptDefaults::default()).unwrap();

        assert_eq!(request.project_version, "0.0.1");
        assert_eq!(request.author, "");
        assert_eq!(request.email, "");
    }

    #[test]
    fn test_collect_uses_configured_defaults() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let defaults = PromptDefaults {
            version: "2.0.0".to_string(),
            author: "Bo".to_string(),
            email: "bo@example.com".to_string(),
        };
        let mut prompter = ScriptedPrompter::new(["Demo", "", "", ""]);

        let request = collect(&mut prompter, &validator, &defaults).unwrap();

        assert_eq!(request.project_version, "2.0.0");
        assert_eq!(request.author, "Bo");
        assert_eq!(request.email, "bo@example.com");
    }

    #[test]
    fn test_collect_reprompts_on_collision() {
        let base = tempfile::tempdir().unwrap();
        fs::create_dir(base.path().join("my-app")).unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter =
            ScriptedPrompter::new(["My App", "my_app", "Fresh App", "0.1.0", "", ""]);

        let request = collect(&mut prompter, &validator, &PromptDefaults::default()).unwrap();

        assert_eq!(request.project_name, "Fresh App");
        assert_eq!(prompter.rejections.len(), 2);
        assert!(prompter.rejections[0].contains("'my-app'"));
        assert!(prompter.rejections[0].contains("'My App'"));
    }

    #[test]
    fn test_collect_reprompts_on_empty_name() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter = ScriptedPrompter::new(["", "   ", "Demo", "", "", ""]);

        let request = collect(&mut prompter, &validator, &PromptDefaults::default()).unwrap();

        assert_eq!(request.project_name, "Demo");
        assert_eq!(prompter.rejections.len(), 2);
    }

    #[test]
    fn test_collect_reprompts_on_unusable_name() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter = ScriptedPrompter::new(["!!!", "Demo", "", "", ""]);

        let request = collect(&mut prompter, &validator, &PromptDefaults::default()).unwrap();

        assert_eq!(request.project_name, "Demo");
        assert_eq!(prompter.rejections.len(), 1);
        assert!(prompter.rejections[0].contains("'!!!'"));
        assert!(!prompter.rejections[0].contains("already a directory"));
    }

    #[test]
    fn test_collect_trims_project_name() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter = ScriptedPrompter::new(["  My App  ", "", "", ""]);

        let request = collect(&mut prompter, &validator, &PromptDefaults::default()).unwrap();

        assert_eq!(request.project_name, "My App");
        assert_eq!(request.dash_name(), "my-app");
    }

    #[test]
    fn test_collect_cancelled() {
        let base = tempfile::tempdir().unwrap();
        let validator = NameValidator::new(base.path());
        let mut prompter = ScriptedPrompter::new(["Demo", "1.0.0"]);

        let result = collect(&mut prompter, &validator, &PromptDefaults::default());
        assert!(matches!(result, Err(SipaError::PromptCancelled)));
    }
}
