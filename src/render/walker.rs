use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SipaError};
use crate::render::context::{UnresolvedPolicy, VariableBindings};
use crate::render::file::{read_text, substitute, UnresolvedName};

/// A file whose content changes after substitution.
pub struct PlannedRewrite {
    /// Path relative to the substitution root.
    pub relative_path: PathBuf,
    pub content: String,
}

/// The result of substituting every file in memory without writing to disk.
pub struct SubstitutionPlan {
    pub rewrites: Vec<PlannedRewrite>,
    pub unchanged: Vec<PathBuf>,
    /// Files that are not valid text and are left alone.
    pub skipped: Vec<PathBuf>,
}

pub struct SubstitutionReport {
    pub files_rewritten: Vec<PathBuf>,
    pub files_unchanged: Vec<PathBuf>,
    pub files_skipped: Vec<PathBuf>,
}

/// Walk every regular file under `root` and compute its substituted content.
///
/// Directories are descended into, symlinks and other special files are ignored. Files are
/// visited in file-name order. Under [`UnresolvedPolicy::Fail`] the first unbound
/// placeholder aborts planning, so nothing has been written yet.
pub fn plan_substitution(
    root: &Path,
    bindings: &VariableBindings,
    policy: UnresolvedPolicy,
) -> Result<SubstitutionPlan> {
    let mut plan = SubstitutionPlan {
        rewrites: Vec::new(),
        unchanged: Vec::new(),
        skipped: Vec::new(),
    };

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SipaError::Io {
            context: format!("walking {}", root.display()),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();

        let Some(original) = read_text(path)? else {
            tracing::debug!(file = %rel_path.display(), "skipping non-text file");
            plan.skipped.push(rel_path);
            continue;
        };

        let rendered = substitute(&original, bindings, policy).map_err(|UnresolvedName(token)| {
            SipaError::UnresolvedPlaceholder {
                file: path.to_path_buf(),
                token,
            }
        })?;

        if rendered == original {
            plan.unchanged.push(rel_path);
        } else {
            tracing::debug!(file = %rel_path.display(), "placeholders substituted");
            plan.rewrites.push(PlannedRewrite {
                relative_path: rel_path,
                content: rendered,
            });
        }
    }

    Ok(plan)
}

/// Write the rewrites from a substitution plan back into `root`.
pub fn execute_substitution(root: &Path, plan: SubstitutionPlan) -> Result<SubstitutionReport> {
    let mut files_rewritten = Vec::with_capacity(plan.rewrites.len());

    for rewrite in plan.rewrites {
        let dest_path = root.join(&rewrite.relative_path);
        std::fs::write(&dest_path, &rewrite.content).map_err(|e| SipaError::Io {
            context: format!("writing {}", dest_path.display()),
            source: e,
        })?;
        files_rewritten.push(rewrite.relative_path);
    }

    Ok(SubstitutionReport {
        files_rewritten,
        files_unchanged: plan.unchanged,
        files_skipped: plan.skipped,
    })
}

/// Rewrite placeholders in place in every regular file under `root`.
///
/// Files without any change are not written, so their modification time is kept.
pub fn apply(
    root: &Path,
    bindings: &VariableBindings,
    policy: UnresolvedPolicy,
) -> Result<SubstitutionReport> {
    let plan = plan_substitution(root, bindings, policy)?;
    execute_substitution(root, plan)
}
