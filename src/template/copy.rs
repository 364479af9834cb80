use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SipaError};
use crate::request::ScaffoldRequest;

/// Copy the template tree into `<base_dir>/<dash-case(project_name)>` and return that path.
///
/// The destination must not exist yet. File contents are copied byte for byte; nothing is
/// rendered here. A failure part way through leaves whatever was already copied on disk and
/// reports the destination in the error.
pub fn materialize(
    request: &ScaffoldRequest,
    template_root: &Path,
    base_dir: &Path,
) -> Result<PathBuf> {
    if !template_root.is_dir() {
        return Err(SipaError::TemplateDirectoryMissing {
            path: template_root.to_path_buf(),
        });
    }

    let destination = request.destination(base_dir).into_path_buf();

    // create_dir (not create_dir_all) so a directory created since validation is caught
    std::fs::create_dir(&destination).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            SipaError::DestinationExists {
                path: destination.clone(),
            }
        } else {
            SipaError::Io {
                context: format!("creating project directory {}", destination.display()),
                source: e,
            }
        }
    })?;
    tracing::info!(destination = %destination.display(), "created project directory");

    copy_tree(template_root, &destination)?;

    Ok(destination)
}

fn copy_tree(template_root: &Path, destination: &Path) -> Result<()> {
    let copy_failed = |context: String, source: std::io::Error| SipaError::CopyFailed {
        destination: destination.to_path_buf(),
        context,
        source,
    };

    for entry in WalkDir::new(template_root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let context = match e.path() {
                Some(path) => format!("reading template entry {}", path.display()),
                None => format!("reading template {}", template_root.display()),
            };
            copy_failed(context, e.into())
        })?;

        let src_path = entry.path();
        let rel_path = src_path.strip_prefix(template_root).unwrap_or(src_path);
        let dest_path = destination.join(rel_path);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path).map_err(|e| {
                copy_failed(format!("creating directory {}", dest_path.display()), e)
            })?;
        } else {
            std::fs::copy(src_path, &dest_path).map_err(|e| {
                copy_failed(format!("copying {}", rel_path.display()), e)
            })?;
            tracing::debug!(file = %rel_path.display(), "copied");
        }
    }

    Ok(())
}
