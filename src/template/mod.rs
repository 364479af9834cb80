pub mod copy;

use std::path::PathBuf;

pub use copy::materialize;

/// Location of the shipped project template, relative to an install root.
pub const DEFAULT_TEMPLATE: &str = "templates/project/default";

/// Find the shipped project template.
///
/// Looks next to the running executable first, then falls back to the source tree this
/// binary was built from.
pub fn default_template_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_TEMPLATE)));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TEMPLATE),
    }
}
