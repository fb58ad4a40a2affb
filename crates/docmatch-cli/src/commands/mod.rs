pub mod inspect;
pub mod profiles;
pub mod validate;

use docmatch_core::error::DocmatchError;
use docmatch_core::profile::schema::ValidationProfile;
use std::path::PathBuf;

/// Resolve the profile from `--config` or `--profile`.
pub fn resolve_profile(
    preset: &str,
    config: Option<PathBuf>,
) -> Result<ValidationProfile, DocmatchError> {
    match config {
        Some(path) => docmatch_core::profile::load_profile(&path),
        None => docmatch_core::profile::builtin::load_preset(preset),
    }
}
