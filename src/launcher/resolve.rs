/// Support-library directory resolution.
///
/// Resolution strategy (first match wins):
///
/// 1. **Override**: `$FNPATH` is set and non-empty. Used as-is, `/ebin` is
///    appended when rendering. The directory is not checked.
/// 2. **Development checkout**: `../ebin` exists relative to the working directory.
/// 3. **Installed layout**: `<dirname(dirname(argv0))>/ebin` exists.
/// 4. **Failure**: [`LaunchError::SupportDirNotFound`].
use std::path::Path;

use log::debug;

use super::errors::LaunchError;

/// Directory checked by tier 2, relative to the working directory.
pub const SIBLING_EBIN: &str = "../ebin";

/// Where the runtime's compiled support libraries live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportDir {
    /// `$FNPATH`, without the trailing `ebin`.
    Override(String),
    /// `../ebin`.
    Sibling,
    /// `<install root>/ebin`, already including `ebin`.
    Installed(String),
}

impl SupportDir {
    /// The directory to pass to `erl -pa`.
    #[must_use]
    pub fn ebin(&self) -> String {
        match self {
            Self::Override(root) => format!("{root}/ebin"),
            Self::Sibling => SIBLING_EBIN.to_owned(),
            Self::Installed(ebin) => ebin.clone(),
        }
    }
}

/// Resolve the support directory.
///
/// `cwd` anchors the relative probes, `launcher` is the program path as invoked (`argv[0]`).
///
/// # Errors
///
/// Returns `LaunchError::SupportDirNotFound` when no tier matches.
pub fn resolve_support_dir(
    env_override: Option<&str>,
    cwd: &Path,
    launcher: &str,
) -> Result<SupportDir, LaunchError> {
    if let Some(root) = env_override.filter(|r| !r.is_empty()) {
        debug!("support dir from $FNPATH: {root}");
        return Ok(SupportDir::Override(root.to_owned()));
    }

    if cwd.join(SIBLING_EBIN).is_dir() {
        debug!("support dir from working directory: {SIBLING_EBIN}");
        return Ok(SupportDir::Sibling);
    }

    let candidate = format!("{}/ebin", dirname(&dirname(launcher)));
    if cwd.join(&candidate).is_dir() {
        debug!("support dir from launcher location: {candidate}");
        return Ok(SupportDir::Installed(candidate));
    }

    Err(LaunchError::SupportDirNotFound { candidate })
}

/// POSIX `dirname(3)` on a string path.
///
/// `"fnc"` and `"."` give `"."`, `"/"` and `"/bin"` give `"/"`, trailing slashes are ignored.
#[must_use]
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { ".".to_owned() } else { "/".to_owned() };
    }
    match trimmed.rfind('/') {
        None => ".".to_owned(),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() {
                "/".to_owned()
            } else {
                parent.to_owned()
            }
        }
    }
}
