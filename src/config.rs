/// Process environment captured once at startup.
use std::ffi::OsString;
use std::path::PathBuf;

/// Names the efene install root; `/ebin` is appended to it.
pub const PATH_OVERRIDE_VAR: &str = "FNPATH";

/// Interpreter used to run the assembled command line.
pub const SHELL_VAR: &str = "FNC_SHELL";

/// `env_logger` filter for diagnostics.
pub const LOG_VAR: &str = "FNC_LOG";

/// Everything the launcher reads from its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// `$FNPATH`, if set.
    pub path_override: Option<String>,
    /// `$FNC_SHELL`, if set.
    pub shell: Option<String>,
    /// Working directory for relative probes.
    pub cwd: PathBuf,
    /// Program path as invoked (`argv[0]`).
    pub launcher: String,
}

impl Environment {
    /// Capture from the running process. `argv0` is the first command-line token.
    #[must_use]
    pub fn from_process(argv0: Option<&OsString>) -> Self {
        Self {
            path_override: non_empty_var(PATH_OVERRIDE_VAR),
            shell: non_empty_var(SHELL_VAR),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            launcher: argv0.map_or_else(
                || "fnc".to_owned(),
                |a| a.to_string_lossy().into_owned(),
            ),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Initialise `env_logger` from `$FNC_LOG`, defaulting to warnings only.
pub fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_VAR, "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
