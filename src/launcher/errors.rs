/// Errors from the launcher layer.
use thiserror::Error;

/// Everything that can stop the launcher before (or while) handing off to the runtime.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Unknown flag, missing flag value, or a help display request.
    #[error(transparent)]
    Argument(#[from] clap::Error),

    /// Compile or run-function mode without any positional argument.
    #[error("at least one extra argument required")]
    NoInput,

    /// Run-function mode needs a module and a function name.
    #[error("at least two arguments required, got {got}\n -r module function [arguments*]")]
    MissingFunction {
        /// Number of positional arguments actually given.
        got: usize,
    },

    /// None of the three search tiers produced an existing directory.
    #[error(
        "$FNPATH is not defined, {candidate} and ../ebin don't exist, options:\n \
         * set $FNPATH to the path where efene is installed\n \
         * run fnc -s from the bin directory\n \
         * stop doing magic tricks with your path"
    )]
    SupportDirNotFound {
        /// The `<launcher>/../../ebin` path that was probed last.
        candidate: String,
    },

    /// The command interpreter could not be started at all.
    #[error("could not start '{program}': {source}")]
    Spawn {
        /// Interpreter program name.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl LaunchError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument(err) => err.exit_code(),
            Self::NoInput
            | Self::MissingFunction { .. }
            | Self::SupportDirNotFound { .. }
            | Self::Spawn { .. }
            | Self::Output(_) => 1,
        }
    }
}
