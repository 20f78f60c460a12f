/// Command dispatch: validate the mode, resolve the support directory, then print or run.
pub mod compile;
pub mod run_function;
pub mod shell;

use std::io::Write;

use log::debug;

use crate::cli::write_command;
use crate::config::Environment;
use crate::launcher::{
    LaunchError, Mode, Options, ProcessRunner, resolve_support_dir, runtime_command,
};

/// Build the mode-specific inner command.
///
/// # Errors
///
/// Returns `LaunchError::NoInput` / `LaunchError::MissingFunction` when the
/// positional arguments don't fit the mode.
pub fn inner_command(options: &Options) -> Result<String, LaunchError> {
    match options.mode {
        Some(Mode::Shell) => Ok(shell::inner_command(options)),
        Some(Mode::RunFunction) => run_function::inner_command(options),
        None => compile::inner_command(options),
    }
}

/// Run the launcher for already-parsed `options`.
///
/// On dry-run the final command is written to `out` and the status is 0;
/// otherwise `runner` executes it and its exit status is returned untouched.
///
/// # Errors
///
/// Returns `LaunchError` on validation or resolution failure, if the command
/// cannot be started, or if `out` cannot be written.
pub fn dispatch(
    options: &Options,
    env: &Environment,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<i32, LaunchError> {
    debug!("options: {options:?}");

    let inner = inner_command(options)?;
    let support = resolve_support_dir(env.path_override.as_deref(), &env.cwd, &env.launcher)?;
    let command = runtime_command(&inner, &support);
    debug!("command: {command}");

    if options.dry_run {
        write_command(out, &command)?;
        return Ok(0);
    }

    runner.run(&command)
}
