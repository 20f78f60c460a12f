/// `-r module function [arguments*]`: call a function through `erl -run`.
use crate::launcher::{LaunchError, Options};

/// Inner command for a function call: the positionals joined by spaces, then search paths.
///
/// # Errors
///
/// - `LaunchError::NoInput`: no positional arguments at all
/// - `LaunchError::MissingFunction`: only a module name was given
pub fn inner_command(options: &Options) -> Result<String, LaunchError> {
    match options.files.len() {
        0 => Err(LaunchError::NoInput),
        got @ 1 => Err(LaunchError::MissingFunction { got }),
        _ => Ok(format!(
            "{}{}",
            options.files.join(" "),
            options.search_suffix()
        )),
    }
}
