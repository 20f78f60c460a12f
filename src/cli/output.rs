/// User-facing output: dry-run commands on stdout, warnings and errors on stderr.
use std::io::{self, Write};

use crate::launcher::LaunchError;
use crate::launcher::options::ModeOverride;

/// Write the assembled command line, and nothing else, to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if `out` cannot be written.
pub fn write_command(out: &mut dyn Write, command: &str) -> io::Result<()> {
    writeln!(out, "{command}")?;
    out.flush()
}

/// Write one line per mode override to `err`.
pub fn write_warnings(err: &mut impl Write, overrides: &[ModeOverride]) {
    for warning in overrides {
        let _ = writeln!(err, "{warning}");
    }
}

/// Report a fatal error.
///
/// clap errors print themselves: help goes to stdout, usage errors to stderr.
pub fn write_error(err: &LaunchError) {
    match err {
        LaunchError::Argument(clap_err) => {
            let _ = clap_err.print();
        }
        other => {
            let stderr = io::stderr();
            let _ = writeln!(stderr.lock(), "{other}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::Mode;

    #[test]
    fn test_write_command_is_single_line() {
        let mut out = Vec::new();
        write_command(&mut out, "erl -run fn run shell").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "erl -run fn run shell\n");
    }

    #[test]
    fn test_write_warnings() {
        let overrides = [
            ModeOverride {
                previous: Mode::Shell,
                current: Mode::RunFunction,
            },
            ModeOverride {
                previous: Mode::RunFunction,
                current: Mode::RunFunction,
            },
        ];
        let mut err = Vec::new();
        write_warnings(&mut err, &overrides);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "warning! overriding s flag with r flag\nwarning! overriding r flag with r flag\n"
        );
    }
}
