/// Handing the assembled command line to the operating system.
use std::process::{Command, ExitStatus, Stdio};

use log::info;

use super::errors::LaunchError;

/// Something that can run a command line and report its exit status.
pub trait ProcessRunner {
    /// Run `command` to completion and return its exit status.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::Spawn` if the command could not be started.
    fn run(&mut self, command: &str) -> Result<i32, LaunchError>;
}

/// Runs commands through the platform shell, like `system(3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemShell {
    program: String,
    flag: &'static str,
}

impl SystemShell {
    /// Use `program` as the interpreter, or the platform default when `None`.
    #[must_use]
    pub fn new(program: Option<&str>) -> Self {
        let flag = if cfg!(target_os = "windows") { "/C" } else { "-c" };
        let default = if cfg!(target_os = "windows") { "cmd" } else { "sh" };
        Self {
            program: program.unwrap_or(default).to_owned(),
            flag,
        }
    }
}

impl ProcessRunner for SystemShell {
    fn run(&mut self, command: &str) -> Result<i32, LaunchError> {
        info!("running: {} {} {command}", self.program, self.flag);
        let status = Command::new(&self.program)
            .arg(self.flag)
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        Ok(exit_code(status))
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map_or(1, |signal| 128 + signal)
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    1
}
