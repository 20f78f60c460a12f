#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! fnc: compile efene files, run the efene shell, or call a module function, through `erl`.

mod cli;
mod commands;
mod config;
mod launcher;

use std::ffi::OsString;
use std::io;

use cli::args::mode_overrides;
use cli::{parse_options, write_error, write_warnings};
use config::Environment;
use launcher::{LaunchError, SystemShell};

fn main() {
    config::init_logging();

    let args: Vec<OsString> = std::env::args_os().collect();
    let env = Environment::from_process(args.first());

    let status = parse_options(&args)
        .inspect_err(|err| {
            if let LaunchError::Argument(_) = err {
                write_warnings(&mut io::stderr().lock(), &mode_overrides(&args));
            }
        })
        .and_then(|options| {
            write_warnings(&mut io::stderr().lock(), &options.overrides);
            let mut runner = SystemShell::new(env.shell.as_deref());
            commands::dispatch(&options, &env, &mut runner, &mut io::stdout().lock())
        });

    match status {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
