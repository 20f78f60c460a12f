/// CLI argument definitions via clap derive.
use std::ffi::OsString;

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use crate::launcher::options::ModeOverride;
use crate::launcher::{LaunchError, Mode, Options, OptionsBuilder};

const EXAMPLES: &str = "\
Examples:
  fnc foo.ifn                  compile foo.ifn, write the result in the current directory
  fnc foo.ifn bar.fn baz.ifn   same as before but multiple files compiled
  fnc foo.ifn -o /tmp          compile foo.ifn, write the result in /tmp
  fnc -t beam -o /tmp foo.ifn  same as before but with the type set
  fnc -t erl foo.ifn           translate foo.ifn to erlang
  fnc -r foo run               runs the run function in the foo module
  fnc -s                       run the interactive shell

Environment:
  FNPATH     efene install root; its ebin directory is put on the code path
  FNC_SHELL  program used to run the assembled command (default: sh)
  FNC_LOG    log filter for diagnostics (default: warn)";

/// fnc: efene compiler, shell and module runner.
#[derive(Debug, Parser)]
#[command(
    name = "fnc",
    about = "Compile efene files, run the efene shell or call a module function",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Output path, where the compiled files will be written.
    #[arg(
        short = 'o',
        value_name = "PATH",
        overrides_with = "output_path",
        allow_hyphen_values = true
    )]
    pub output_path: Option<String>,

    /// Output type: beam (the default), lex, tree, ast, mod, erl or erl2ast.
    #[arg(
        short = 't',
        value_name = "TYPE",
        overrides_with = "output_type",
        allow_hyphen_values = true
    )]
    pub output_type: Option<String>,

    /// Run the interactive shell.
    #[arg(short = 's', action = ArgAction::Count)]
    pub shell: u8,

    /// Run `function` from `module`, passing the remaining arguments.
    #[arg(short = 'r', action = ArgAction::Count)]
    pub run: u8,

    /// Test: print the command instead of running it.
    #[arg(short = 'T', action = ArgAction::Count)]
    pub test: u8,

    /// Append a path to look for modules (repeatable).
    #[arg(
        short = 'a',
        value_name = "PATH",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub append: Vec<String>,

    /// Prepend a path to look for modules (repeatable).
    #[arg(
        short = 'p',
        value_name = "PATH",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub prepend: Vec<String>,

    /// Files to compile, or `module function [arguments*]` with -r.
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Short flags that consume a value.
const VALUE_FLAGS: [char; 4] = ['o', 't', 'a', 'p'];

/// Short flags that take no value.
const SWITCH_FLAGS: [char; 4] = ['s', 'r', 'T', 'h'];

/// Parse the full argument vector (including `argv[0]`) into finalized [`Options`].
///
/// # Errors
///
/// Returns `LaunchError::Argument` for unknown flags, missing flag values,
/// and `-h` display requests.
pub fn parse_options<I, T>(args: I) -> Result<Options, LaunchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let matches = Cli::command().try_get_matches_from(&args)?;
    let cli = Cli::from_arg_matches(&matches)?;

    let mut builder = OptionsBuilder::new();
    if cli.shell > 0 || cli.run > 0 {
        for mode in mode_flags_in_order(args.get(1..).unwrap_or_default()) {
            builder.set_mode(mode);
        }
    }
    if let Some(output_type) = cli.output_type {
        builder.output_type(output_type);
    }
    if let Some(output_path) = cli.output_path {
        builder.output_path(output_path);
    }
    for path in cli.append {
        builder.append_path(path);
    }
    for path in cli.prepend {
        builder.prepend_path(path);
    }
    builder.dry_run(cli.test > 0);

    Ok(builder.finish(cli.args))
}

/// Mode overrides seen in `args` (including `argv[0]`) up to the first flag
/// clap would reject.
///
/// Used to report warnings for a command line that failed to parse.
#[must_use]
pub fn mode_overrides(args: &[OsString]) -> Vec<ModeOverride> {
    let mut builder = OptionsBuilder::new();
    for mode in mode_flags_in_order(args.get(1..).unwrap_or_default()) {
        builder.set_mode(mode);
    }
    builder.finish(Vec::new()).overrides
}

/// Occurrences of `-s` / `-r` in command-line order.
///
/// clap keeps only a saturating count and the last index of a counted flag,
/// so the order is recovered from the raw tokens. Scanning stops at the
/// first unknown flag.
fn mode_flags_in_order(tokens: &[OsString]) -> Vec<Mode> {
    let mut modes = Vec::new();
    let mut skip_value = false;

    for token in tokens {
        if skip_value {
            skip_value = false;
            continue;
        }
        let token = token.to_string_lossy();
        if token == "--" {
            break;
        }
        let Some(cluster) = token.strip_prefix('-') else {
            continue;
        };
        if cluster.is_empty() || cluster == "-help" {
            continue;
        }
        if cluster.starts_with('-') {
            return modes;
        }
        for (i, flag) in cluster.char_indices() {
            match flag {
                's' => modes.push(Mode::Shell),
                'r' => modes.push(Mode::RunFunction),
                f if VALUE_FLAGS.contains(&f) => {
                    // value is either attached (`-ofoo`) or the next token
                    skip_value = i + f.len_utf8() == cluster.len();
                    break;
                }
                f if SWITCH_FLAGS.contains(&f) => {}
                _ => return modes,
            }
        }
    }

    modes
}
