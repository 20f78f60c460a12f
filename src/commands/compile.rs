/// Default mode: compile (or translate) files through `fn run <type>`.
use crate::launcher::options::DEFAULT_OUTPUT_TYPE;
use crate::launcher::{BUILD_ENTRY, LaunchError, Options};

/// Inner command for compilation.
///
/// Only `beam` output is placed by the launcher, so only `beam` gets the
/// quoted output path. Search paths are not forwarded to the compiler.
///
/// # Errors
///
/// Returns `LaunchError::NoInput` when no files were given.
pub fn inner_command(options: &Options) -> Result<String, LaunchError> {
    if options.files.is_empty() {
        return Err(LaunchError::NoInput);
    }
    let files = options.files.join(" ");

    Ok(if options.output_type == DEFAULT_OUTPUT_TYPE {
        format!(
            "{BUILD_ENTRY} {} \"{}\" {files}",
            options.output_type, options.output_path
        )
    } else {
        format!("{BUILD_ENTRY} {} {files}", options.output_type)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::OptionsBuilder;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    #[test]
    fn test_beam_defaults() {
        let opts = OptionsBuilder::new().finish(files(&["foo.ifn"]));
        assert_eq!(inner_command(&opts).unwrap(), "fn run beam \".\" foo.ifn");
    }

    #[test]
    fn test_beam_with_output_path_and_many_files() {
        let mut b = OptionsBuilder::new();
        b.output_path("/tmp");
        let opts = b.finish(files(&["foo.ifn", "bar.fn", "baz.ifn"]));
        assert_eq!(
            inner_command(&opts).unwrap(),
            "fn run beam \"/tmp\" foo.ifn bar.fn baz.ifn"
        );
    }

    #[test]
    fn test_other_type_drops_output_path() {
        let mut b = OptionsBuilder::new();
        b.output_type("erl").output_path("/tmp");
        let opts = b.finish(files(&["foo.ifn"]));
        assert_eq!(inner_command(&opts).unwrap(), "fn run erl foo.ifn");
    }

    #[test]
    fn test_search_paths_not_forwarded() {
        let mut b = OptionsBuilder::new();
        b.append_path("x").prepend_path("y");
        let opts = b.finish(files(&["foo.ifn"]));
        assert_eq!(inner_command(&opts).unwrap(), "fn run beam \".\" foo.ifn");
    }

    #[test]
    fn test_no_files() {
        let opts = OptionsBuilder::new().finish(Vec::new());
        assert!(matches!(inner_command(&opts), Err(LaunchError::NoInput)));
    }
}
