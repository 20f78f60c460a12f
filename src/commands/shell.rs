/// `-s`: start the efene shell.
use crate::launcher::{BUILD_ENTRY, Options};

/// Inner command for the shell. Positional arguments are ignored.
#[must_use]
pub fn inner_command(options: &Options) -> String {
    format!("{BUILD_ENTRY} shell{}", options.search_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::{Mode, OptionsBuilder};

    #[test]
    fn test_plain_shell() {
        let mut b = OptionsBuilder::new();
        b.set_mode(Mode::Shell);
        assert_eq!(inner_command(&b.finish(Vec::new())), "fn run shell");
    }

    #[test]
    fn test_shell_with_search_paths() {
        let mut b = OptionsBuilder::new();
        b.set_mode(Mode::Shell)
            .append_path("x")
            .prepend_path("/usr/lib/erl")
            .append_path("y");
        assert_eq!(
            inner_command(&b.finish(vec!["ignored.ifn".to_owned()])),
            "fn run shell -pa x y -pz /usr/lib/erl"
        );
    }
}
