/// Final `erl` command line assembly.
use super::resolve::SupportDir;

/// The runtime binary every invocation is handed to.
pub const RUNTIME: &str = "erl";

/// Entry point shared by the shell and compile invocations (`fn run ...`).
pub const BUILD_ENTRY: &str = "fn run";

/// Wrap a mode-specific inner command into a full runtime invocation.
///
/// The runtime runs `inner`, then `init stop`, without a console, with the
/// support directory on its code path.
#[must_use]
pub fn runtime_command(inner: &str, support: &SupportDir) -> String {
    format!(
        "{RUNTIME} -run {inner} -run init stop -noshell -pa \"{}\"",
        support.ebin()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_appends_ebin() {
        let support = SupportDir::Override("/opt/efene".to_owned());
        assert_eq!(
            runtime_command("fn run shell", &support),
            "erl -run fn run shell -run init stop -noshell -pa \"/opt/efene/ebin\""
        );
    }

    #[test]
    fn test_sibling() {
        assert_eq!(
            runtime_command("foo run 1 2", &SupportDir::Sibling),
            "erl -run foo run 1 2 -run init stop -noshell -pa \"../ebin\""
        );
    }

    #[test]
    fn test_installed_used_verbatim() {
        let support = SupportDir::Installed("/usr/lib/efene/ebin".to_owned());
        assert!(runtime_command("x", &support).ends_with("-pa \"/usr/lib/efene/ebin\""));
    }

    #[test]
    fn test_long_commands_are_not_truncated() {
        let files: Vec<String> = (0..2000).map(|i| format!("module_{i}.ifn")).collect();
        let inner = format!("{BUILD_ENTRY} erl {}", files.join(" "));
        let cmd = runtime_command(&inner, &SupportDir::Sibling);
        assert!(cmd.len() > 2048);
        assert!(cmd.contains("module_1999.ifn -run init stop"));
    }
}
