/// The invocation record: what the user asked `fnc` to do.
///
/// Flags are folded into an [`OptionsBuilder`] in command-line order, then
/// frozen into an [`Options`] value that the later stages only read.
use std::fmt;

/// Output type used when `-t` is never given.
pub const DEFAULT_OUTPUT_TYPE: &str = "beam";

/// Output path used when `-o` is never given.
pub const DEFAULT_OUTPUT_PATH: &str = ".";

/// High-level launcher behaviour. Absence of a mode means "compile files".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `-s`: start the interactive shell.
    Shell,
    /// `-r`: run `module:function(args...)`.
    RunFunction,
}

impl Mode {
    /// The flag character that selects this mode.
    #[must_use]
    pub fn flag(self) -> char {
        match self {
            Self::Shell => 's',
            Self::RunFunction => 'r',
        }
    }
}

/// A mode flag that replaced an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOverride {
    pub previous: Mode,
    pub current: Mode,
}

impl fmt::Display for ModeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "warning! overriding {} flag with {} flag",
            self.previous.flag(),
            self.current.flag()
        )
    }
}

/// Ordered library search paths tagged with the `erl` flag that introduces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    flag: &'static str,
    paths: Vec<String>,
}

impl SearchPaths {
    /// Paths added with `-a`.
    #[must_use]
    pub fn appends() -> Self {
        Self {
            flag: "-pa",
            paths: Vec::new(),
        }
    }

    /// Paths added with `-p`.
    #[must_use]
    pub fn prepends() -> Self {
        Self {
            flag: "-pz",
            paths: Vec::new(),
        }
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Render as a command-line suffix: `" -pa a b"`, or `""` when empty.
    #[must_use]
    pub fn render(&self) -> String {
        if self.paths.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(
            1 + self.flag.len() + self.paths.iter().map(|p| p.len() + 1).sum::<usize>(),
        );
        out.push(' ');
        out.push_str(self.flag);
        for path in &self.paths {
            out.push(' ');
            out.push_str(path);
        }
        out
    }
}

/// Finalized invocation intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `None` means compile mode.
    pub mode: Option<Mode>,
    pub output_type: String,
    pub output_path: String,
    /// Positional arguments in the order given.
    pub files: Vec<String>,
    pub appends: SearchPaths,
    pub prepends: SearchPaths,
    /// `-T`: print the command instead of running it.
    pub dry_run: bool,
    /// Every time a mode flag replaced an already-set mode.
    pub overrides: Vec<ModeOverride>,
}

impl Options {
    /// Both search-path suffixes, appends first.
    #[must_use]
    pub fn search_suffix(&self) -> String {
        let mut suffix = self.appends.render();
        suffix.push_str(&self.prepends.render());
        suffix
    }
}

/// Mutable accumulator used while scanning flags.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    mode: Option<Mode>,
    output_type: Option<String>,
    output_path: Option<String>,
    appends: SearchPaths,
    prepends: SearchPaths,
    dry_run: bool,
    overrides: Vec<ModeOverride>,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: None,
            output_type: None,
            output_path: None,
            appends: SearchPaths::appends(),
            prepends: SearchPaths::prepends(),
            dry_run: false,
            overrides: Vec::new(),
        }
    }

    /// Set the mode, recording an override when one was already set.
    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        if let Some(previous) = self.mode.replace(mode) {
            self.overrides.push(ModeOverride {
                previous,
                current: mode,
            });
        }
        self
    }

    pub fn output_type(&mut self, output_type: impl Into<String>) -> &mut Self {
        self.output_type = Some(output_type.into());
        self
    }

    pub fn output_path(&mut self, output_path: impl Into<String>) -> &mut Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn append_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.appends.push(path);
        self
    }

    pub fn prepend_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.prepends.push(path);
        self
    }

    pub fn dry_run(&mut self, dry_run: bool) -> &mut Self {
        self.dry_run = dry_run;
        self
    }

    /// Apply defaults and capture the positional arguments.
    #[must_use]
    pub fn finish(self, files: Vec<String>) -> Options {
        Options {
            mode: self.mode,
            output_type: self
                .output_type
                .unwrap_or_else(|| DEFAULT_OUTPUT_TYPE.to_owned()),
            output_path: self
                .output_path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_owned()),
            files,
            appends: self.appends,
            prepends: self.prepends,
            dry_run: self.dry_run,
            overrides: self.overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = OptionsBuilder::new().finish(vec!["foo.ifn".to_owned()]);
        assert_eq!(opts.mode, None);
        assert_eq!(opts.output_type, "beam");
        assert_eq!(opts.output_path, ".");
        assert_eq!(opts.files, ["foo.ifn"]);
        assert!(!opts.dry_run);
        assert!(opts.overrides.is_empty());
    }

    #[test]
    fn test_last_value_wins() {
        let mut b = OptionsBuilder::new();
        b.output_type("erl").output_type("ast");
        b.output_path("/tmp").output_path("out");
        let opts = b.finish(Vec::new());
        assert_eq!(opts.output_type, "ast");
        assert_eq!(opts.output_path, "out");
        assert!(opts.overrides.is_empty());
    }

    #[test]
    fn test_mode_override_recorded_once() {
        let mut b = OptionsBuilder::new();
        b.set_mode(Mode::Shell).set_mode(Mode::RunFunction);
        let opts = b.finish(Vec::new());
        assert_eq!(opts.mode, Some(Mode::RunFunction));
        assert_eq!(
            opts.overrides,
            [ModeOverride {
                previous: Mode::Shell,
                current: Mode::RunFunction,
            }]
        );
        assert_eq!(
            opts.overrides[0].to_string(),
            "warning! overriding s flag with r flag"
        );
    }

    #[test]
    fn test_search_paths_flag_once() {
        let mut paths = SearchPaths::appends();
        assert_eq!(paths.render(), "");
        paths.push("x");
        paths.push("y");
        assert_eq!(paths.render(), " -pa x y");
    }

    #[test]
    fn test_search_suffix_appends_then_prepends() {
        let mut b = OptionsBuilder::new();
        b.prepend_path("lib").append_path("a").append_path("b");
        let opts = b.finish(Vec::new());
        assert_eq!(opts.search_suffix(), " -pa a b -pz lib");
        assert_eq!(opts.appends.render(), " -pa a b");
    }
}
