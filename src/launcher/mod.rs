/// Launcher domain layer: option model, support-dir resolution, command assembly, execution.
pub mod command;
pub mod errors;
pub mod options;
pub mod process;
pub mod resolve;

pub use command::{BUILD_ENTRY, runtime_command};
pub use errors::LaunchError;
pub use options::{Mode, Options, OptionsBuilder};
pub use process::{ProcessRunner, SystemShell};
pub use resolve::resolve_support_dir;
