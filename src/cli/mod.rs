/// CLI layer: argument parsing and output.
pub mod args;
pub mod output;

pub use args::parse_options;
pub use output::{write_command, write_error, write_warnings};
