//! CLI layer - Command-line interface
//!
//! Contains argument parsing, the config subcommand and the
//! single-run workflow driver.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use app::{load_merged_config, run_once, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RunOptions};
pub use config_cmd::{config_exit_code, handle_config_command};
pub use presenter::Presenter;
