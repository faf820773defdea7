#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod render;

pub use cli::run_from_env;
pub use error::{CliError, Result};
