mod args;
mod commands;
pub mod config;

pub use args::Cli;
pub use commands::run;
