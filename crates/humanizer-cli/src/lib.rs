mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, GateArgs, HumanizeArgs, TierArgs};
pub use commands::run;
