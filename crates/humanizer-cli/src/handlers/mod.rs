mod context;
mod input;

pub mod config;
pub mod gate;
pub mod history;
pub mod humanize;

pub use context::HandlerContext;
