//! Presentation layer for the CLI.
//!
//! Handlers build a view model from runtime state and pass it to
//! `HandlerContext::render`. View models carry raw data so `--format json`
//! output stays machine-readable; plain rendering, colours and layout live
//! in [`PlainView`] impls.

pub mod formatters;
pub mod views;

pub use views::{
    BannerView, ConfigView, GateReport, HistoryView, HumanizeReport, ResultView, SettingsView,
};

/// Text rendering for a view model
pub trait PlainView {
    fn render_plain(&self, color: bool) -> String;
}
