pub mod config;
pub mod error;
pub mod service;
pub mod session;
pub mod sinks;
pub mod workflow;

pub use config::{Config, ServiceConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use service::{LocalTransformService, TransformRequest, TransformService};
pub use session::{Phase, Session, TransformResult, View};
pub use sinks::{
    Clipboard, HistoryEntry, HistorySink, JsonlHistory, MemoryClipboard, MemoryHistory,
};
pub use workflow::{Completion, Dispatch, Rejection, RunOutcome, TransformTicket, WorkflowController};
