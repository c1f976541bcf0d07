use super::HandlerContext;
use crate::presentation::HistoryView;
use anyhow::Result;
use humanizer_runtime::JsonlHistory;

pub fn handle(ctx: &HandlerContext, limit: usize) -> Result<()> {
    let history = JsonlHistory::in_dir(&ctx.data_dir);
    let entries = history.recent(limit)?;

    ctx.render(&HistoryView {
        path: history.path().to_path_buf(),
        entries,
    })
}
