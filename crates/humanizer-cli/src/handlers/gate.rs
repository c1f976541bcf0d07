use super::HandlerContext;
use super::input::{read_text, resolve_tier};
use crate::args::GateArgs;
use crate::presentation::{BannerView, GateReport};
use anyhow::Result;
use humanizer_runtime::WorkflowController;

/// Report usage for a text without transforming it. Always exits 0;
/// `allowed` carries the verdict.
pub fn handle(ctx: &HandlerContext, args: GateArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let tier = resolve_tier(&config, &args.tier);
    let text = read_text(args.input.as_deref())?;

    let mut controller = WorkflowController::new(tier, config.defaults);
    let phase = controller.set_text(text);
    let gate = controller.gate();

    ctx.render(&GateReport {
        phase,
        allowed: gate.allowed(),
        banner: BannerView::new(&tier, &gate),
    })
}
