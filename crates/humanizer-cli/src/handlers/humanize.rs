use super::HandlerContext;
use super::input::{read_text, resolve_settings, resolve_tier};
use crate::args::HumanizeArgs;
use crate::presentation::{BannerView, HumanizeReport, ResultView, SettingsView};
use anyhow::{Context, Result, bail};
use humanizer_engine::SuffixMutation;
use humanizer_runtime::{
    Clipboard, JsonlHistory, LocalTransformService, Phase, Rejection, RunOutcome,
    WorkflowController,
};
use std::io::Write;
use std::time::Duration;

/// `--copy` target: the humanized text on stdout, byte for byte
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn copy(&self, text: &str) -> humanizer_runtime::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

pub fn handle(ctx: &HandlerContext, args: HumanizeArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let settings = resolve_settings(&config, &args)?;
    let tier = resolve_tier(&config, &args.tier);
    let text = read_text(args.input.as_deref())?;

    let mut controller = WorkflowController::new(tier, settings);
    controller.set_text(text);

    let latency = args
        .latency_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.service.latency());
    let service = match args.seed.or(config.service.seed) {
        Some(seed) => LocalTransformService::seeded(SuffixMutation, seed),
        None => LocalTransformService::reference(),
    }
    .with_latency(latency);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;
    let outcome = runtime.block_on(controller.run(&service))?;

    match outcome {
        RunOutcome::Completed => {}
        RunOutcome::Rejected(Rejection::Blocked) => {
            let gate = controller.gate();
            ctx.render(&report(&controller, None))?;
            bail!(
                "{} words exceeds the {} word limit of the {} plan",
                gate.word_count,
                gate.word_limit,
                tier.tier.display_name()
            );
        }
        RunOutcome::Rejected(rejection) => bail!("{}", rejection.message()),
    }

    let saved_id = if args.save {
        let history = JsonlHistory::in_dir(&ctx.data_dir);
        let entry = controller.save_result(&history)?;
        Some(entry.id)
    } else {
        None
    };

    if args.copy {
        return Ok(controller.copy_result(&StdoutClipboard)?);
    }

    ctx.render(&report(&controller, saved_id))
}

fn report(controller: &WorkflowController, saved_id: Option<uuid::Uuid>) -> HumanizeReport {
    let session = controller.session();
    let phase = controller.phase();
    HumanizeReport {
        phase,
        view: phase.view(),
        banner: BannerView::new(session.tier(), &controller.gate()),
        settings: SettingsView::from(session.settings()),
        result: match phase {
            Phase::Results => controller.result().map(ResultView::from),
            _ => None,
        },
        saved_id,
    }
}
