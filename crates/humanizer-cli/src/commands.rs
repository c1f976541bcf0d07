use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use humanizer_runtime::resolve_data_dir;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), format = %cli.format, "resolved data directory");
    let ctx = HandlerContext::new(cli.format, data_dir);

    match cli.command {
        Commands::Humanize(args) => handlers::humanize::handle(&ctx, args),
        Commands::Gate(args) => handlers::gate::handle(&ctx, args),
        Commands::History { limit } => handlers::history::handle(&ctx, limit),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
