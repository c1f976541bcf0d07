use super::HandlerContext;
use crate::presentation::ConfigView;
use anyhow::{Context, Result, bail};
use humanizer_runtime::Config;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    let config = ctx.load_config()?;
    let toml = toml::to_string_pretty(&config).context("Failed to serialize config")?;

    ctx.render(&ConfigView {
        exists: path.exists(),
        path,
        config,
        toml,
    })
}

pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
