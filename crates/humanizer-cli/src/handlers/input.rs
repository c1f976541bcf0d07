use crate::args::{HumanizeArgs, TierArgs};
use anyhow::{Context, Result, bail};
use humanizer_runtime::Config;
use humanizer_types::{Settings, SubscriptionTier, Tier, WordLimit};
use is_terminal::IsTerminal;
use std::io::Read;
use std::path::Path;

/// Read the text to work on from a file, or from stdin when no file is given
pub fn read_text(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No input: pass --input FILE or pipe text on stdin");
    }

    let mut text = String::new();
    stdin
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

/// Subscription facts from config, with command-line overrides applied
pub fn resolve_tier(config: &Config, args: &TierArgs) -> SubscriptionTier {
    let mut tier = match args.tier.map(Tier::from) {
        Some(requested) if requested != config.subscription.tier => {
            SubscriptionTier::for_tier(requested)
                .with_current_usage(config.subscription.current_usage)
        }
        _ => config.subscription,
    };

    if let Some(limit) = args.word_limit {
        tier.word_limit = WordLimit::Limited(limit);
    }
    tier
}

/// Default settings from config, with command-line overrides applied.
/// Validation happens here so bad flags fail before any input is read.
pub fn resolve_settings(config: &Config, args: &HumanizeArgs) -> Result<Settings> {
    let mut settings = config.defaults;
    if let Some(level) = args.level {
        settings = settings.with_level(level);
    }
    if let Some(style) = args.style {
        settings = settings.with_style(style.into());
    }
    if args.no_preserve_key_points {
        settings = settings.with_preserve_key_points(false);
    }

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StyleArg, TierArg};
    use humanizer_types::Style;

    fn humanize_args() -> HumanizeArgs {
        HumanizeArgs {
            input: None,
            level: None,
            style: None,
            no_preserve_key_points: false,
            tier: TierArgs::default(),
            seed: None,
            latency_ms: None,
            save: false,
            copy: false,
        }
    }

    #[test]
    fn test_tier_defaults_to_config() {
        let mut config = Config::default();
        config.subscription = SubscriptionTier::free(250).with_current_usage(40);

        let tier = resolve_tier(&config, &TierArgs::default());
        assert_eq!(tier, config.subscription);

        // Naming the configured tier again keeps its configured limit
        let same = TierArgs {
            tier: Some(TierArg::Free),
            word_limit: None,
        };
        assert_eq!(resolve_tier(&config, &same).word_limit, WordLimit::Limited(250));
    }

    #[test]
    fn test_tier_override() {
        let config = Config::default();
        let args = TierArgs {
            tier: Some(TierArg::Pro),
            word_limit: None,
        };
        let tier = resolve_tier(&config, &args);
        assert_eq!(tier.tier, Tier::Pro);
        assert!(tier.word_limit.is_unbounded());

        let args = TierArgs {
            tier: None,
            word_limit: Some(10),
        };
        assert_eq!(
            resolve_tier(&config, &args).word_limit,
            WordLimit::Limited(10)
        );
    }

    #[test]
    fn test_settings_overrides() {
        let config = Config::default();
        let mut args = humanize_args();
        args.level = Some(0);
        args.style = Some(StyleArg::Casual);
        args.no_preserve_key_points = true;

        let settings = resolve_settings(&config, &args).unwrap();
        assert_eq!(settings, Settings::new(0, Style::Casual, false));
    }

    #[test]
    fn test_settings_out_of_range_rejected() {
        let config = Config::default();
        let mut args = humanize_args();
        args.level = Some(-1);
        let err = resolve_settings(&config, &args).unwrap_err();
        assert!(err.to_string().contains("level must be in range 0-100"));
    }
}
