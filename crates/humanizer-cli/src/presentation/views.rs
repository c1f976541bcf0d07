use super::PlainView;
use super::formatters::{
    BAR_WIDTH, alert, dimmed, heading, indent, paint_band, progress_bar, warning,
};
use humanizer_engine::GateDecision;
use humanizer_runtime::{Config, HistoryEntry, Phase, TransformResult, View};
use humanizer_types::{DetectionBand, Intensity, Settings, Style, SubscriptionTier, Tier};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Usage banner: tier, words against the limit and severity flags
#[derive(Debug, Clone, Serialize)]
pub struct BannerView {
    pub tier: Tier,
    pub tier_label: &'static str,
    pub word_count: usize,
    pub word_limit: Option<u64>,
    pub usage_ratio: u8,
    pub near_limit: bool,
    pub at_limit: bool,
    pub blocked: bool,
    pub current_usage: u64,
    pub show_upgrade: bool,
}

impl BannerView {
    pub fn new(tier: &SubscriptionTier, gate: &GateDecision) -> Self {
        Self {
            tier: tier.tier,
            tier_label: tier.tier.display_name(),
            word_count: gate.word_count,
            word_limit: gate.word_limit.as_option(),
            usage_ratio: gate.usage_ratio,
            near_limit: gate.near_limit,
            at_limit: gate.at_limit,
            blocked: gate.blocked,
            current_usage: tier.current_usage,
            show_upgrade: tier.tier == Tier::Free,
        }
    }
}

impl PlainView for BannerView {
    fn render_plain(&self, color: bool) -> String {
        let mut out = String::new();
        let label = heading(self.tier_label, color);

        match self.word_limit {
            Some(limit) => {
                let _ = writeln!(
                    out,
                    "{}  {} / {} words  {} {}%",
                    label,
                    self.word_count,
                    limit,
                    progress_bar(self.usage_ratio, BAR_WIDTH),
                    self.usage_ratio
                );
            }
            None => {
                let _ = writeln!(out, "{}  {} words", label, self.word_count);
            }
        }

        if self.blocked {
            let _ = writeln!(out, "{}", alert("Word limit exceeded.", color));
        } else if self.at_limit {
            let _ = writeln!(out, "{}", alert("Word limit reached.", color));
        } else if self.near_limit {
            let _ = writeln!(out, "{}", warning("Approaching your word limit.", color));
        }

        if self.show_upgrade && (self.near_limit || self.blocked) {
            let _ = writeln!(
                out,
                "{}",
                dimmed("Upgrade to Premium or Pro for unlimited words.", color)
            );
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub level: i32,
    pub intensity: Intensity,
    pub style: Style,
    pub preserve_key_points: bool,
}

impl From<&Settings> for SettingsView {
    fn from(settings: &Settings) -> Self {
        Self {
            level: settings.level,
            intensity: settings.intensity(),
            style: settings.style,
            preserve_key_points: settings.preserve_key_points,
        }
    }
}

impl PlainView for SettingsView {
    fn render_plain(&self, _color: bool) -> String {
        format!(
            "Level {} ({})  Style: {}  Key points: {}\n",
            self.level,
            self.intensity,
            self.style,
            if self.preserve_key_points {
                "preserved"
            } else {
                "may change"
            }
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub original_text: String,
    pub humanized_text: String,
    pub detection_score: u8,
    pub band: DetectionBand,
    pub human_likeness: u8,
}

impl From<&TransformResult> for ResultView {
    fn from(result: &TransformResult) -> Self {
        Self {
            original_text: result.original_text.clone(),
            humanized_text: result.humanized_text.clone(),
            detection_score: result.detection_score,
            band: result.band(),
            human_likeness: 100u8.saturating_sub(result.detection_score),
        }
    }
}

impl PlainView for ResultView {
    fn render_plain(&self, color: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", heading("Original", color));
        let _ = writeln!(out, "{}", indent(&self.original_text, "  "));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", heading("Humanized", color));
        let _ = writeln!(out, "{}", indent(&self.humanized_text, "  "));
        let _ = writeln!(out);

        let score = format!("{} ({})", self.detection_score, self.band);
        let _ = writeln!(
            out,
            "Detection score: {}",
            paint_band(&score, self.band, color)
        );
        let _ = writeln!(
            out,
            "Human-likeness:  {} {}%",
            paint_band(&progress_bar(self.human_likeness, BAR_WIDTH), self.band, color),
            self.human_likeness
        );
        out
    }
}

/// Everything `humanize` reports
#[derive(Debug, Clone, Serialize)]
pub struct HumanizeReport {
    pub phase: Phase,
    pub view: View,
    pub banner: BannerView,
    pub settings: SettingsView,
    pub result: Option<ResultView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<Uuid>,
}

impl PlainView for HumanizeReport {
    fn render_plain(&self, color: bool) -> String {
        let mut out = self.banner.render_plain(color);
        out.push_str(&self.settings.render_plain(color));
        out.push('\n');

        if let Some(result) = &self.result {
            out.push_str(&result.render_plain(color));
        }
        if let Some(id) = self.saved_id {
            let _ = writeln!(out, "{}", dimmed(&format!("Saved to history ({})", id), color));
        }
        out
    }
}

/// Output of `gate`
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    pub phase: Phase,
    pub allowed: bool,
    pub banner: BannerView,
}

impl PlainView for GateReport {
    fn render_plain(&self, color: bool) -> String {
        let mut out = self.banner.render_plain(color);
        let _ = writeln!(
            out,
            "Ready to humanize: {}",
            if self.allowed { "yes" } else { "no" }
        );
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub path: PathBuf,
    pub entries: Vec<HistoryEntry>,
}

impl PlainView for HistoryView {
    fn render_plain(&self, color: bool) -> String {
        if self.entries.is_empty() {
            return format!("No saved results in {}\n", self.path.display());
        }

        let mut out = String::new();
        for entry in &self.entries {
            let band = DetectionBand::from_score(entry.detection_score);
            let _ = writeln!(
                out,
                "{}  {}  score {}  {}",
                dimmed(&entry.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(), color),
                &entry.id.to_string()[..8],
                paint_band(&entry.detection_score.to_string(), band, color),
                humanizer_types::truncate(&entry.humanized_text.replace('\n', " "), 60)
            );
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
    #[serde(skip)]
    pub toml: String,
}

impl PlainView for ConfigView {
    fn render_plain(&self, color: bool) -> String {
        let source = if self.exists {
            self.path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", self.path.display())
        };
        format!("{}\n\n{}", dimmed(&format!("# {}", source), color), self.toml)
    }
}
