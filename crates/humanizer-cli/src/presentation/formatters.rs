use humanizer_types::DetectionBand;
use owo_colors::OwoColorize;

pub const BAR_WIDTH: usize = 20;

/// Fixed-width bar for a 0-100 percentage
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = ((percent.min(100) as usize * width) + 50) / 100;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn paint_band(text: &str, band: DetectionBand, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match band {
        DetectionBand::HumanLike => text.green().to_string(),
        DetectionBand::Mixed => text.yellow().to_string(),
        DetectionBand::AiLike => text.red().to_string(),
    }
}

pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bright_white().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn warning(text: &str, color: bool) -> String {
    if color {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn alert(text: &str, color: bool) -> String {
    if color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Indent every line of a block of text
pub fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(50, 10), "[#####-----]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(250, 10), "[##########]");
    }

    #[test]
    fn test_no_color_is_plain() {
        assert_eq!(paint_band("72", DetectionBand::AiLike, false), "72");
        assert_eq!(alert("stop", false), "stop");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", "  "), "  a\n  b");
        assert_eq!(indent("", "  "), "");
    }
}
