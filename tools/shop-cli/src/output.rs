//! Terminal output for the CLI.
//!
//! Human output goes to the terminal with colored markers. In JSON mode only
//! explicit [`Output::json`] values and errors are printed.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use shop_commerce::catalog::Availability;

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn line(&self, marker: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", marker, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    /// Warnings go to stderr.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors go to stderr, as a JSON object in JSON mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// Pretty-print a value as JSON regardless of mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Columns padded to `widths`, measured without color codes.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| pad(col, *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", row.trim_end());
    }

    /// Spinner for waiting on the commerce API. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn pad(text: &str, width: usize) -> String {
    let visible = console::measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(visible)))
}

/// Colored stock badge.
pub fn availability_badge(availability: Availability, sold_out: bool) -> String {
    if sold_out {
        return style("Sold out").red().to_string();
    }
    match availability {
        Availability::Untracked => String::new(),
        Availability::InStock(n) if n <= 3 => style(format!("Only {} left", n)).yellow().to_string(),
        Availability::InStock(_) => style(availability).green().to_string(),
        Availability::OutOfStock => style(availability).red().to_string(),
    }
}

/// Shorten text to `max` characters, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mug", 10), "Mug");
        assert_eq!(truncate("Stoneware Mug", 6), "Stone…");
    }

    #[test]
    fn test_pad_ignores_color_codes() {
        let colored = style("ab").red().force_styling(true).to_string();
        assert_eq!(console::strip_ansi_codes(&pad(&colored, 4)), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_untracked_has_no_badge() {
        assert!(availability_badge(Availability::Untracked, false).is_empty());
        assert!(availability_badge(Availability::Untracked, true).contains("Sold out"));
    }
}
