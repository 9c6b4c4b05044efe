//! Context-bar widget: context-window usage as a progress bar,
//! e.g. `██████░░░░ 60%`.
//!
//! Color tiers (defaults): green below 70%, yellow from 70%, red from
//! 90%.

use colored::Colorize;

use crate::color::tier_color;
use crate::config::schema::ContextBarWidgetConfig;
use crate::input::Snapshot;
use crate::widgets::Widget;

pub struct ContextBarWidget {
    config: ContextBarWidgetConfig,
}

impl ContextBarWidget {
    pub fn new(config: ContextBarWidgetConfig) -> Self {
        Self { config }
    }
}

impl Widget for ContextBarWidget {
    fn name(&self) -> &'static str {
        "context-bar"
    }

    fn render(&self, snapshot: &Snapshot) -> Option<String> {
        let pct = snapshot.used_percentage().clamp(0.0, 100.0).floor() as u32;

        let width = self.config.width.max(1);
        let filled = (pct as usize * width) / 100;
        let empty = width - filled;

        let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(empty);
        let mut text = format!("{} {}%", bar, pct);
        if snapshot.exceeds_200k() {
            text.push_str(" \u{26a0}");
        }

        let color = tier_color(pct, self.config.thresholds.medium, self.config.thresholds.high);
        Some(text.color(color).to_string())
    }
}
