//! Rate-limits widget: API usage windows, e.g. `5h: 45% | 7d: 23%`.
//!
//! Color tiers are tighter than the context bar's: yellow from 60%,
//! red from 80%.

use std::sync::Arc;

use colored::Colorize;

use crate::cache::CacheManager;
use crate::color::tier_color;
use crate::config::schema::RateLimitsWidgetConfig;
use crate::input::Snapshot;
use crate::usage::{self, UsageWindow};
use crate::widgets::Widget;

pub struct RateLimitsWidget {
    config: RateLimitsWidgetConfig,
    cache: Arc<CacheManager>,
}

impl RateLimitsWidget {
    pub fn new(config: RateLimitsWidgetConfig, cache: Arc<CacheManager>) -> Self {
        Self { config, cache }
    }

    fn format_window(&self, label: &str, window: &UsageWindow) -> String {
        let pct = window.utilization.clamp(0.0, 100.0).floor() as u32;
        let color = tier_color(pct, self.config.thresholds.medium, self.config.thresholds.high);
        format!("{}: {}%", label, pct).color(color).to_string()
    }
}

impl Widget for RateLimitsWidget {
    fn name(&self) -> &'static str {
        "rate-limits"
    }

    fn render(&self, _snapshot: &Snapshot) -> Option<String> {
        let limits = usage::fetch_usage_limits(&self.cache, self.config.api_cache_ttl)?;

        let mut parts: Vec<String> = Vec::new();

        if self.config.show_5_hour {
            if let Some(window) = &limits.five_hour {
                parts.push(self.format_window("5h", window));
            }
        }
        if self.config.show_7_day {
            if let Some(window) = &limits.seven_day {
                parts.push(self.format_window("7d", window));
            }
        }
        if let Some(window) = &limits.seven_day_opus {
            parts.push(self.format_window("7d-opus", window));
        }

        if parts.is_empty() {
            return None;
        }
        Some(parts.join(" | "))
    }
}
