//! Cost-tracker widget: session cost and wall-clock duration,
//! e.g. `$0.15 | ⏱ 15m`.

use colored::Colorize;

use crate::config::schema::CostTrackerWidgetConfig;
use crate::input::Snapshot;
use crate::timefmt::format_duration;
use crate::widgets::Widget;

pub struct CostTrackerWidget {
    config: CostTrackerWidgetConfig,
}

impl CostTrackerWidget {
    pub fn new(config: CostTrackerWidgetConfig) -> Self {
        Self { config }
    }
}

impl Widget for CostTrackerWidget {
    fn name(&self) -> &'static str {
        "cost-tracker"
    }

    fn render(&self, snapshot: &Snapshot) -> Option<String> {
        let cost_info = snapshot.cost.as_ref();
        let mut parts: Vec<String> = Vec::new();

        if self.config.show_cost {
            let cost = cost_info.and_then(|c| c.total_cost_usd).unwrap_or(0.0);
            parts.push(format!("${:.2}", cost).green().to_string());
        }

        if self.config.show_duration {
            let duration_ms = cost_info.and_then(|c| c.total_duration_ms).unwrap_or(0);
            parts.push(
                format!("\u{23f1} {}", format_duration(duration_ms))
                    .cyan()
                    .to_string(),
            );
        }

        if parts.is_empty() {
            return None;
        }
        Some(parts.join(" | "))
    }
}
