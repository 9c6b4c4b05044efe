//! Subagents widget: dashboard of currently-running subagents,
//! e.g. `⚡ 2 agents (45s) | Explore:Haiku 8K | Plan:Sonnet 4K`.
//!
//! Renders nothing when no subagents are active, so its layout line
//! appears and disappears dynamically.

use std::sync::Arc;

use colored::Colorize;

use crate::cache::CacheManager;
use crate::config::schema::SubagentWidgetConfig;
use crate::input::Snapshot;
use crate::state::{StateFile, SubagentEntry};
use crate::timefmt::format_duration;
use crate::transcript::{format_token_count, transcript_tokens};
use crate::util::now_ms;
use crate::widgets::Widget;

pub struct SubagentWidget {
    config: SubagentWidgetConfig,
    cache: Arc<CacheManager>,
    state: StateFile,
}

impl SubagentWidget {
    pub fn new(config: SubagentWidgetConfig, cache: Arc<CacheManager>, state: StateFile) -> Self {
        Self { config, cache, state }
    }

    fn agent_label(&self, agent: &SubagentEntry) -> String {
        let mut label = agent.agent_type.clone();

        if self.config.show_model && !agent.model.is_empty() && agent.model != "unknown" {
            label.push(':');
            label.push_str(&agent.model);
        }

        if self.config.show_tokens {
            if let Some(path) = &agent.transcript_path {
                let tokens = transcript_tokens(path, &self.cache, self.config.token_cache_ttl);
                if let Some(tokens) = tokens.filter(|&t| t > 0) {
                    label.push(' ');
                    label.push_str(&format_token_count(tokens));
                }
            }
        }

        label
    }
}

impl Widget for SubagentWidget {
    fn name(&self) -> &'static str {
        "subagents"
    }

    fn render(&self, _snapshot: &Snapshot) -> Option<String> {
        let state = self.state.read();
        if state.active.is_empty() {
            return None;
        }

        let count = state.active.len();
        let mut parts: Vec<String> = Vec::new();

        let mut summary = format!(
            "\u{26a1} {} agent{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        if self.config.show_elapsed_time {
            let now = now_ms();
            let max_elapsed = state
                .active
                .iter()
                .map(|a| now.saturating_sub(a.started_at))
                .max()
                .unwrap_or(0);
            summary.push_str(&format!(" ({})", format_duration(max_elapsed)));
        }
        parts.push(summary.yellow().bold().to_string());

        let detailed = &state.active[..count.min(self.config.max_agents_detailed)];
        for agent in detailed {
            parts.push(self.agent_label(agent).cyan().to_string());
        }

        let overflow = count - detailed.len();
        if overflow > 0 {
            parts.push(format!("+{} more", overflow).dimmed().to_string());
        }

        Some(parts.join(" | "))
    }
}
