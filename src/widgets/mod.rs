//! Widget contract and construction.
//!
//! A widget is an independently-rendering unit: given one immutable
//! snapshot it resolves to zero-or-one text fragment. Widgets may do
//! their own I/O (git subprocesses, one HTTP call, state-file reads)
//! but everything they learn flows out through `render`'s return value.

pub mod context_bar;
pub mod cost_tracker;
pub mod git_status;
pub mod model;
pub mod rate_limits;
pub mod subagents;
pub mod workspace;

use std::sync::Arc;

use crate::cache::CacheManager;
use crate::config::Config;
use crate::input::Snapshot;
use crate::state::StateFile;

pub trait Widget {
    /// Stable identifier used by multi-line layout configuration.
    fn name(&self) -> &'static str;

    /// Produce this widget's fragment for one render, or `None` to stay
    /// out of the line entirely.
    fn render(&self, snapshot: &Snapshot) -> Option<String>;
}

/// Construct the enabled widgets in the configuration's declared order.
/// Disabled widgets are never instantiated.
pub fn build_widgets(config: &Config, cache: &Arc<CacheManager>) -> Vec<Box<dyn Widget>> {
    let widgets = &config.widgets;
    let mut built: Vec<Box<dyn Widget>> = Vec::new();

    if widgets.model.enabled {
        built.push(Box::new(model::ModelWidget::new(widgets.model.clone())));
    }
    if widgets.context_bar.enabled {
        built.push(Box::new(context_bar::ContextBarWidget::new(
            widgets.context_bar.clone(),
        )));
    }
    if widgets.workspace.enabled {
        built.push(Box::new(workspace::WorkspaceWidget::new(
            widgets.workspace.clone(),
        )));
    }
    if widgets.cost_tracker.enabled {
        built.push(Box::new(cost_tracker::CostTrackerWidget::new(
            widgets.cost_tracker.clone(),
        )));
    }
    if widgets.git_status.enabled {
        built.push(Box::new(git_status::GitStatusWidget::new(
            widgets.git_status.clone(),
            Arc::clone(cache),
        )));
    }
    if widgets.rate_limits.enabled {
        built.push(Box::new(rate_limits::RateLimitsWidget::new(
            widgets.rate_limits.clone(),
            Arc::clone(cache),
        )));
    }
    if widgets.subagents.enabled {
        built.push(Box::new(subagents::SubagentWidget::new(
            widgets.subagents.clone(),
            Arc::clone(cache),
            StateFile::at_default(),
        )));
    }

    built
}
