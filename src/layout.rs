//! Layout engine: composes enabled widgets into the final status line.
//!
//! Each widget renders independently; a widget that fails or panics is
//! treated as absent and the rest of the line still renders. One broken
//! widget must never blank the whole status line.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::cache::CacheManager;
use crate::config::schema::{LayoutConfig, LayoutType};
use crate::config::Config;
use crate::input::Snapshot;
use crate::widgets::{build_widgets, Widget};

/// Fragment separator within a line.
const SEPARATOR: &str = " | ";

pub struct LayoutEngine {
    layout: LayoutConfig,
    widgets: Vec<Box<dyn Widget>>,
}

/// Per-widget and total render timings from a measurement pass.
pub struct RenderTimings {
    pub total_ms: f64,
    pub widgets: Vec<(&'static str, f64)>,
}

impl LayoutEngine {
    pub fn from_config(config: &Config, cache: Arc<CacheManager>) -> Self {
        Self {
            layout: config.layout.clone(),
            widgets: build_widgets(config, &cache),
        }
    }

    /// Construction seam for tests and callers that assemble their own
    /// widget set.
    pub fn with_widgets(layout: LayoutConfig, widgets: Vec<Box<dyn Widget>>) -> Self {
        Self { layout, widgets }
    }

    pub fn render(&self, snapshot: &Snapshot) -> String {
        match self.layout.layout_type {
            LayoutType::SingleLine => self.render_single_line(snapshot),
            LayoutType::MultiLine => self.render_multi_line(snapshot),
        }
    }

    /// Every enabled widget on one line, in construction order.
    fn render_single_line(&self, snapshot: &Snapshot) -> String {
        let fragments: Vec<String> = self
            .widgets
            .iter()
            .filter_map(|widget| self.render_widget(widget.as_ref(), snapshot))
            .collect();
        fragments.join(SEPARATOR)
    }

    /// One line per configured widget-id group. Unknown ids are
    /// skipped; a line with zero surviving fragments is omitted.
    fn render_multi_line(&self, snapshot: &Snapshot) -> String {
        let mut lines: Vec<String> = Vec::new();

        for line_ids in &self.layout.lines {
            let fragments: Vec<String> = line_ids
                .iter()
                .filter_map(|id| self.widgets.iter().find(|w| w.name() == id))
                .filter_map(|widget| self.render_widget(widget.as_ref(), snapshot))
                .collect();

            if !fragments.is_empty() {
                lines.push(fragments.join(SEPARATOR));
            }
        }

        lines.join("\n")
    }

    /// Invoke one widget with panic isolation. A panicking widget is
    /// logged and treated as absent.
    fn render_widget(&self, widget: &dyn Widget, snapshot: &Snapshot) -> Option<String> {
        match catch_unwind(AssertUnwindSafe(|| widget.render(snapshot))) {
            Ok(fragment) => fragment.filter(|f| !f.is_empty()),
            Err(_) => {
                tracing::warn!(widget = widget.name(), "widget panicked during render");
                None
            }
        }
    }

    /// Time the full render and each widget individually. Failures are
    /// swallowed here too; measurement must never be riskier than the
    /// render itself.
    pub fn measure(&self, snapshot: &Snapshot) -> RenderTimings {
        let start = Instant::now();
        let mut widget_times = Vec::with_capacity(self.widgets.len());

        for widget in &self.widgets {
            let widget_start = Instant::now();
            let _ = catch_unwind(AssertUnwindSafe(|| widget.render(snapshot)));
            widget_times.push((widget.name(), widget_start.elapsed().as_secs_f64() * 1000.0));
        }

        RenderTimings {
            total_ms: start.elapsed().as_secs_f64() * 1000.0,
            widgets: widget_times,
        }
    }
}
