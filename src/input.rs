//! Render snapshot: the JSON document Claude Code pipes to the
//! statusline command on every tick.
//!
//! Every field is optional -- Claude Code may omit any of them and has
//! changed the shape across versions -- so consumers default rather
//! than fail. Unknown fields are silently dropped by serde.

use serde::Deserialize;

use crate::util::percent;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub model: Option<ModelInfo>,
    pub workspace: Option<WorkspaceInfo>,
    /// Alternative to `workspace.current_dir`.
    pub cwd: Option<String>,
    pub session_id: Option<String>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub transcript_path: Option<String>,
    pub cost: Option<CostInfo>,
    pub context_window: Option<ContextWindowInfo>,
    /// Set once the conversation crosses the extended-context threshold.
    pub exceeds_200k_tokens: Option<bool>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub version: Option<String>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub output_style: Option<OutputStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkspaceInfo {
    pub current_dir: Option<String>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub project_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CostInfo {
    pub total_cost_usd: Option<f64>,
    pub total_duration_ms: Option<u64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub total_api_duration_ms: Option<u64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub total_lines_added: Option<u64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub total_lines_removed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContextWindowInfo {
    pub total_input_tokens: Option<u64>,
    pub total_output_tokens: Option<u64>,
    pub context_window_size: Option<u64>,
    pub used_percentage: Option<f64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub remaining_percentage: Option<f64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub current_usage: Option<ContextUsageBreakdown>,
}

/// Detailed per-category breakdown inside `context_window.current_usage`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContextUsageBreakdown {
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub input_tokens: Option<u64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub output_tokens: Option<u64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub cache_creation_input_tokens: Option<u64>,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub cache_read_input_tokens: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputStyle {
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub name: Option<String>,
}

impl Snapshot {
    /// Working directory for directory-scoped widgets:
    /// `workspace.current_dir` with `cwd` as the fallback spelling.
    pub fn current_dir(&self) -> Option<&str> {
        self.workspace
            .as_ref()
            .and_then(|w| w.current_dir.as_deref())
            .or(self.cwd.as_deref())
    }

    /// Context-window usage as a percentage. Prefers the percentage the
    /// host computed; falls back to deriving it from token totals, and
    /// bottoms out at 0 when neither is present.
    pub fn used_percentage(&self) -> f64 {
        let Some(cw) = &self.context_window else {
            return 0.0;
        };
        if let Some(pct) = cw.used_percentage {
            return pct;
        }
        let used = cw.total_input_tokens.unwrap_or(0) + cw.total_output_tokens.unwrap_or(0);
        percent(used, cw.context_window_size.unwrap_or(0))
    }

    pub fn exceeds_200k(&self) -> bool {
        self.exceeds_200k_tokens.unwrap_or(false)
    }
}
