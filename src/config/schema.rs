//! Configuration schema.
//!
//! Users override the baked-in defaults with a JSON document at
//! `~/.config/claude-statusline/config.json`; overrides deep-merge into
//! the defaults, so a user file only names what it changes. Field names
//! mirror the user-facing JSON (camelCase, widget ids with dashes).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub widgets: WidgetsConfig,
    pub cache: CacheConfig,
    pub debug: DebugConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            widgets: WidgetsConfig::default(),
            cache: CacheConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutType {
    #[serde(rename = "single-line")]
    SingleLine,
    #[serde(rename = "multi-line")]
    MultiLine,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    /// For multi-line layouts: one inner list of widget ids per line.
    pub lines: Vec<Vec<String>>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout_type: LayoutType::MultiLine,
            lines: vec![
                vec![
                    "model".to_string(),
                    "context-bar".to_string(),
                    "workspace".to_string(),
                    "git-status".to_string(),
                ],
                vec!["cost-tracker".to_string(), "rate-limits".to_string()],
                vec!["subagents".to_string()],
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    pub model: ModelWidgetConfig,
    pub workspace: WorkspaceWidgetConfig,
    #[serde(rename = "git-status")]
    pub git_status: GitStatusWidgetConfig,
    #[serde(rename = "context-bar")]
    pub context_bar: ContextBarWidgetConfig,
    #[serde(rename = "cost-tracker")]
    pub cost_tracker: CostTrackerWidgetConfig,
    #[serde(rename = "rate-limits")]
    pub rate_limits: RateLimitsWidgetConfig,
    pub subagents: SubagentWidgetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelWidgetConfig {
    pub enabled: bool,
    pub color: Option<String>,
    /// Template with a `{name}` placeholder.
    pub format: String,
}

impl Default for ModelWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Some("cyan".to_string()),
            format: "[{name}]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceWidgetConfig {
    pub enabled: bool,
    pub color: Option<String>,
    pub format: String,
    pub show_full_path: bool,
}

impl Default for WorkspaceWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Some("blue".to_string()),
            format: "\u{1f4c1} {name}".to_string(),
            show_full_path: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitStatusWidgetConfig {
    pub enabled: bool,
    pub show_branch: bool,
    pub show_ahead_behind: bool,
    pub show_modified: bool,
    pub show_staged: bool,
    #[serde(rename = "cacheTTL")]
    pub cache_ttl: u64,
}

impl Default for GitStatusWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_branch: true,
            show_ahead_behind: true,
            show_modified: true,
            show_staged: true,
            cache_ttl: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub medium: u32,
    pub high: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { medium: 70, high: 90 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextBarWidgetConfig {
    pub enabled: bool,
    /// Bar width in cells.
    pub width: usize,
    pub thresholds: Thresholds,
}

impl Default for ContextBarWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 10,
            thresholds: Thresholds::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostTrackerWidgetConfig {
    pub enabled: bool,
    pub show_cost: bool,
    pub show_duration: bool,
}

impl Default for CostTrackerWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_cost: true,
            show_duration: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitsWidgetConfig {
    pub enabled: bool,
    #[serde(rename = "show5Hour")]
    pub show_5_hour: bool,
    #[serde(rename = "show7Day")]
    pub show_7_day: bool,
    #[serde(rename = "apiCacheTTL")]
    pub api_cache_ttl: u64,
    pub thresholds: Thresholds,
}

impl Default for RateLimitsWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_5_hour: true,
            show_7_day: true,
            api_cache_ttl: 60,
            thresholds: Thresholds { medium: 60, high: 80 },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubagentWidgetConfig {
    pub enabled: bool,
    pub show_tokens: bool,
    pub show_model: bool,
    pub show_elapsed_time: bool,
    #[serde(rename = "tokenCacheTTL")]
    pub token_cache_ttl: u64,
    pub max_agents_detailed: usize,
}

impl Default for SubagentWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_tokens: true,
            show_model: true,
            show_elapsed_time: true,
            token_cache_ttl: 3,
            max_agents_detailed: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Cache / debug
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    pub directory: String,
    pub cleanup_on_start: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            directory: "/tmp/claude-statusline-cache".to_string(),
            cleanup_on_start: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugConfig {
    pub log_errors: bool,
    pub error_log_path: String,
    pub measure_performance: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_errors: false,
            error_log_path: "/tmp/claude-statusline-debug.log".to_string(),
            measure_performance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_names_every_widget() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.layout_type, LayoutType::MultiLine);
        let named: Vec<&str> = layout
            .lines
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        for id in [
            "model",
            "context-bar",
            "workspace",
            "git-status",
            "cost-tracker",
            "rate-limits",
            "subagents",
        ] {
            assert!(named.contains(&id), "default layout missing {}", id);
        }
    }

    #[test]
    fn test_user_facing_field_spellings() {
        let json = r#"{
            "widgets": {
                "workspace": {"showFullPath": true},
                "git-status": {"cacheTTL": 30},
                "rate-limits": {"show5Hour": false, "apiCacheTTL": 120},
                "subagents": {"tokenCacheTTL": 9, "maxAgentsDetailed": 2}
            },
            "cache": {"cleanupOnStart": true}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.widgets.workspace.show_full_path);
        assert_eq!(config.widgets.git_status.cache_ttl, 30);
        assert!(!config.widgets.rate_limits.show_5_hour);
        assert_eq!(config.widgets.rate_limits.api_cache_ttl, 120);
        assert_eq!(config.widgets.subagents.token_cache_ttl, 9);
        assert_eq!(config.widgets.subagents.max_agents_detailed, 2);
        assert!(config.cache.cleanup_on_start);
    }

    #[test]
    fn test_layout_type_spellings() {
        let config: Config =
            serde_json::from_str(r#"{"layout": {"type": "single-line", "lines": []}}"#).unwrap();
        assert_eq!(config.layout.layout_type, LayoutType::SingleLine);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = Config::default();
        let value = serde_json::to_value(&config).unwrap();
        let back: Config = serde_json::from_value(value).unwrap();
        assert_eq!(back.widgets.git_status.cache_ttl, 5);
        assert_eq!(back.widgets.context_bar.thresholds.high, 90);
    }
}
