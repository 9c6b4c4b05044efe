pub mod schema;

use std::path::PathBuf;

use serde_json::Value;

pub use schema::Config;

/// Load configuration: baked-in defaults deep-merged with the optional
/// user override document.
///
/// A missing or malformed override file silently falls back to the
/// defaults -- configuration problems must never take the status line
/// down.
pub fn load() -> Config {
    let defaults = Config::default();

    let Some(path) = user_config_path() else {
        return defaults;
    };
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return defaults;
    };
    let Ok(overrides) = serde_json::from_str::<Value>(&contents) else {
        tracing::debug!(path = %path.display(), "ignoring malformed user config");
        return defaults;
    };

    merge_config(defaults, overrides)
}

/// User override location. `STATUSLINE_CONFIG` wins (tests redirect
/// through it), then the platform config directory.
fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STATUSLINE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("claude-statusline").join("config.json"))
}

/// Merge `overrides` into the default config through their JSON forms.
/// An override document that merges into something undeserializable
/// (wrong types) falls back to the defaults wholesale.
fn merge_config(defaults: Config, overrides: Value) -> Config {
    let Ok(mut base) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    deep_merge(&mut base, overrides);
    serde_json::from_value(base).unwrap_or(defaults)
}

/// Recursive deep merge: objects merge key-by-key, anything else in the
/// source replaces the target outright.
fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(slot) => deep_merge(slot, source_value),
                    None => {
                        target_map.insert(key, source_value);
                    }
                }
            }
        }
        (target_slot, source_value) => *target_slot = source_value,
    }
}
