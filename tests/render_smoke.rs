//! Integration tests: drive `render` end to end with snapshot JSON on
//! stdin and an isolated config, cache, and state file.

use assert_cmd::Command;
use predicates::prelude::*;

struct TestEnv {
    dir: tempfile::TempDir,
}

impl TestEnv {
    fn new(config: serde_json::Value) -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mut config = config;
        config["cache"] = serde_json::json!({
            "directory": dir.path().join("cache").to_string_lossy()
        });
        std::fs::write(dir.path().join("config.json"), config.to_string()).unwrap();

        TestEnv { dir }
    }

    fn render(&self, stdin: &str) -> Command {
        let mut cmd = Command::cargo_bin("claude-statusline").expect("binary exists");
        cmd.arg("render")
            .arg("--no-color")
            .env("STATUSLINE_CONFIG", self.dir.path().join("config.json"))
            .env("STATUSLINE_STATE_FILE", self.dir.path().join("state.json"))
            .write_stdin(stdin.to_string());
        cmd
    }
}

fn snapshot() -> serde_json::Value {
    serde_json::json!({
        "session_id": "sess-1",
        "model": {"id": "claude-opus-4", "display_name": "Opus"},
        "workspace": {"current_dir": "/home/user/projects/demo"},
        "cost": {"total_cost_usd": 0.1432, "total_duration_ms": 65_000},
        "context_window": {"context_window_size": 200_000, "used_percentage": 42.0}
    })
}

#[test]
fn test_render_single_line_layout() {
    let env = TestEnv::new(serde_json::json!({
        "layout": {
            "type": "single-line",
            "lines": [["model", "workspace", "cost-tracker"]]
        },
        "widgets": {
            "git-status": {"enabled": false},
            "rate-limits": {"enabled": false},
            "subagents": {"enabled": false}
        }
    }));

    env.render(&snapshot().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Opus]"))
        .stdout(predicate::str::contains("📁 demo"))
        .stdout(predicate::str::contains("$0.14"))
        .stdout(predicate::str::contains(" | "));
}

#[test]
fn test_render_multi_line_omits_empty_lines() {
    // Second line holds only widgets that render nothing here, so the
    // output must collapse to a single line.
    let env = TestEnv::new(serde_json::json!({
        "layout": {
            "type": "multi-line",
            "lines": [["model", "workspace"], ["subagents"]]
        },
        "widgets": {
            "git-status": {"enabled": false},
            "context-bar": {"enabled": false},
            "cost-tracker": {"enabled": false},
            "rate-limits": {"enabled": false}
        }
    }));

    let output = env
        .render(&snapshot().to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains("[Opus]"));
    assert_eq!(stdout.trim_end_matches('\n').lines().count(), 1);
}

#[test]
fn test_render_context_bar_high_usage() {
    let env = TestEnv::new(serde_json::json!({
        "layout": {"type": "single-line", "lines": [["context-bar"]]},
        "widgets": {
            "model": {"enabled": false},
            "workspace": {"enabled": false},
            "git-status": {"enabled": false},
            "cost-tracker": {"enabled": false},
            "rate-limits": {"enabled": false},
            "subagents": {"enabled": false}
        }
    }));

    let mut snap = snapshot();
    snap["context_window"]["used_percentage"] = serde_json::json!(95.0);

    env.render(&snap.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("95%"));
}

#[test]
fn test_render_malformed_stdin_exits_zero() {
    let env = TestEnv::new(serde_json::json!({}));

    env.render("{{{ not json").assert().success().stdout("\n");
}

#[test]
fn test_render_empty_stdin_exits_zero() {
    let env = TestEnv::new(serde_json::json!({}));

    env.render("").assert().success().stdout("\n");
}

#[test]
fn test_render_minimal_snapshot_still_shows_model() {
    let env = TestEnv::new(serde_json::json!({
        "layout": {"type": "single-line", "lines": [["model"]]},
        "widgets": {
            "workspace": {"enabled": false},
            "git-status": {"enabled": false},
            "context-bar": {"enabled": false},
            "cost-tracker": {"enabled": false},
            "rate-limits": {"enabled": false},
            "subagents": {"enabled": false}
        }
    }));

    env.render(r#"{"model": {"display_name": "Sonnet"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Sonnet]"));
}
