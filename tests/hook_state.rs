//! Integration tests: drive the hook subcommands end to end against an
//! isolated state file, then verify the render path picks the state up.

use assert_cmd::Command;
use predicates::prelude::*;

fn hook_cmd(state_file: &std::path::Path, which: &str) -> Command {
    let mut cmd = Command::cargo_bin("claude-statusline").expect("binary exists");
    cmd.arg("hook")
        .arg(which)
        .env("STATUSLINE_STATE_FILE", state_file);
    cmd
}

fn read_state(state_file: &std::path::Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(state_file).expect("state file should exist");
    serde_json::from_str(&contents).expect("state file should be valid JSON")
}

#[test]
fn test_start_hook_records_agent() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    let event = serde_json::json!({
        "agent_id": "agent-1",
        "agent_type": "Explore",
        "model": "Haiku",
        "session_id": "sess-1",
        "transcript_path": "/tmp/fake.jsonl"
    });

    hook_cmd(&state_file, "subagent-start")
        .write_stdin(event.to_string())
        .assert()
        .success();

    let state = read_state(&state_file);
    assert_eq!(state["active"][0]["agent_id"], "agent-1");
    assert_eq!(state["active"][0]["agent_type"], "Explore");
    assert_eq!(state["active"][0]["model"], "Haiku");
    assert!(state["last_updated"].as_u64().unwrap() > 0);
}

#[test]
fn test_start_hook_accepts_camel_case_spellings() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    let event = serde_json::json!({
        "agentId": "agent-camel",
        "agentType": "Plan",
        "sessionId": "sess-1"
    });

    hook_cmd(&state_file, "subagent-start")
        .write_stdin(event.to_string())
        .assert()
        .success();

    let state = read_state(&state_file);
    assert_eq!(state["active"][0]["agent_id"], "agent-camel");
    assert_eq!(state["active"][0]["agent_type"], "Plan");
}

#[test]
fn test_stop_hook_removes_agent() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    for id in ["agent-1", "agent-2"] {
        hook_cmd(&state_file, "subagent-start")
            .write_stdin(
                serde_json::json!({
                    "agent_id": id,
                    "agent_type": "Explore",
                    "model": "Haiku",
                    "session_id": "sess-1"
                })
                .to_string(),
            )
            .assert()
            .success();
    }

    hook_cmd(&state_file, "subagent-stop")
        .write_stdin(serde_json::json!({"agent_id": "agent-1"}).to_string())
        .assert()
        .success();

    let state = read_state(&state_file);
    let active = state["active"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["agent_id"], "agent-2");
}

#[test]
fn test_hooks_exit_zero_on_garbage_input() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    hook_cmd(&state_file, "subagent-start")
        .write_stdin("this is not json")
        .assert()
        .success();

    hook_cmd(&state_file, "subagent-stop")
        .write_stdin("")
        .assert()
        .success();

    // Garbage input must not fabricate a state file.
    assert!(!state_file.exists());
}

#[test]
fn test_render_shows_active_subagent() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    // Only the subagents widget, to keep the output deterministic.
    let config_file = dir.path().join("config.json");
    std::fs::write(
        &config_file,
        serde_json::json!({
            "layout": {"type": "single-line", "lines": []},
            "widgets": {
                "model": {"enabled": false},
                "workspace": {"enabled": false},
                "git-status": {"enabled": false},
                "context-bar": {"enabled": false},
                "cost-tracker": {"enabled": false},
                "rate-limits": {"enabled": false}
            },
            "cache": {"directory": dir.path().join("cache").to_string_lossy()}
        })
        .to_string(),
    )
    .unwrap();

    hook_cmd(&state_file, "subagent-start")
        .write_stdin(
            serde_json::json!({
                "agent_id": "agent-1",
                "agent_type": "Explore",
                "model": "Haiku",
                "session_id": "sess-1"
            })
            .to_string(),
        )
        .assert()
        .success();

    Command::cargo_bin("claude-statusline")
        .expect("binary exists")
        .arg("render")
        .arg("--no-color")
        .env("STATUSLINE_STATE_FILE", &state_file)
        .env("STATUSLINE_CONFIG", &config_file)
        .write_stdin(serde_json::json!({"session_id": "sess-1"}).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 agent"))
        .stdout(predicate::str::contains("Explore:Haiku"));
}
