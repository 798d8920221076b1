#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use hooklog::app::App;
use hooklog::config::Config;

pub const TS: &str = "2025-01-01 00:00:00";

/// An app logging to `<dir>/log.md`.
pub fn app_in(dir: &Path) -> App {
    App::new(&Config::for_project(dir.to_path_buf(), None))
}

pub fn read_log(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("log.md")).unwrap()
}

/// Split a log into its title and entries.
pub fn entries(log: &str) -> (String, Vec<String>) {
    let mut parts = log.trim_end().split("\n\n").map(str::to_string);
    let title = parts.next().unwrap_or_default();
    (title, parts.collect())
}

pub fn session_start(source: &str, session_id: &str) -> String {
    format!(r#"{{"session_id":"{session_id}","transcript_path":"/tmp/t.jsonl","hook_event_name":"SessionStart","source":"{source}"}}"#)
}

pub fn user_prompt(prompt: &str) -> String {
    format!(r#"{{"session_id":"s1","hook_event_name":"UserPromptSubmit","prompt":"{prompt}"}}"#)
}

pub fn pre_tool_use(tool_name: &str, input_json: &str) -> String {
    format!(r#"{{"session_id":"s1","hook_event_name":"PreToolUse","tool_name":"{tool_name}","tool_input":{input_json}}}"#)
}

pub fn post_tool_use(tool_name: &str, response_json: &str) -> String {
    format!(r#"{{"session_id":"s1","hook_event_name":"PostToolUse","tool_name":"{tool_name}","tool_response":{response_json}}}"#)
}

pub fn stop() -> String {
    r#"{"session_id":"s1","hook_event_name":"Stop","stop_hook_active":false}"#.to_string()
}

/// Run the compiled binary in `dir` with `stdin` piped in.
pub fn run_binary(dir: &Path, stdin: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hooklog"))
        .args(args)
        .current_dir(dir)
        .env_remove("CLAUDE_PROJECT_DIR")
        .env_remove("HOOKLOG_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The child may exit before reading (e.g. on bad arguments).
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}
