//! Markdown rendering of classified hook events.
//!
//! Every entry is a `## Title` heading, a `**Time:**` line, and a handful of
//! `**Field:** value` lines specific to the event kind. Renderers never fail:
//! a missing or oddly-shaped field is replaced by that field's default.

use chrono::Local;
use serde_json::{Map, Value};

use crate::events::{EventKind, HookEvent};
use crate::ingest::claude::{tool_category, ToolCategory};
use crate::ingest::{display_value, pretty_json, HookPayload};

/// `YYYY-MM-DD HH:MM:SS` in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appended to any value cut short by [`truncate`].
pub const ELLIPSIS: &str = "...";

pub const PROMPT_LIMIT: usize = 200;
pub const TOOL_INPUT_LIMIT: usize = 200;
pub const CUSTOM_INSTRUCTIONS_LIMIT: usize = 200;
pub const UNKNOWN_DATA_LIMIT: usize = 500;

/// A rendered entry, alive only between rendering and appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub body: String,
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Cut `text` to `limit` characters and mark the cut with [`ELLIPSIS`].
/// Text within the limit is returned unchanged.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Trait for turning an event into log text.
/// Implement this trait to add another output format.
pub trait EntryFormatter {
    fn format(&self, event: &HookEvent, timestamp: &str) -> String;
}

/// The `log.md` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl EntryFormatter for MarkdownFormatter {
    fn format(&self, event: &HookEvent, timestamp: &str) -> String {
        let fields = &event.fields;
        let mut block = Block::new(title(event.kind), timestamp);

        match event.kind {
            EventKind::SessionStart => session_start(fields, &mut block),
            EventKind::UserPromptSubmit => user_prompt(fields, &mut block),
            EventKind::PreToolUse => pre_tool_use(fields, &mut block),
            EventKind::PostToolUse => post_tool_use(fields, &mut block),
            EventKind::PreCompact => pre_compact(fields, &mut block),
            EventKind::Stop => block.field("Status", "Claude finished responding"),
            EventKind::SubagentStop => block.field("Status", "Subagent task completed"),
            EventKind::Notification => notification(fields, &mut block),
            EventKind::Unknown => {
                block.field("Data", &truncate(&fields.to_pretty_json(), UNKNOWN_DATA_LIMIT))
            }
        }

        block.finish()
    }
}

/// Render `event` with the markdown formatter at the given timestamp.
pub fn render(event: &HookEvent, timestamp: String) -> LogEntry {
    let body = MarkdownFormatter.format(event, &timestamp);
    LogEntry { timestamp, body }
}

pub fn title(kind: EventKind) -> &'static str {
    match kind {
        EventKind::SessionStart => "Session Started",
        EventKind::UserPromptSubmit => "User Prompt Submitted",
        EventKind::PreToolUse => "Tool Invoked (Pre-execution)",
        EventKind::PostToolUse => "Tool Completed (Post-execution)",
        EventKind::PreCompact => "Pre-Compact Event",
        EventKind::Stop => "Session Stopped",
        EventKind::SubagentStop => "Subagent Stopped",
        EventKind::Notification => "Notification",
        EventKind::Unknown => "Unknown Event",
    }
}

/// Line accumulator for one entry.
struct Block {
    lines: Vec<String>,
}

impl Block {
    fn new(title: &str, timestamp: &str) -> Self {
        let mut block = Self {
            lines: vec![format!("## {title}")],
        };
        block.field("Time", timestamp);
        block
    }

    fn field(&mut self, name: &str, value: &str) {
        self.lines.push(format!("**{name}:** {value}"));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn session_start(fields: &HookPayload, block: &mut Block) {
    block.field("Source", &fields.text_or("source", "unknown"));
    block.field("Session ID", &fields.text_or("session_id", "unknown"));
}

fn user_prompt(fields: &HookPayload, block: &mut Block) {
    block.field("Session ID", &fields.text_or("session_id", "unknown"));
    let prompt = fields.text_or("prompt", "");
    block.field("Prompt", &truncate(&prompt, PROMPT_LIMIT));
}

fn pre_tool_use(fields: &HookPayload, block: &mut Block) {
    let tool_name = fields.text_or("tool_name", "unknown");
    block.field("Tool", &tool_name);

    let empty = Map::new();
    let input = fields.object("tool_input").unwrap_or(&empty);
    let category = tool_category(&tool_name);
    if let Some(label) = category.label() {
        block.field("Type", label);
    }

    match category {
        ToolCategory::Subagent => {
            let task = input
                .get("task")
                .or_else(|| input.get("description"))
                .and_then(display_value);
            block.field("Task", task.as_deref().unwrap_or("N/A"));
        }
        ToolCategory::Command => {
            let command = input.get("command").and_then(display_value);
            block.field("Command", command.as_deref().unwrap_or("N/A"));
        }
        ToolCategory::FileOperation => {
            let path = input
                .get("file_path")
                .or_else(|| input.get("path"))
                .and_then(display_value);
            if let Some(path) = path {
                block.field("File", &path);
            }
        }
        ToolCategory::Other => {
            let raw = match fields.get("tool_input") {
                Some(value) => pretty_json(value),
                None => pretty_json(&empty),
            };
            block.field("Input", &truncate(&raw, TOOL_INPUT_LIMIT));
        }
    }
}

fn post_tool_use(fields: &HookPayload, block: &mut Block) {
    block.field("Tool", &fields.text_or("tool_name", "unknown"));
    block.field("Status", &tool_status(fields.get("tool_response")));
}

/// Outcome line for a finished tool call. An absent response counts as an
/// empty object.
pub fn tool_status(response: Option<&Value>) -> String {
    match response {
        None => "Success".to_string(),
        Some(Value::Object(map)) => match map.get("error") {
            Some(error) => {
                let text = display_value(error).filter(|s| !s.is_empty());
                format!("Error - {}", text.as_deref().unwrap_or("Unknown error"))
            }
            None => "Success".to_string(),
        },
        Some(_) => "Completed".to_string(),
    }
}

fn pre_compact(fields: &HookPayload, block: &mut Block) {
    block.field("Trigger", &fields.text_or("trigger", "unknown"));
    if let Some(instructions) = fields.text("custom_instructions").filter(|s| !s.is_empty()) {
        block.field(
            "Custom Instructions",
            &truncate(&instructions, CUSTOM_INSTRUCTIONS_LIMIT),
        );
    }
}

fn notification(fields: &HookPayload, block: &mut Block) {
    block.field("Type", &fields.text_or("type", "unknown"));
    block.field("Message", &fields.text_or("message", ""));
}
