//! Claude Code hook payload conventions.
//!
//! Claude Code sends every hook a bare JSON object with no event tag, so the
//! event kind is inferred from which keys are present. Rules are checked in
//! order and the first match wins; several rules can match the same payload
//! (e.g. one carrying both `prompt` and `trigger`), and order is the only
//! tie-break.

use crate::events::EventKind;

use super::HookPayload;

/// One classification rule: every key in `requires` must be present.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: EventKind,
    pub requires: &'static [&'static str],
}

impl Rule {
    pub fn matches(&self, payload: &HookPayload) -> bool {
        self.requires.iter().all(|key| payload.has(key))
    }
}

/// Classification rules in evaluation order.
///
/// `SubagentStop` payloads look exactly like `Stop` payloads, so no rule
/// yields it; it is only reachable through an explicit override.
pub const RULES: &[Rule] = &[
    Rule {
        kind: EventKind::SessionStart,
        requires: &["source", "session_id"],
    },
    Rule {
        kind: EventKind::UserPromptSubmit,
        requires: &["prompt"],
    },
    Rule {
        kind: EventKind::PreToolUse,
        requires: &["tool_name", "tool_input"],
    },
    Rule {
        kind: EventKind::PostToolUse,
        requires: &["tool_name", "tool_response"],
    },
    Rule {
        kind: EventKind::PreCompact,
        requires: &["trigger"],
    },
    Rule {
        kind: EventKind::Stop,
        requires: &["stop_hook_active"],
    },
    Rule {
        kind: EventKind::Notification,
        requires: &["type", "message"],
    },
];

/// Infer the event kind from the payload's field set.
pub fn classify(payload: &HookPayload) -> EventKind {
    RULES
        .iter()
        .find(|rule| rule.matches(payload))
        .map(|rule| rule.kind)
        .unwrap_or(EventKind::Unknown)
}

/// How a tool invocation is described in a pre-execution entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    /// Task delegation to a subagent.
    Subagent,
    /// Shell command.
    Command,
    /// Reads and writes against a single file.
    FileOperation,
    Other,
}

impl ToolCategory {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ToolCategory::Subagent => Some("Subagent"),
            ToolCategory::Command => Some("Command"),
            ToolCategory::FileOperation => Some("File Operation"),
            ToolCategory::Other => None,
        }
    }
}

pub fn tool_category(tool_name: &str) -> ToolCategory {
    match tool_name {
        "Task" => ToolCategory::Subagent,
        "Bash" => ToolCategory::Command,
        "Write" | "Edit" | "MultiEdit" | "Read" => ToolCategory::FileOperation,
        _ => ToolCategory::Other,
    }
}
