use std::fmt;
use std::str::FromStr;

use color_eyre::eyre::{eyre, Report};

use crate::ingest::HookPayload;

/// Lifecycle event kinds reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SessionStart,
    UserPromptSubmit,
    PreToolUse,
    PostToolUse,
    PreCompact,
    Stop,
    SubagentStop,
    Notification,
    Unknown,
}

impl EventKind {
    pub const ALL: [EventKind; 9] = [
        EventKind::SessionStart,
        EventKind::UserPromptSubmit,
        EventKind::PreToolUse,
        EventKind::PostToolUse,
        EventKind::PreCompact,
        EventKind::Stop,
        EventKind::SubagentStop,
        EventKind::Notification,
        EventKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SessionStart => "SessionStart",
            EventKind::UserPromptSubmit => "UserPromptSubmit",
            EventKind::PreToolUse => "PreToolUse",
            EventKind::PostToolUse => "PostToolUse",
            EventKind::PreCompact => "PreCompact",
            EventKind::Stop => "Stop",
            EventKind::SubagentStop => "SubagentStop",
            EventKind::Notification => "Notification",
            EventKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Report;

    /// Case-insensitive match on the hook name, e.g. `SubagentStop` or `subagentstop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = EventKind::ALL.iter().map(|k| k.as_str()).collect();
                eyre!("unknown event kind '{}' (expected one of: {})", wanted, names.join(", "))
            })
    }
}

/// A classified hook payload, ready for rendering.
#[derive(Debug, Clone)]
pub struct HookEvent {
    pub kind: EventKind,
    pub fields: HookPayload,
}

impl HookEvent {
    pub fn new(kind: EventKind, fields: HookPayload) -> Self {
        Self { kind, fields }
    }
}
