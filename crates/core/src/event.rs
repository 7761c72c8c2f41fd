use serde::{Deserialize, Serialize};
use std::fmt;

/// All messages (events) that can flow through the application.
///
/// Sources:
/// - Refresh timer        → `Tick`
/// - Detail action button → `Detail`
/// - Config watcher task  → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Refresh loop ──────────────────────────────────────────────────────────
    /// The rearmed one-shot timer fired; run one sampling cycle.
    Tick,

    // ── User actions ──────────────────────────────────────────────────────────
    /// User asked for an on-demand report of one resource.
    Detail(DetailKind),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}

/// The on-demand reports a user can request into the text log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Cpu,
    Memory,
    Disk,
    Temperature,
}

impl DetailKind {
    /// Every action, in the order the action row shows them.
    pub const ALL: [DetailKind; 4] = [
        DetailKind::Cpu,
        DetailKind::Memory,
        DetailKind::Disk,
        DetailKind::Temperature,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            DetailKind::Cpu         => "CPU Info",
            DetailKind::Memory      => "Memory Info",
            DetailKind::Disk        => "Disk Info",
            DetailKind::Temperature => "Temperature Info",
        }
    }
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
