//! Outcomes of the edit/create modal dialogs.
//!
//! The shell resolves a dialog presentation to one of these variants; the
//! list screen pattern-matches to decide whether a reload is due. A typed
//! variant instead of a string "role" so a typo can't silently skip the
//! refresh.

use serde::{Deserialize, Serialize};

/// How an expense or category dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogOutcome {
    /// Closed without touching the record
    Dismissed,
    /// A record was created or updated
    Saved,
    /// The record was deleted
    Deleted,
}

impl DialogOutcome {
    /// True when the list showing the record must be reloaded
    pub fn requires_reload(&self) -> bool {
        matches!(self, Self::Saved | Self::Deleted)
    }
}
