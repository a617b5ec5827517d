//! Session snapshot for deterministic parity testing

use crate::session::GotoSession;
use goto_core::JumpTarget;
use serde::{Deserialize, Serialize};

/// Observable session state captured for parity testing
///
/// Two hosts that open the box over the same snapshots and feed it the same
/// input must capture identical snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub input: String,
    pub target: Option<JumpTarget>,
    pub status_message: String,
}

impl SessionSnapshot {
    /// Captures the observable state of a session
    pub fn capture(session: &GotoSession) -> Self {
        Self {
            input: session.input().to_string(),
            target: session.accept(),
            status_message: session.status_message().to_string(),
        }
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        // Hash input
        hasher.update(self.input.as_bytes());
        hasher.update(b"\n");

        // Hash target
        match &self.target {
            None => hasher.update([0u8]),
            Some(JumpTarget::GoTo(position)) => {
                hasher.update([1u8]);
                hasher.update(position.row.to_le_bytes());
                hasher.update(position.col.to_le_bytes());
            }
            Some(JumpTarget::Selection {
                anchor,
                active,
                quick,
            }) => {
                hasher.update([2u8]);
                hasher.update(anchor.row.to_le_bytes());
                hasher.update(anchor.col.to_le_bytes());
                hasher.update(active.row.to_le_bytes());
                hasher.update(active.col.to_le_bytes());
                hasher.update([*quick as u8]);
            }
        }

        // Hash status message
        hasher.update(self.status_message.as_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
