//! Vote choices and confirmation receipts

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PROPOSAL_ID_WIDTH;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteChoice {
    For,
    Against,
}

impl VoteChoice {
    /// Upper-cased label used in confirmation notices
    pub fn label(&self) -> &'static str {
        match self {
            VoteChoice::For => "FOR",
            VoteChoice::Against => "AGAINST",
        }
    }
}

/// Confirmation event emitted when a vote is accepted.
///
/// Carries the data the presentation layer needs to surface the
/// "Vote Cast!" notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteReceipt {
    pub proposal_id: u32,
    pub choice: VoteChoice,
}

impl VoteReceipt {
    /// Display text for the confirmation notice.
    pub fn message(&self) -> String {
        format!(
            "You voted '{}' for Proposal #{:0width$}.",
            self.choice.label(),
            self.proposal_id,
            width = PROPOSAL_ID_WIDTH
        )
    }
}

impl fmt::Display for VoteReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
