//! Proposal types

use serde::{Deserialize, Serialize};

/// Lifecycle status of a proposal.
///
/// Informational only: set at seed time and never derived from the tallies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProposalStatus {
    /// Proposal is open and accepting votes
    Active,
    /// Proposal was accepted
    Passed,
    /// Proposal was rejected
    Failed,
}

/// A votable governance proposal with independent For/Against tallies.
///
/// Serialized field names match the JSON shape the front-end consumes
/// (`votesFor`, `votesAgainst`, `voted`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    pub votes_for: u32,
    pub votes_against: u32,
    /// Whether the current client has already voted on this proposal.
    /// This models a single local voting client, not a per-member ledger.
    pub voted: bool,
}

impl Proposal {
    /// Create a fresh Active proposal with zero tallies.
    pub fn new(id: u32, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            status: ProposalStatus::Active,
            votes_for: 0,
            votes_against: 0,
            voted: false,
        }
    }

    /// Total votes cast on this proposal so far.
    pub fn votes_cast(&self) -> u32 {
        self.votes_for + self.votes_against
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_creation() {
        let proposal = Proposal::new(
            1,
            "Increase Warehouse Registration Fee".to_string(),
            "Raise the one-time fee from 100 HBAR to 150 HBAR.".to_string(),
        );

        assert_eq!(proposal.status, ProposalStatus::Active);
        assert_eq!(proposal.votes_cast(), 0);
        assert!(!proposal.voted);
    }

    #[test]
    fn test_wire_field_names() {
        let proposal = Proposal {
            id: 1,
            title: "Title".to_string(),
            description: "Description".to_string(),
            status: ProposalStatus::Active,
            votes_for: 2,
            votes_against: 1,
            voted: false,
        };

        let json = serde_json::to_value(&proposal).unwrap();
        assert_eq!(json["votesFor"], 2);
        assert_eq!(json["votesAgainst"], 1);
        assert_eq!(json["voted"], false);
        assert_eq!(json["status"], "Active");
    }
}
