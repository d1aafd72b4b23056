//! Ceres Protocol Governance Module
//!
//! Implements the DAO proposal voting model for the warehouse platform:
//! For/Against tallies per proposal, a one-vote-per-client rule, and
//! percentage read-models derived against the fixed membership size.

pub mod error;
pub mod ledger;
pub mod proposal;
pub mod tally;
pub mod vote;

pub use error::{GovernanceError, Result};
pub use ledger::{CastOutcome, ProposalLedger};
pub use proposal::{Proposal, ProposalStatus};
pub use tally::VoteBreakdown;
pub use vote::{VoteChoice, VoteReceipt};

/// Zero-pad width for proposal ids in confirmation notices
pub const PROPOSAL_ID_WIDTH: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_pad_width() {
        assert_eq!(PROPOSAL_ID_WIDTH, 3);
    }
}
