//! Proposal ledger and vote casting

use std::collections::HashSet;

use membership::MembershipRegistry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GovernanceError, Result};
use crate::proposal::Proposal;
use crate::tally::VoteBreakdown;
use crate::vote::{VoteChoice, VoteReceipt};

/// Result of a `cast_vote` call: the post-cast proposal snapshot plus the
/// confirmation receipt. `receipt` is `None` when the call was ignored
/// because this client had already voted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastOutcome {
    pub proposal: Proposal,
    pub receipt: Option<VoteReceipt>,
}

/// Owns the proposal list and the single mutating operation.
///
/// The ledger models exactly one voting client: each proposal carries a
/// `voted` flag rather than a per-member vote record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalLedger {
    proposals: Vec<Proposal>,
    total_members: usize,
}

impl ProposalLedger {
    /// Build a ledger from seed proposals against the given registry.
    ///
    /// Seed data is validated up front: proposal ids must be unique, and
    /// no proposal may carry more seeded votes than there are members.
    /// The cast path itself stays permissive and never re-checks the bound.
    pub fn new(registry: &MembershipRegistry, seeds: Vec<Proposal>) -> Result<Self> {
        let total_members = registry.size();
        let mut seen = HashSet::new();

        for proposal in &seeds {
            if !seen.insert(proposal.id) {
                return Err(GovernanceError::DuplicateProposal(proposal.id));
            }

            let votes = proposal.votes_cast();
            if votes as usize > total_members {
                return Err(GovernanceError::TallyExceedsMembership {
                    id: proposal.id,
                    votes,
                    members: total_members,
                });
            }
        }

        Ok(Self {
            proposals: seeds,
            total_members,
        })
    }

    /// All proposals in creation order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Look up a single proposal.
    pub fn proposal(&self, proposal_id: u32) -> Result<&Proposal> {
        self.proposals
            .iter()
            .find(|p| p.id == proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))
    }

    /// Membership size captured at construction.
    pub fn total_members(&self) -> usize {
        self.total_members
    }

    /// Cast the current client's vote on a proposal.
    ///
    /// If this client has already voted on the proposal, the call is a
    /// silent no-op: tallies are untouched and no receipt is produced.
    /// Otherwise exactly one tally increments and the `voted` flag is set;
    /// it never reverts.
    pub fn cast_vote(&mut self, proposal_id: u32, choice: VoteChoice) -> Result<CastOutcome> {
        let proposal = self
            .proposals
            .iter_mut()
            .find(|p| p.id == proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;

        if proposal.voted {
            warn!(proposal_id, "Repeat vote ignored");
            return Ok(CastOutcome {
                proposal: proposal.clone(),
                receipt: None,
            });
        }

        match choice {
            VoteChoice::For => proposal.votes_for += 1,
            VoteChoice::Against => proposal.votes_against += 1,
        }
        proposal.voted = true;

        info!(proposal_id, choice = choice.label(), "Vote cast");

        Ok(CastOutcome {
            proposal: proposal.clone(),
            receipt: Some(VoteReceipt {
                proposal_id,
                choice,
            }),
        })
    }

    /// Percentage read-model for one proposal.
    pub fn breakdown(&self, proposal_id: u32) -> Result<VoteBreakdown> {
        let proposal = self.proposal(proposal_id)?;
        Ok(VoteBreakdown::derive(proposal, self.total_members))
    }
}
