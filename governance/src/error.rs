//! Governance error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovernanceError {
    #[error("Proposal not found: {0}")]
    ProposalNotFound(u32),

    #[error("Duplicate proposal id in seed data: {0}")]
    DuplicateProposal(u32),

    #[error("Seed tallies for proposal {id} exceed membership: {votes} votes, {members} members")]
    TallyExceedsMembership { id: u32, votes: u32, members: usize },
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
