//! Percentage read-model

use serde::{Deserialize, Serialize};

use crate::proposal::Proposal;

/// Vote percentages for one proposal, derived against the membership size.
///
/// Values are kept as floating-point; rounding happens only through the
/// `*_rounded` display accessors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VoteBreakdown {
    pub for_percentage: f64,
    pub against_percentage: f64,
    pub participation_percentage: f64,
}

impl VoteBreakdown {
    /// Derive the breakdown for a proposal given the total member count.
    ///
    /// A zero-member registry yields all-zero percentages.
    pub fn derive(proposal: &Proposal, total_members: usize) -> Self {
        if total_members == 0 {
            return Self {
                for_percentage: 0.0,
                against_percentage: 0.0,
                participation_percentage: 0.0,
            };
        }

        let total = total_members as f64;
        let for_percentage = f64::from(proposal.votes_for) / total * 100.0;
        let against_percentage = f64::from(proposal.votes_against) / total * 100.0;

        Self {
            for_percentage,
            against_percentage,
            participation_percentage: for_percentage + against_percentage,
        }
    }

    /// For-percentage rounded to the nearest integer, for display
    pub fn for_rounded(&self) -> u32 {
        self.for_percentage.round() as u32
    }

    /// Against-percentage rounded to the nearest integer, for display
    pub fn against_rounded(&self) -> u32 {
        self.against_percentage.round() as u32
    }

    /// Participation rounded to the nearest integer, for display
    pub fn participation_rounded(&self) -> u32 {
        self.participation_percentage.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::ProposalStatus;

    fn proposal(votes_for: u32, votes_against: u32) -> Proposal {
        Proposal {
            id: 1,
            title: "Test".to_string(),
            description: "Desc".to_string(),
            status: ProposalStatus::Active,
            votes_for,
            votes_against,
            voted: false,
        }
    }

    #[test]
    fn test_breakdown_five_members() {
        // 2 for, 1 against out of 5 members
        let breakdown = VoteBreakdown::derive(&proposal(2, 1), 5);

        assert_eq!(breakdown.for_rounded(), 40);
        assert_eq!(breakdown.against_rounded(), 20);
        assert_eq!(breakdown.participation_rounded(), 60);
    }

    #[test]
    fn test_percentages_sum_to_participation() {
        let breakdown = VoteBreakdown::derive(&proposal(1, 2), 3);

        let sum = breakdown.for_percentage + breakdown.against_percentage;
        assert!((sum - breakdown.participation_percentage).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_stay_in_range() {
        for votes_for in 0..=5 {
            for votes_against in 0..=(5 - votes_for) {
                let breakdown = VoteBreakdown::derive(&proposal(votes_for, votes_against), 5);
                assert!(breakdown.for_percentage >= 0.0);
                assert!(breakdown.for_percentage <= 100.0);
                assert!(breakdown.against_percentage >= 0.0);
                assert!(breakdown.against_percentage <= 100.0);
                assert!(breakdown.participation_percentage <= 100.0);
            }
        }
    }

    #[test]
    fn test_zero_member_registry() {
        let breakdown = VoteBreakdown::derive(&proposal(0, 0), 0);

        assert_eq!(breakdown.for_percentage, 0.0);
        assert_eq!(breakdown.against_percentage, 0.0);
        assert_eq!(breakdown.participation_percentage, 0.0);
    }
}
