//! Membership registry

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{MembershipError, Result};
use crate::member::Member;

/// The fixed, ordered set of DAO members.
///
/// Built once at startup from the address list supplied by the caller;
/// immutable for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipRegistry {
    members: Vec<Member>,
}

impl MembershipRegistry {
    /// Create a registry from the seed address list.
    ///
    /// Addresses are kept in registration order. Duplicates are rejected.
    pub fn new(addresses: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(addresses.len());

        for address in addresses {
            if !seen.insert(address.clone()) {
                return Err(MembershipError::DuplicateMember(address));
            }
            members.push(Member::new(address));
        }

        Ok(Self { members })
    }

    /// Number of registered members. Denominator for vote percentages.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Members in registration order, for display only.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
