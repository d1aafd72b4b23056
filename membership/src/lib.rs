//! Ceres Protocol Membership Module
//!
//! Holds the fixed set of DAO member identities. The registry is built once
//! at startup and never mutated; its size is the denominator for every
//! governance percentage calculation.

pub mod error;
pub mod member;
pub mod registry;

pub use error::{MembershipError, Result};
pub use member::Member;
pub use registry::MembershipRegistry;

/// Leading characters kept when truncating an address for display
pub const SHORT_ADDRESS_PREFIX: usize = 8;

/// Trailing characters kept when truncating an address for display
pub const SHORT_ADDRESS_SUFFIX: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_constants() {
        assert_eq!(SHORT_ADDRESS_PREFIX, 8);
        assert_eq!(SHORT_ADDRESS_SUFFIX, 6);
    }
}
