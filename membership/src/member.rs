//! Member identity

use serde::{Deserialize, Serialize};

use crate::{SHORT_ADDRESS_PREFIX, SHORT_ADDRESS_SUFFIX};

/// A DAO member, identified by an opaque address string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub address: String,
}

impl Member {
    pub fn new(address: String) -> Self {
        Self { address }
    }

    /// Truncated form for display: first 8 characters, an ellipsis, then
    /// the last 6. Addresses too short to truncate are returned whole.
    pub fn short_address(&self) -> String {
        let len = self.address.chars().count();
        if len <= SHORT_ADDRESS_PREFIX + SHORT_ADDRESS_SUFFIX {
            return self.address.clone();
        }

        let prefix: String = self.address.chars().take(SHORT_ADDRESS_PREFIX).collect();
        let suffix: String = self
            .address
            .chars()
            .skip(len - SHORT_ADDRESS_SUFFIX)
            .collect();
        format!("{}...{}", prefix, suffix)
    }
}
