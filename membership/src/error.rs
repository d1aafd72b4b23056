//! Membership error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MembershipError {
    #[error("Duplicate member address: {0}")]
    DuplicateMember(String),
}

pub type Result<T> = std::result::Result<T, MembershipError>;
