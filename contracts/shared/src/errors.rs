//! Error codes for the proposal vote contracts
//!
//! Codes are stable: off-chain consumers match on them, and `message()`
//! returns the literal reason each code stands for.

use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    /// Caller is the zero identity
    InvalidCaller = 1,

    /// Referenced proposal or registry index does not exist
    IndexOutOfBounds = 2,

    /// Proposal already reached its quorum
    AlreadyAccepted = 3,

    /// Caller already voted on this proposal
    DuplicateVote = 4,

    /// Quorum of zero requested
    InvalidQuorum = 5,

    /// Factory has no registry wasm hash configured
    NotInitialized = 6,
}

impl ContractError {
    /// Get the human-readable reason for the error
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::InvalidCaller => "Zero address is not allowed",
            ContractError::IndexOutOfBounds => "Index is out-of-bound",
            ContractError::AlreadyAccepted => "This proposal has been accepted already",
            ContractError::DuplicateVote => "You've voted already",
            ContractError::InvalidQuorum => "Quorum must be at least one",
            ContractError::NotInitialized => "Registry wasm hash is not configured",
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_existing_consumers() {
        assert_eq!(ContractError::InvalidCaller.message(), "Zero address is not allowed");
        assert_eq!(ContractError::IndexOutOfBounds.message(), "Index is out-of-bound");
        assert_eq!(
            ContractError::AlreadyAccepted.message(),
            "This proposal has been accepted already"
        );
        assert_eq!(ContractError::DuplicateVote.message(), "You've voted already");
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ContractError::InvalidCaller as u32, 1);
        assert_eq!(ContractError::IndexOutOfBounds as u32, 2);
        assert_eq!(ContractError::AlreadyAccepted as u32, 3);
        assert_eq!(ContractError::DuplicateVote as u32, 4);
        assert_eq!(ContractError::InvalidQuorum as u32, 5);
        assert_eq!(ContractError::NotInitialized as u32, 6);
    }
}
