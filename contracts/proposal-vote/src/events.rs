//! Notifications published by the registry.
//!
//! Each event carries its name as the single topic. Names and payload order
//! are fixed; existing observers subscribe on them.

use soroban_sdk::{Env, String, Symbol};

pub const PROPOSAL_CREATED: &str = "ProposalCreated";
pub const PROPOSAL_ACTIVE: &str = "ProposalActive";
pub const PROPOSAL_APPROVED: &str = "ProposalApproved";

/// `(name, quorum)`
pub fn proposal_created(env: &Env, name: String, quorum: u32) {
    env.events()
        .publish((Symbol::new(env, PROPOSAL_CREATED),), (name, quorum));
}

/// `(name, vote_count)`
pub fn proposal_active(env: &Env, name: String, vote_count: u32) {
    env.events()
        .publish((Symbol::new(env, PROPOSAL_ACTIVE),), (name, vote_count));
}

/// `(name, vote_count)`
pub fn proposal_approved(env: &Env, name: String, vote_count: u32) {
    env.events()
        .publish((Symbol::new(env, PROPOSAL_APPROVED),), (name, vote_count));
}
