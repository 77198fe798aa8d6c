#![no_std]
//! Proposal registry: participants register proposals and cast one vote
//! each until a proposal's quorum is met, at which point it is accepted and
//! closed to further votes.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod contract;
mod events;
mod storage;
mod types;

pub use events::{PROPOSAL_ACTIVE, PROPOSAL_APPROVED, PROPOSAL_CREATED};
pub use shared::ContractError;
pub use types::{Proposal, ProposalStatus};

use contract::RegistryContract;

#[contract]
pub struct ProposalVote;

#[contractimpl]
impl ProposalVote {
    /// Append a proposal and return its index. Rejects the zero identity
    /// and a quorum of zero.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        quorum: u32,
    ) -> Result<u32, ContractError> {
        RegistryContract::create_proposal(env, caller, name, description, quorum)
    }

    /// Cast `voter`'s single vote on the proposal at `index`.
    pub fn vote_on_proposal(env: Env, voter: Address, index: u32) -> Result<(), ContractError> {
        RegistryContract::vote_on_proposal(env, voter, index)
    }

    pub fn get_a_proposal(env: Env, index: u32) -> Result<Proposal, ContractError> {
        RegistryContract::get_a_proposal(env, index)
    }

    /// Every proposal in creation order.
    pub fn get_all_proposals(env: Env) -> Vec<Proposal> {
        RegistryContract::get_all_proposals(env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        RegistryContract::proposal_count(env)
    }

    pub fn has_voted(env: Env, index: u32, voter: Address) -> Result<bool, ContractError> {
        RegistryContract::has_voted(env, index, voter)
    }
}
