use soroban_sdk::{contracttype, Address, Env};

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::types::Proposal;

#[contracttype]
pub enum DataKey {
    ProposalCount,
    Proposal(u32),
    Voter(u32, Address), // (proposal index, voter)
}

/// Called from every write path.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Proposal count ───────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env, index: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(index))
}

pub fn set_proposal(env: &Env, index: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(index);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    bump_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, index: u32, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(index, voter.clone()))
}

pub fn record_vote(env: &Env, index: u32, voter: &Address) {
    let key = DataKey::Voter(index, voter.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    bump_instance(env);
}
