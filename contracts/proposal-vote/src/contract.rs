use soroban_sdk::{log, panic_with_error, Address, Env, String, Vec};

use shared::{validate_caller, validate_index, validate_quorum, ContractError};

use crate::events;
use crate::storage;
use crate::types::{Proposal, ProposalStatus};

pub struct RegistryContract;

fn load_proposal(env: &Env, index: u32) -> Result<Proposal, ContractError> {
    validate_index(index, storage::get_proposal_count(env))?;

    storage::get_proposal(env, index).ok_or(ContractError::IndexOutOfBounds)
}

impl RegistryContract {
    // -------------------------------
    // Proposal Creation
    // -------------------------------
    pub fn create_proposal(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        quorum: u32,
    ) -> Result<u32, ContractError> {
        validate_caller(&env, &caller)?;
        caller.require_auth();
        validate_quorum(quorum)?;

        let index = storage::get_proposal_count(&env);

        let proposal = Proposal {
            name: name.clone(),
            description,
            quorum,
            vote_count: 0,
            status: ProposalStatus::Pending,
        };

        storage::set_proposal(&env, index, &proposal);
        storage::set_proposal_count(&env, index + 1);

        log!(&env, "proposal created", index, quorum);
        events::proposal_created(&env, name, quorum);

        Ok(index)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote_on_proposal(env: Env, voter: Address, index: u32) -> Result<(), ContractError> {
        voter.require_auth();

        let mut proposal = load_proposal(&env, index)?;

        if proposal.status == ProposalStatus::Accepted {
            return Err(ContractError::AlreadyAccepted);
        }

        if storage::has_voted(&env, index, &voter) {
            return Err(ContractError::DuplicateVote);
        }

        // Every check has passed; nothing below can fail.
        storage::record_vote(&env, index, &voter);
        proposal.vote_count += 1;

        if proposal.status == ProposalStatus::Pending {
            proposal.status = ProposalStatus::Active;
            log!(&env, "proposal active", index);
            events::proposal_active(&env, proposal.name.clone(), proposal.vote_count);
        }

        if proposal.vote_count >= proposal.quorum {
            proposal.status = ProposalStatus::Accepted;
            log!(&env, "proposal accepted", index, proposal.vote_count);
            events::proposal_approved(&env, proposal.name.clone(), proposal.vote_count);
        }

        storage::set_proposal(&env, index, &proposal);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_a_proposal(env: Env, index: u32) -> Result<Proposal, ContractError> {
        load_proposal(&env, index)
    }

    pub fn get_all_proposals(env: Env) -> Vec<Proposal> {
        let mut proposals = Vec::new(&env);

        // Every index below the count was written on creation; a gap is corruption.
        for index in 0..storage::get_proposal_count(&env) {
            match load_proposal(&env, index) {
                Ok(proposal) => proposals.push_back(proposal),
                Err(err) => panic_with_error!(&env, err),
            }
        }

        proposals
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn has_voted(env: Env, index: u32, voter: Address) -> Result<bool, ContractError> {
        validate_index(index, storage::get_proposal_count(&env))?;

        Ok(storage::has_voted(&env, index, &voter))
    }
}
