#![no_std]
//! Factory for proposal registries.
//!
//! Each `deploy` instantiates a fresh, empty registry contract from the wasm
//! hash given at construction and records its address. The factory never
//! talks to a registry after deploying it.
//!
//! The deploy path is exercised against the real registry wasm in
//! `tests/deploy.rs`, which only compiles with the `registry-wasm` feature:
//!
//! ```text
//! cargo build -p proposal-vote --target wasm32-unknown-unknown --release
//! cargo test -p proposal-vote-factory --features registry-wasm
//! ```

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Symbol, Vec,
};

use shared::validate_index;

pub use shared::ContractError;

mod storage;

pub const REGISTRY_DEPLOYED: &str = "RegistryDeployed";

/// Deterministic salt for the `index`-th deployment.
fn salt_for(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}

#[contract]
pub struct ProposalVoteFactory;

#[contractimpl]
impl ProposalVoteFactory {
    pub fn __constructor(env: Env, registry_wasm_hash: BytesN<32>) {
        storage::set_wasm_hash(&env, &registry_wasm_hash);
    }

    /// Deploy a new empty registry and return its address.
    pub fn deploy(env: Env) -> Result<Address, ContractError> {
        let wasm_hash = storage::get_wasm_hash(&env).ok_or(ContractError::NotInitialized)?;
        let index = storage::get_registry_count(&env);

        let registry = env
            .deployer()
            .with_current_contract(salt_for(&env, index))
            .deploy_v2(wasm_hash, ());

        storage::push_registry(&env, index, &registry);

        log!(&env, "registry deployed", index, registry);
        env.events().publish(
            (Symbol::new(&env, REGISTRY_DEPLOYED),),
            (registry.clone(), index),
        );

        Ok(registry)
    }

    pub fn registry_count(env: Env) -> u32 {
        storage::get_registry_count(&env)
    }

    pub fn get_registry(env: Env, index: u32) -> Result<Address, ContractError> {
        validate_index(index, storage::get_registry_count(&env))?;

        storage::get_registry(&env, index).ok_or(ContractError::IndexOutOfBounds)
    }

    /// Every deployed registry in deployment order.
    pub fn get_registries(env: Env) -> Vec<Address> {
        let mut registries = Vec::new(&env);

        for index in 0..storage::get_registry_count(&env) {
            match storage::get_registry(&env, index) {
                Some(registry) => registries.push_back(registry),
                None => panic_with_error!(&env, ContractError::IndexOutOfBounds),
            }
        }

        registries
    }

    /// Address the next `deploy` call will produce.
    pub fn next_registry_address(env: Env) -> Address {
        let index = storage::get_registry_count(&env);

        env.deployer()
            .with_current_contract(salt_for(&env, index))
            .deployed_address()
    }

    pub fn registry_wasm_hash(env: Env) -> Result<BytesN<32>, ContractError> {
        storage::get_wasm_hash(&env).ok_or(ContractError::NotInitialized)
    }
}

#[cfg(test)]
mod test;
