#![cfg(test)]

use soroban_sdk::{BytesN, Env};

use crate::storage::DataKey;
use crate::{ContractError, ProposalVoteFactory, ProposalVoteFactoryClient};

fn setup_env<'a>(seed: u8) -> (Env, ProposalVoteFactoryClient<'a>, BytesN<32>) {
    let env = Env::default();
    let wasm_hash = BytesN::from_array(&env, &[seed; 32]);

    let contract_id = env.register(ProposalVoteFactory, (wasm_hash.clone(),));
    let client = ProposalVoteFactoryClient::new(&env, &contract_id);

    (env, client, wasm_hash)
}

#[test]
fn test_constructor_stores_wasm_hash() {
    let (_env, client, wasm_hash) = setup_env(7);

    assert_eq!(client.registry_wasm_hash(), wasm_hash);
}

#[test]
fn test_fresh_factory_is_empty() {
    let (_env, client, _) = setup_env(7);

    assert_eq!(client.registry_count(), 0);
    assert_eq!(client.get_registries().len(), 0);
    assert_eq!(client.try_get_registry(&0), Err(Ok(ContractError::IndexOutOfBounds)));
}

#[test]
fn test_next_address_is_deterministic() {
    let (env, client, wasm_hash) = setup_env(7);

    let first = client.next_registry_address();
    assert_eq!(client.next_registry_address(), first);

    let other_id = env.register(ProposalVoteFactory, (wasm_hash,));
    let other = ProposalVoteFactoryClient::new(&env, &other_id);
    assert_ne!(other.next_registry_address(), first);
}

#[test]
#[should_panic]
fn test_deploy_unknown_wasm_fails() {
    let (_env, client, _) = setup_env(7);

    client.deploy();
}

#[test]
#[should_panic]
fn test_get_registries_surfaces_missing_entry() {
    let (env, client, _) = setup_env(7);

    env.as_contract(&client.address, || {
        env.storage().instance().set(&DataKey::RegistryCount, &1u32);
    });

    client.get_registries();
}
