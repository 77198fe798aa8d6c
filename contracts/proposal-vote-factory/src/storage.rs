use soroban_sdk::{contracttype, Address, BytesN, Env};

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

#[contracttype]
pub enum DataKey {
    RegistryWasmHash,
    RegistryCount,
    Registry(u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Configuration ────────────────────────────────────────────────────────────

pub fn get_wasm_hash(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&DataKey::RegistryWasmHash)
}

pub fn set_wasm_hash(env: &Env, wasm_hash: &BytesN<32>) {
    env.storage()
        .instance()
        .set(&DataKey::RegistryWasmHash, wasm_hash);
    bump_instance(env);
}

// ── Deployed registries ──────────────────────────────────────────────────────

pub fn get_registry_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RegistryCount)
        .unwrap_or(0)
}

pub fn get_registry(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Registry(index))
}

/// Record `registry` at `index` and grow the count past it.
pub fn push_registry(env: &Env, index: u32, registry: &Address) {
    let key = DataKey::Registry(index);
    env.storage().persistent().set(&key, registry);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    env.storage()
        .instance()
        .set(&DataKey::RegistryCount, &(index + 1));
    bump_instance(env);
}
