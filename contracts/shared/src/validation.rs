//! Validation helpers for the proposal vote contracts

use crate::constants::{ZERO_ACCOUNT_STRKEY, ZERO_CONTRACT_STRKEY};
use crate::errors::ContractError;
use soroban_sdk::{Address, Env, String};

// ===== Address Validation =====

/// True if `address` is the all-zero account or the all-zero contract id
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    let zero_account = Address::from_string(&String::from_str(env, ZERO_ACCOUNT_STRKEY));
    let zero_contract = Address::from_string(&String::from_str(env, ZERO_CONTRACT_STRKEY));

    *address == zero_account || *address == zero_contract
}

/// Reject the zero identity as a caller
///
/// # Returns
/// `Ok(())` for any real address, `Err(ContractError::InvalidCaller)` otherwise
pub fn validate_caller(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if is_zero_address(env, caller) {
        return Err(ContractError::InvalidCaller);
    }
    Ok(())
}

// ===== Numeric Validation =====

pub fn validate_quorum(quorum: u32) -> Result<(), ContractError> {
    if quorum == 0 {
        return Err(ContractError::InvalidQuorum);
    }
    Ok(())
}

/// Validate that `index` addresses one of `len` sequential entries
pub fn validate_index(index: u32, len: u32) -> Result<(), ContractError> {
    if index >= len {
        return Err(ContractError::IndexOutOfBounds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_zero_identities_rejected() {
        let env = Env::default();
        let account = Address::from_string(&String::from_str(&env, ZERO_ACCOUNT_STRKEY));
        let contract = Address::from_string(&String::from_str(&env, ZERO_CONTRACT_STRKEY));

        assert_eq!(validate_caller(&env, &account), Err(ContractError::InvalidCaller));
        assert_eq!(validate_caller(&env, &contract), Err(ContractError::InvalidCaller));
    }

    #[test]
    fn test_generated_address_accepted() {
        let env = Env::default();
        let caller = Address::generate(&env);

        assert!(!is_zero_address(&env, &caller));
        assert_eq!(validate_caller(&env, &caller), Ok(()));
    }

    #[test]
    fn test_quorum_must_be_positive() {
        assert_eq!(validate_quorum(0), Err(ContractError::InvalidQuorum));
        assert_eq!(validate_quorum(1), Ok(()));
        assert_eq!(validate_quorum(u32::MAX), Ok(()));
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(validate_index(0, 0), Err(ContractError::IndexOutOfBounds));
        assert_eq!(validate_index(0, 1), Ok(()));
        assert_eq!(validate_index(1, 1), Err(ContractError::IndexOutOfBounds));
    }
}
