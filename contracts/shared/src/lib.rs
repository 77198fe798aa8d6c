#![no_std]
//! # Shared Proposal Vote Library
//!
//! Reusable errors, constants and validation helpers for the proposal vote
//! registry and its factory.
//!
//! ## Modules
//!
//! - `errors` - The error enum both contracts return, with literal reason strings
//! - `constants` - Storage TTLs and the zero identities
//! - `validation` - Caller, quorum and index checks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::validation::{validate_caller, validate_index};
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::ContractError;
pub use validation::{is_zero_address, validate_caller, validate_index, validate_quorum};
