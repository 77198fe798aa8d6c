use soroban_sdk::{contracttype, String};

/// Lifecycle of a proposal. Values are what existing observers read.
///
/// `Rejected` has no entry transition; it is kept so the value space stays
/// stable for consumers.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    Pending = 0,
    Active = 1,
    Rejected = 2,
    Accepted = 3,
}

/// Stored proposal record, also returned as the read-only snapshot.
/// The voter set lives under separate keys and is never part of it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: String,
    pub description: String,
    pub quorum: u32,
    pub vote_count: u32,
    pub status: ProposalStatus,
}
