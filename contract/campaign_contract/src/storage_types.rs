use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    RoleRegistry,
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    CampaignByOwner(Address, CampaignId),
}

pub type CampaignId = u64;

// A funded marketing offer. The owner and budget figures are fixed at
// creation; only remaining_budget moves, and only downward through
// disburse_reward.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub name: String,
    pub total_budget: i128,
    pub reward_per_mention: i128,
    pub remaining_budget: i128,
    pub created_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    Unauthorized = 101,
    InvalidParameters = 102,
    InsufficientFunds = 103,
    CampaignNotFound = 104,
    BudgetExhausted = 105,
}

// Constants
pub const MAX_NAME_LEN: u32 = 64;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
