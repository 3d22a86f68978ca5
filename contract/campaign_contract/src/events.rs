use soroban_sdk::{contracttype, Address, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub total_budget: i128,
    pub reward_per_mention: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardDisbursedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub amount: i128,
    pub remaining_budget: i128,
}

pub fn emit_campaign_created(env: &soroban_sdk::Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_reward_disbursed(env: &soroban_sdk::Env, event: RewardDisbursedEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_disbursed"),),
        event,
    );
}
