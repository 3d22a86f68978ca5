#![no_std]

mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, token, Address, Env, String};
use storage_types::*;

use user_roles_contract::UserRolesContractClient;

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Wire up the two collaborators: the role registry this ledger reads
    /// roles from, and the reward token whose balances back campaign budgets.
    pub fn initialize(env: Env, role_registry: Address, token_address: Address) {
        if env.storage().instance().has(&DataKey::RoleRegistry) {
            panic!("already initialized");
        }

        env.storage().instance().set(&DataKey::RoleRegistry, &role_registry);
        env.storage().instance().set(&DataKey::Token, &token_address);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);

        extend_instance(&env);
    }

    /// Create a budget-backed campaign. The role gate runs first so a
    /// non-brand caller is rejected uniformly, whatever their token
    /// holdings. Every check happens before any state is touched; a failed
    /// call debits nothing and writes nothing.
    pub fn create_campaign(
        env: Env,
        brand: Address,
        name: String,
        total_budget: i128,
        reward_per_mention: i128,
    ) -> Result<CampaignId, CampaignError> {
        brand.require_auth();

        let registry: Address = env.storage().instance().get(&DataKey::RoleRegistry).unwrap();
        let roles = UserRolesContractClient::new(&env, &registry);
        if roles.get_role(&brand) != String::from_str(&env, "brand") {
            return Err(CampaignError::Unauthorized);
        }

        if total_budget < 0
            || reward_per_mention <= 0
            || reward_per_mention > total_budget
            || name.len() == 0
            || name.len() > MAX_NAME_LEN
        {
            return Err(CampaignError::InvalidParameters);
        }

        let token_address: Address = env.storage().instance().get(&DataKey::Token).unwrap();
        let token_client = token::Client::new(&env, &token_address);
        if token_client.balance(&brand) < total_budget {
            return Err(CampaignError::InsufficientFunds);
        }

        // Debit the full budget into the contract's custody.
        token_client.transfer(&brand, &env.current_contract_address(), &total_budget);

        let campaign_id: CampaignId = env.storage().instance().get(&DataKey::NextCampaignId).unwrap();

        let campaign = Campaign {
            id: campaign_id,
            owner: brand.clone(),
            name,
            total_budget,
            reward_per_mention,
            remaining_budget: total_budget,
            created_at: env.ledger().timestamp(),
        };

        env.storage().persistent().set(&PersistentKey::Campaign(campaign_id), &campaign);
        env.storage().persistent().set(&PersistentKey::CampaignByOwner(brand.clone(), campaign_id), &true);
        env.storage().instance().set(&DataKey::NextCampaignId, &(campaign_id + 1));

        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));
        extend_persistent(&env, &PersistentKey::CampaignByOwner(brand.clone(), campaign_id));
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                owner: brand,
                total_budget,
                reward_per_mention,
            },
        );

        Ok(campaign_id)
    }

    /// Pay one mention reward out of a campaign's remaining budget. Only
    /// the campaign owner may disburse. Returns the budget left after the
    /// payout.
    pub fn disburse_reward(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        recipient: Address,
    ) -> Result<i128, CampaignError> {
        caller.require_auth();

        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&PersistentKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)?;

        if caller != campaign.owner {
            return Err(CampaignError::Unauthorized);
        }

        if campaign.remaining_budget < campaign.reward_per_mention {
            return Err(CampaignError::BudgetExhausted);
        }

        let token_address: Address = env.storage().instance().get(&DataKey::Token).unwrap();
        let token_client = token::Client::new(&env, &token_address);
        token_client.transfer(
            &env.current_contract_address(),
            &recipient,
            &campaign.reward_per_mention,
        );

        campaign.remaining_budget -= campaign.reward_per_mention;
        env.storage().persistent().set(&PersistentKey::Campaign(campaign_id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));

        events::emit_reward_disbursed(
            &env,
            events::RewardDisbursedEvent {
                campaign_id,
                recipient,
                amount: campaign.reward_per_mention,
                remaining_budget: campaign.remaining_budget,
            },
        );

        Ok(campaign.remaining_budget)
    }

    /// Campaign details for display.
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Option<Campaign> {
        env.storage().persistent().get(&PersistentKey::Campaign(campaign_id))
    }

    pub fn get_role_registry(env: Env) -> Address {
        env.storage().instance().get(&DataKey::RoleRegistry).unwrap()
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
