#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};

mod storage;
use storage::*;

#[contract]
pub struct UserRolesContract;

#[contractimpl]
impl UserRolesContract {
    pub fn init(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("already initialized");
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
    }

    /// Assign a role to a user. Only the admin fixed at init may call this;
    /// the admin check runs before the role name is validated, so an
    /// unauthorized caller is rejected regardless of input.
    pub fn set_role(env: Env, caller: Address, user: Address, role: String) -> Result<bool, RoleError> {
        caller.require_auth();

        let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
        if caller != admin {
            return Err(RoleError::Unauthorized);
        }

        let parsed = parse_role(&env, &role).ok_or(RoleError::InvalidRole)?;

        env.storage().persistent().set(&DataKey::UserRole(user.clone()), &parsed);

        env.events().publish(
            (symbol_short!("role"), symbol_short!("set")),
            (user, role),
        );

        Ok(true)
    }

    /// Current role of a user, defaulting to "participant" for any address
    /// never assigned one. Total: never fails, never mutates.
    pub fn get_role(env: Env, user: Address) -> String {
        let role: Role = env
            .storage()
            .persistent()
            .get(&DataKey::UserRole(user))
            .unwrap_or(Role::Participant);
        role_to_string(&env, role)
    }

    pub fn get_admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }
}

#[cfg(test)]
mod test;
