#![cfg(test)]

use super::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

#[test]
fn test_default_role_is_participant() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);

    // A wallet that was never assigned anything reads back as participant.
    let role = client.get_role(&wallet_1);
    assert_eq!(role, String::from_str(&env, "participant"));

    // Reads are idempotent.
    assert_eq!(client.get_role(&wallet_1), role);
}

#[test]
fn test_admin_can_set_role() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);
    assert_eq!(client.get_admin(), admin);

    let result = client.set_role(&admin, &wallet_1, &String::from_str(&env, "brand"));
    assert!(result);

    assert_eq!(client.get_role(&wallet_1), String::from_str(&env, "brand"));
}

#[test]
fn test_set_role_replaces_previous_assignment() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);

    client.set_role(&admin, &wallet_1, &String::from_str(&env, "brand"));
    client.set_role(&admin, &wallet_1, &String::from_str(&env, "admin"));
    assert_eq!(client.get_role(&wallet_1), String::from_str(&env, "admin"));

    // Back to the default label is also a plain overwrite.
    client.set_role(&admin, &wallet_1, &String::from_str(&env, "participant"));
    assert_eq!(client.get_role(&wallet_1), String::from_str(&env, "participant"));
}

#[test]
fn test_non_admin_cannot_set_role() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);
    let wallet_2 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);

    let result = client.try_set_role(&wallet_1, &wallet_2, &String::from_str(&env, "admin"));
    assert_eq!(result, Err(Ok(RoleError::Unauthorized)));

    // No assignment was written.
    assert_eq!(client.get_role(&wallet_2), String::from_str(&env, "participant"));
}

#[test]
fn test_holding_admin_role_does_not_grant_set_role() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);
    let wallet_2 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);

    // The admin role label is just a label; only the init-time admin
    // address can mutate assignments.
    client.set_role(&admin, &wallet_1, &String::from_str(&env, "admin"));

    let result = client.try_set_role(&wallet_1, &wallet_2, &String::from_str(&env, "brand"));
    assert_eq!(result, Err(Ok(RoleError::Unauthorized)));
}

#[test]
fn test_invalid_role_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);

    client.set_role(&admin, &wallet_1, &String::from_str(&env, "brand"));

    let result = client.try_set_role(&admin, &wallet_1, &String::from_str(&env, "super-user"));
    assert_eq!(result, Err(Ok(RoleError::InvalidRole)));

    // The failed call left the prior assignment in place.
    assert_eq!(client.get_role(&wallet_1), String::from_str(&env, "brand"));
}

#[test]
fn test_unauthorized_checked_before_role_validity() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let wallet_1 = Address::generate(&env);
    let wallet_2 = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);

    // A non-admin submitting a malformed role still sees Unauthorized, not
    // InvalidRole.
    let result = client.try_set_role(&wallet_1, &wallet_2, &String::from_str(&env, "super-user"));
    assert_eq!(result, Err(Ok(RoleError::Unauthorized)));
}

#[test]
#[should_panic(expected = "already initialized")]
fn test_init_twice_panics() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let contract_id = env.register(UserRolesContract, ());
    let client = UserRolesContractClient::new(&env, &contract_id);

    client.init(&admin);
    client.init(&admin);
}
