use soroban_sdk::{contracterror, contracttype, Address, Env, String};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    UserRole(Address),
}

/// Closed set of roles recognized by the platform. Any address without a
/// stored assignment is a `Participant`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum Role {
    Participant,
    Brand,
    Admin,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RoleError {
    Unauthorized = 201,
    InvalidRole = 202,
}

pub const ROLE_PARTICIPANT: &str = "participant";
pub const ROLE_BRAND: &str = "brand";
pub const ROLE_ADMIN: &str = "admin";

/// Parses a role name submitted by a caller. Anything outside the closed
/// enumeration is rejected.
pub fn parse_role(env: &Env, raw: &String) -> Option<Role> {
    if raw == &String::from_str(env, ROLE_PARTICIPANT) {
        Some(Role::Participant)
    } else if raw == &String::from_str(env, ROLE_BRAND) {
        Some(Role::Brand)
    } else if raw == &String::from_str(env, ROLE_ADMIN) {
        Some(Role::Admin)
    } else {
        None
    }
}

pub fn role_to_string(env: &Env, role: Role) -> String {
    match role {
        Role::Participant => String::from_str(env, ROLE_PARTICIPANT),
        Role::Brand => String::from_str(env, ROLE_BRAND),
        Role::Admin => String::from_str(env, ROLE_ADMIN),
    }
}
