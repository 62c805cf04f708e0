//! `AccessControlUpgradeable` role storage.
//!
//! `_roles` is `mapping(bytes32 => RoleData)` where
//! `RoleData { mapping(address => bool) members; bytes32 adminRole; }`.

use alloy_primitives::{b256, keccak256, Address, B256, U256};

use crate::storage::{mapping_slot, Storage};

pub const DEFAULT_ADMIN_ROLE: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000000");

pub fn automatic_deploy_role() -> B256 {
    keccak256("AUTOMATIC_DEPLOY_ROLE")
}

pub fn token_registrar_role() -> B256 {
    keccak256("TOKEN_REGISTRAR_ROLE")
}

fn member_slot(roles_slot: U256, role: B256, account: Address) -> U256 {
    // `members` is the first field of RoleData
    let members = mapping_slot(&role, roles_slot);
    mapping_slot(&account, members)
}

pub fn grant_role(storage: &mut Storage, roles_slot: U256, role: B256, account: Address) {
    storage.write_bool(member_slot(roles_slot, role, account), 0, true);
}

pub fn has_role(storage: &Storage, roles_slot: U256, role: B256, account: Address) -> bool {
    !storage.read(member_slot(roles_slot, role, account)).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use alloy_primitives::address;

    const DEPLOYER: Address = address!("00000000000000000000000000000000000000aa");

    #[test]
    fn grant_sets_member_flag_only() {
        let mut storage = Storage::new();
        grant_role(&mut storage, layout::ROLES, DEFAULT_ADMIN_ROLE, DEPLOYER);

        assert_eq!(storage.len(), 1);
        assert!(has_role(&storage, layout::ROLES, DEFAULT_ADMIN_ROLE, DEPLOYER));
        assert!(!has_role(&storage, layout::ROLES, automatic_deploy_role(), DEPLOYER));
    }

    #[test]
    fn roles_are_distinct() {
        assert_ne!(automatic_deploy_role(), token_registrar_role());
        assert_ne!(automatic_deploy_role(), DEFAULT_ADMIN_ROLE);
    }
}
