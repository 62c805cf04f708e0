//! Storage layout of the schain token managers.
//!
//! ```text
//! --------Initializable--------
//! 0:    _initialized, _initializing
//! -----ContextUpgradeable------
//! 1:    __gap
//! ...   __gap
//! 50:   __gap
//! --AccessControlUpgradeable---
//! 51:   _roles
//! 52:   __gap
//! ...   __gap
//! 100:  __gap
//! ---------TokenManager---------
//! 101:  messageProxy
//! 102:  tokenManagerLinker
//! 103:  communityLocker
//! 104:  schainHash
//! 105:  depositBox, automaticDeploy
//! 106:  tokenManagers
//! ------TokenManagerERC20------
//! 107:  clonesErc20
//! 108:  totalSupplyOnMainnet
//! ```

use alloy_primitives::{uint, U256};

/// slot 0: `_initialized` (uint8, byte 0), `_initializing` (bool, byte 1)
pub const INITIALIZED: U256 = U256::from_limbs([0, 0, 0, 0]);
/// slot 51: `_roles` (mapping(bytes32 => RoleData))
pub const ROLES: U256 = U256::from_limbs([51, 0, 0, 0]);

pub mod token_manager {
    use super::U256;

    /// slot 101: messageProxy (address)
    pub const MESSAGE_PROXY: U256 = U256::from_limbs([101, 0, 0, 0]);
    /// slot 102: tokenManagerLinker (address)
    pub const TOKEN_MANAGER_LINKER: U256 = U256::from_limbs([102, 0, 0, 0]);
    /// slot 103: communityLocker (address)
    pub const COMMUNITY_LOCKER: U256 = U256::from_limbs([103, 0, 0, 0]);
    /// slot 104: schainHash (bytes32)
    pub const SCHAIN_HASH: U256 = U256::from_limbs([104, 0, 0, 0]);
    /// slot 105: depositBox (address, bytes 0..20), automaticDeploy (bool, byte 20)
    pub const DEPOSIT_BOX: U256 = U256::from_limbs([105, 0, 0, 0]);
    pub const AUTOMATIC_DEPLOY_OFFSET: usize = 20;
    /// slot 106: tokenManagers (mapping(bytes32 => address))
    pub const TOKEN_MANAGERS: U256 = U256::from_limbs([106, 0, 0, 0]);
}

pub mod token_manager_eth {
    use super::U256;

    /// slot 107: ethErc20 (address)
    pub const ETH_ERC20: U256 = U256::from_limbs([107, 0, 0, 0]);
}

pub mod token_manager_erc20 {
    use super::U256;

    /// slot 107: clonesErc20 (mapping(bytes32 => mapping(address => address)))
    pub const CLONES_ERC20: U256 = U256::from_limbs([107, 0, 0, 0]);
    /// slot 108: totalSupplyOnMainnet (mapping(address => uint256))
    pub const TOTAL_SUPPLY_ON_MAINNET: U256 = U256::from_limbs([108, 0, 0, 0]);
}

pub mod token_manager_erc721 {
    use super::U256;

    /// slot 107: clonesErc721 (mapping(bytes32 => mapping(address => address)))
    pub const CLONES_ERC721: U256 = U256::from_limbs([107, 0, 0, 0]);
}

pub mod token_manager_erc1155 {
    use super::U256;

    /// slot 107: clonesErc1155 (mapping(bytes32 => mapping(address => address)))
    pub const CLONES_ERC1155: U256 = U256::from_limbs([107, 0, 0, 0]);
}

/// EIP-1967 proxy slots.
pub mod eip1967 {
    use super::{uint, U256};

    /// bytes32(uint256(keccak256("eip1967.proxy.implementation")) - 1)
    pub const IMPLEMENTATION: U256 =
        uint!(0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc_U256);
    /// bytes32(uint256(keccak256("eip1967.proxy.admin")) - 1)
    pub const ADMIN: U256 =
        uint!(0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103_U256);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;

    #[test]
    fn eip1967_slots_are_derived_from_their_labels() {
        let implementation =
            U256::from_be_bytes(keccak256("eip1967.proxy.implementation").0) - U256::from(1);
        let admin = U256::from_be_bytes(keccak256("eip1967.proxy.admin").0) - U256::from(1);

        assert_eq!(eip1967::IMPLEMENTATION, implementation);
        assert_eq!(eip1967::ADMIN, admin);
    }

    #[test]
    fn variant_fields_follow_the_base_layout() {
        assert_eq!(
            token_manager::TOKEN_MANAGERS + U256::from(1),
            token_manager_erc20::CLONES_ERC20
        );
        assert_eq!(
            token_manager_erc20::CLONES_ERC20 + U256::from(1),
            token_manager_erc20::TOTAL_SUPPLY_ON_MAINNET
        );

        let first_variant_slot = token_manager::TOKEN_MANAGERS + U256::from(1);
        for slot in [
            token_manager_eth::ETH_ERC20,
            token_manager_erc721::CLONES_ERC721,
            token_manager_erc1155::CLONES_ERC1155,
        ] {
            assert_eq!(slot, first_variant_slot);
        }
    }
}
