use core::fmt;

use alloy_primitives::{keccak256, Address, U256};
use tracing::debug;

use crate::{
    access_control::{self, DEFAULT_ADMIN_ROLE},
    addresses,
    error::{Error, Result},
    generator::Predeployed,
    layout,
    storage::Storage,
};

/// Token managers predeployed on every schain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenManagerKind {
    Eth,
    Erc20,
    Erc721,
    Erc721WithMetadata,
    Erc1155,
}

impl TokenManagerKind {
    pub const ALL: [TokenManagerKind; 5] = [
        Self::Eth,
        Self::Erc20,
        Self::Erc721,
        Self::Erc721WithMetadata,
        Self::Erc1155,
    ];

    pub const fn artifact_filename(self) -> &'static str {
        match self {
            Self::Eth => "TokenManagerEth.json",
            Self::Erc20 => "TokenManagerERC20.json",
            Self::Erc721 => "TokenManagerERC721.json",
            Self::Erc721WithMetadata => "TokenManagerERC721WithMetadata.json",
            Self::Erc1155 => "TokenManagerERC1155.json",
        }
    }

    /// Proxy address the token manager is predeployed at.
    pub const fn address(self) -> Address {
        match self {
            Self::Eth => addresses::TOKEN_MANAGER_ETH,
            Self::Erc20 => addresses::TOKEN_MANAGER_ERC20,
            Self::Erc721 => addresses::TOKEN_MANAGER_ERC721,
            Self::Erc721WithMetadata => addresses::TOKEN_MANAGER_ERC721_WITH_METADATA,
            Self::Erc1155 => addresses::TOKEN_MANAGER_ERC1155,
        }
    }
}

impl fmt::Display for TokenManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eth => "TokenManagerEth",
            Self::Erc20 => "TokenManagerERC20",
            Self::Erc721 => "TokenManagerERC721",
            Self::Erc721WithMetadata => "TokenManagerERC721WithMetadata",
            Self::Erc1155 => "TokenManagerERC1155",
        };
        write!(f, "{}", name)
    }
}

/// Initialized state of a schain token manager.
///
/// The identifiers are kept as given; they are parsed when the storage is
/// generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenManagerGenerator {
    kind: TokenManagerKind,
    deployer_address: String,
    deposit_box_address: String,
    schain_name: String,
}

impl TokenManagerGenerator {
    pub fn new(
        kind: TokenManagerKind,
        deployer_address: impl Into<String>,
        deposit_box_address: impl Into<String>,
        schain_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            deployer_address: deployer_address.into(),
            deposit_box_address: deposit_box_address.into(),
            schain_name: schain_name.into(),
        }
    }

    pub fn kind(&self) -> TokenManagerKind {
        self.kind
    }

    pub fn deployer_address(&self) -> &str {
        &self.deployer_address
    }

    pub fn deposit_box_address(&self) -> &str {
        &self.deposit_box_address
    }

    pub fn schain_name(&self) -> &str {
        &self.schain_name
    }

    fn write_base_storage(&self, storage: &mut Storage) -> Result<()> {
        let deployer = parse_address("deployer", &self.deployer_address)?;
        let deposit_box = parse_address("deposit box", &self.deposit_box_address)?;
        if self.schain_name.is_empty() {
            return Err(Error::InvalidSchainName);
        }

        storage.write_packed(layout::INITIALIZED, 0, 1, U256::from(1));

        for role in [
            DEFAULT_ADMIN_ROLE,
            access_control::automatic_deploy_role(),
            access_control::token_registrar_role(),
        ] {
            access_control::grant_role(storage, layout::ROLES, role, deployer);
        }

        storage.write_address(
            layout::token_manager::MESSAGE_PROXY,
            addresses::MESSAGE_PROXY_FOR_SCHAIN,
        );
        storage.write_address(
            layout::token_manager::TOKEN_MANAGER_LINKER,
            addresses::TOKEN_MANAGER_LINKER,
        );
        storage.write_address(
            layout::token_manager::COMMUNITY_LOCKER,
            addresses::COMMUNITY_LOCKER,
        );
        storage.write_bytes32(
            layout::token_manager::SCHAIN_HASH,
            keccak256(self.schain_name.as_bytes()),
        );
        storage.write_address_packed(layout::token_manager::DEPOSIT_BOX, 0, deposit_box);
        storage.write_bool(
            layout::token_manager::DEPOSIT_BOX,
            layout::token_manager::AUTOMATIC_DEPLOY_OFFSET,
            false,
        );

        Ok(())
    }
}

impl Predeployed for TokenManagerGenerator {
    fn artifact_filename(&self) -> &'static str {
        self.kind.artifact_filename()
    }

    fn storage(&self) -> Result<Storage> {
        let mut storage = Storage::new();
        self.write_base_storage(&mut storage)?;

        if self.kind == TokenManagerKind::Eth {
            storage.write_address(layout::token_manager_eth::ETH_ERC20, addresses::ETH_ERC20);
        }

        debug!(
            "Generated {} storage for schain {:?}: {} slots",
            self.kind,
            self.schain_name,
            storage.len()
        );

        Ok(storage)
    }
}

fn parse_address(field: &'static str, input: &str) -> Result<Address> {
    input.parse().map_err(|_| Error::InvalidAddress {
        field,
        input: input.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{access_control::has_role, test_utils::*};

    fn generator(kind: TokenManagerKind) -> TokenManagerGenerator {
        TokenManagerGenerator::new(
            kind,
            DEPLOYER.to_string(),
            DEPOSIT_BOX.to_string(),
            SCHAIN_NAME,
        )
    }

    #[test]
    fn base_storage_layout() {
        let storage = generator(TokenManagerKind::Erc20).storage().unwrap();

        assert_eq!(storage.read(layout::INITIALIZED), U256::from(1));
        assert_eq!(
            storage.read(layout::token_manager::MESSAGE_PROXY),
            address_word(addresses::MESSAGE_PROXY_FOR_SCHAIN)
        );
        assert_eq!(
            storage.read(layout::token_manager::TOKEN_MANAGER_LINKER),
            address_word(addresses::TOKEN_MANAGER_LINKER)
        );
        assert_eq!(
            storage.read(layout::token_manager::COMMUNITY_LOCKER),
            address_word(addresses::COMMUNITY_LOCKER)
        );
        assert_eq!(
            storage.read(layout::token_manager::SCHAIN_HASH),
            U256::from_be_bytes(keccak256(SCHAIN_NAME).0)
        );
        // automaticDeploy is off, so the word is the bare address
        assert_eq!(
            storage.read(layout::token_manager::DEPOSIT_BOX),
            address_word(DEPOSIT_BOX)
        );
        assert!(storage.read(layout::token_manager::TOKEN_MANAGERS).is_zero());
    }

    #[test]
    fn deployer_holds_every_role() {
        let storage = generator(TokenManagerKind::Erc721).storage().unwrap();

        for role in [
            DEFAULT_ADMIN_ROLE,
            access_control::automatic_deploy_role(),
            access_control::token_registrar_role(),
        ] {
            assert!(has_role(&storage, layout::ROLES, role, DEPLOYER));
            assert!(!has_role(&storage, layout::ROLES, role, DEPOSIT_BOX));
        }
    }

    #[test]
    fn only_eth_links_eth_erc20() {
        let eth = generator(TokenManagerKind::Eth).storage().unwrap();
        let erc20 = generator(TokenManagerKind::Erc20).storage().unwrap();

        assert_eq!(
            eth.read(layout::token_manager_eth::ETH_ERC20),
            address_word(addresses::ETH_ERC20)
        );
        assert!(erc20.read(layout::token_manager_erc20::CLONES_ERC20).is_zero());
        assert_eq!(eth.len(), erc20.len() + 1);
    }

    #[test]
    fn identifiers_are_validated_on_generation() {
        let bad = TokenManagerGenerator::new(
            TokenManagerKind::Erc20,
            "0xDEPLOYER",
            DEPOSIT_BOX.to_string(),
            SCHAIN_NAME,
        );
        assert!(matches!(
            bad.storage(),
            Err(Error::InvalidAddress { field: "deployer", ref input }) if input == "0xDEPLOYER"
        ));

        let unnamed = TokenManagerGenerator::new(
            TokenManagerKind::Erc20,
            DEPLOYER.to_string(),
            DEPOSIT_BOX.to_string(),
            "",
        );
        assert!(matches!(unnamed.storage(), Err(Error::InvalidSchainName)));
    }

    #[test]
    fn kinds_have_distinct_artifacts_and_addresses() {
        for (i, a) in TokenManagerKind::ALL.iter().enumerate() {
            for b in &TokenManagerKind::ALL[i + 1..] {
                assert_ne!(a.artifact_filename(), b.artifact_filename());
                assert_ne!(a.address(), b.address());
            }
        }
    }
}
