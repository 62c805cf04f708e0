//! EIP-1967 transparent upgradeable proxies.

use alloy_primitives::{Address, Bytes, U256};
use tracing::debug;

use crate::{
    artifact::ArtifactStore,
    error::Result,
    generator::{Allocation, ContractGenerator},
    layout::eip1967,
    storage::Storage,
};

pub const PROXY_ARTIFACT_FILENAME: &str = "TransparentUpgradeableProxy.json";

/// Places a contract behind a proxy: the proxy holds the state, the
/// implementation address holds the code.
#[derive(Debug, Clone)]
pub struct UpgradeableContractGenerator {
    pub implementation_address: Address,
    pub proxy_admin_address: Address,
    pub implementation: ContractGenerator,
    pub proxy_bytecode: Bytes,
}

impl UpgradeableContractGenerator {
    pub fn new(
        implementation_address: Address,
        proxy_admin_address: Address,
        implementation: ContractGenerator,
        proxy_bytecode: Bytes,
    ) -> Self {
        Self {
            implementation_address,
            proxy_admin_address,
            implementation,
            proxy_bytecode,
        }
    }

    /// Same as [`UpgradeableContractGenerator::new`], with the proxy code
    /// taken from the artifact store.
    pub fn from_artifacts(
        artifacts: &ArtifactStore,
        implementation_address: Address,
        proxy_admin_address: Address,
        implementation: ContractGenerator,
    ) -> Result<Self> {
        let proxy = artifacts.load(PROXY_ARTIFACT_FILENAME)?;

        Ok(Self::new(
            implementation_address,
            proxy_admin_address,
            implementation,
            proxy.deployed_bytecode,
        ))
    }

    fn proxy_storage(&self) -> Storage {
        let mut storage = self.implementation.storage.clone();
        storage.write_address(eip1967::IMPLEMENTATION, self.implementation_address);
        storage.write_address(eip1967::ADMIN, self.proxy_admin_address);
        storage
    }

    pub fn generate_allocation(
        &self,
        proxy_address: Address,
        balance: U256,
        nonce: u64,
    ) -> Allocation {
        debug!(
            "Proxy {} -> implementation {}",
            proxy_address, self.implementation_address
        );

        let proxy = ContractGenerator::new(self.proxy_bytecode.clone(), self.proxy_storage());
        let implementation =
            ContractGenerator::new(self.implementation.bytecode.clone(), Storage::new());

        let mut allocation = proxy.generate_allocation(proxy_address, balance, nonce);
        allocation.extend(implementation.generate_allocation(
            self.implementation_address,
            U256::ZERO,
            0,
        ));
        allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{addresses, test_utils::address_word};

    #[test]
    fn proxy_carries_state_and_eip1967_slots() {
        let mut storage = Storage::new();
        storage.write_uint256(U256::from(101), U256::from(42));
        let implementation =
            ContractGenerator::new(Bytes::from_static(&[0x60, 0x01]), storage);

        let proxy_address = addresses::TOKEN_MANAGER_ERC20;
        let implementation_address = addresses::implementation_address(proxy_address);
        let generator = UpgradeableContractGenerator::new(
            implementation_address,
            addresses::PROXY_ADMIN,
            implementation,
            Bytes::from_static(&[0x60, 0x02]),
        );

        let allocation = generator.generate_allocation(proxy_address, U256::ZERO, 0);
        assert_eq!(allocation.len(), 2);

        let proxy = &allocation[&proxy_address];
        assert_eq!(proxy.code.as_ref(), &[0x60, 0x02]);
        assert_eq!(proxy.storage.read(U256::from(101)), U256::from(42));
        assert_eq!(
            proxy.storage.read(eip1967::IMPLEMENTATION),
            address_word(implementation_address)
        );
        assert_eq!(
            proxy.storage.read(eip1967::ADMIN),
            address_word(addresses::PROXY_ADMIN)
        );

        let implementation = &allocation[&implementation_address];
        assert_eq!(implementation.code.as_ref(), &[0x60, 0x01]);
        assert!(implementation.storage.is_empty());
    }
}
