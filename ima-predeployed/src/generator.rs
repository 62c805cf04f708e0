use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, U256};
use serde::Serialize;

use crate::{
    artifact::ArtifactStore,
    error::Result,
    storage::Storage,
};

/// Genesis allocation: predeployed address to account.
pub type Allocation = BTreeMap<Address, GenesisAccount>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisAccount {
    pub code: Bytes,
    pub balance: U256,
    pub nonce: u64,
    pub storage: Storage,
}

/// Runtime bytecode paired with its initialized storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractGenerator {
    pub bytecode: Bytes,
    pub storage: Storage,
}

impl ContractGenerator {
    pub fn new(bytecode: Bytes, storage: Storage) -> Self {
        Self { bytecode, storage }
    }

    pub fn generate(&self, balance: U256, nonce: u64) -> GenesisAccount {
        GenesisAccount {
            code: self.bytecode.clone(),
            balance,
            nonce,
            storage: self.storage.clone(),
        }
    }

    pub fn generate_allocation(&self, address: Address, balance: U256, nonce: u64) -> Allocation {
        Allocation::from([(address, self.generate(balance, nonce))])
    }
}

/// A contract that can be written into genesis state.
pub trait Predeployed {
    /// Filename of the artifact holding the contract's bytecode.
    fn artifact_filename(&self) -> &'static str;

    /// Storage as left by the contract's initializer.
    fn storage(&self) -> Result<Storage>;

    fn build(&self, artifacts: &ArtifactStore) -> Result<ContractGenerator> {
        let artifact = artifacts.load(self.artifact_filename())?;
        let storage = self.storage()?;

        Ok(ContractGenerator::new(artifact.deployed_bytecode, storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn allocation_holds_a_single_account() {
        let mut storage = Storage::new();
        storage.write_uint256(U256::ZERO, U256::from(1));
        let generator = ContractGenerator::new(Bytes::from_static(&[0x60, 0x00]), storage.clone());

        let addr = address!("d2aaa00500000000000000000000000000000000");
        let allocation = generator.generate_allocation(addr, U256::from(5), 1);

        assert_eq!(allocation.len(), 1);
        let account = &allocation[&addr];
        assert_eq!(account.balance, U256::from(5));
        assert_eq!(account.nonce, 1);
        assert_eq!(account.storage, storage);
    }

    #[test]
    fn account_serializes_to_genesis_json() {
        let generator = ContractGenerator::new(Bytes::from_static(&[0x60, 0x00]), Storage::new());
        let json = serde_json::to_value(generator.generate(U256::ZERO, 0)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": "0x6000",
                "balance": "0x0",
                "nonce": 0,
                "storage": {}
            })
        );
    }
}
