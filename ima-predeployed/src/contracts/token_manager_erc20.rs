use core::ops::Deref;

use crate::{error::Result, generator::Predeployed, storage::Storage};

use super::token_manager::{TokenManagerGenerator, TokenManagerKind};

/// Generator for `TokenManagerERC20`.
///
/// Adds `clonesErc20` (slot 107) and `totalSupplyOnMainnet` (slot 108) to the
/// token manager layout, both empty at genesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenManagerErc20Generator(TokenManagerGenerator);

impl TokenManagerErc20Generator {
    pub const ARTIFACT_FILENAME: &'static str = TokenManagerKind::Erc20.artifact_filename();

    pub fn new(
        deployer_address: impl Into<String>,
        deposit_box_address: impl Into<String>,
        schain_name: impl Into<String>,
    ) -> Self {
        Self(TokenManagerGenerator::new(
            TokenManagerKind::Erc20,
            deployer_address,
            deposit_box_address,
            schain_name,
        ))
    }
}

impl Deref for TokenManagerErc20Generator {
    type Target = TokenManagerGenerator;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<TokenManagerErc20Generator> for TokenManagerGenerator {
    fn from(generator: TokenManagerErc20Generator) -> Self {
        generator.0
    }
}

impl Predeployed for TokenManagerErc20Generator {
    fn artifact_filename(&self) -> &'static str {
        Self::ARTIFACT_FILENAME
    }

    fn storage(&self) -> Result<Storage> {
        self.0.storage()
    }
}
