use alloy_primitives::{Address, U256};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{addresses, contracts::TokenManagerKind, error::Result};

/// Configuration for genesis generation (`predeployed.toml`)
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the schain the state is generated for
    pub schain_name: String,

    /// Account granted the admin roles of every predeployed contract
    pub owner_address: String,

    /// Directory holding the Hardhat artifacts
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Admin of the upgradeable proxies
    #[serde(default = "default_proxy_admin")]
    pub proxy_admin_address: Address,

    /// Balance of every predeployed proxy, as a `0x` hex string
    /// (`balance = "0x64"`); plain TOML integers are rejected
    #[serde(default)]
    pub balance: U256,

    /// Nonce of every predeployed proxy
    #[serde(default)]
    pub nonce: u64,

    /// Mainnet deposit box paired with each token manager
    #[serde(default)]
    pub deposit_boxes: DepositBoxes,
}

/// Deposit box addresses; a token manager is generated for each one set
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DepositBoxes {
    pub eth: Option<String>,
    pub erc20: Option<String>,
    pub erc721: Option<String>,
    pub erc721_with_metadata: Option<String>,
    pub erc1155: Option<String>,
}

impl DepositBoxes {
    pub fn get(&self, kind: TokenManagerKind) -> Option<&str> {
        let deposit_box = match kind {
            TokenManagerKind::Eth => &self.eth,
            TokenManagerKind::Erc20 => &self.erc20,
            TokenManagerKind::Erc721 => &self.erc721,
            TokenManagerKind::Erc721WithMetadata => &self.erc721_with_metadata,
            TokenManagerKind::Erc1155 => &self.erc1155,
        };
        deposit_box.as_deref()
    }

    /// Configured deposit boxes in token manager order
    pub fn iter(&self) -> impl Iterator<Item = (TokenManagerKind, &str)> + '_ {
        TokenManagerKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|deposit_box| (kind, deposit_box)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_proxy_admin() -> Address {
    addresses::PROXY_ADMIN
}

impl GeneratorConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Artifacts directory, relative paths resolved against `base`
    pub fn artifacts_path(&self, base: &Path) -> PathBuf {
        if self.artifacts_dir.is_absolute() {
            self.artifacts_dir.clone()
        } else {
            base.join(&self.artifacts_dir)
        }
    }
}
