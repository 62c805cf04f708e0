use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy_primitives::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Compiled contract as emitted by Hardhat (`artifacts/**/<Name>.json`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatArtifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub abi: serde_json::Value,
    pub bytecode: Bytes,
    pub deployed_bytecode: Bytes,
}

impl HardhatArtifact {
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(json)?;
        if artifact.deployed_bytecode.is_empty() {
            return Err(Error::EmptyBytecode(artifact.contract_name));
        }

        Ok(artifact)
    }
}

/// Directory of artifact files, looked up by filename.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self, filename: &str) -> Result<HardhatArtifact> {
        let path = self.dir.join(filename);
        debug!("Loading artifact: {}", path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ArtifactNotFound(path));
            }
            Err(e) => return Err(e.into()),
        };

        HardhatArtifact::from_json(&content)
    }
}
