//! Predeployed generator errors

use core::{convert::Infallible, fmt};
use std::path::PathBuf;

use revm::primitives::{Bytes, EVMError, ExecutionResult, Log};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct TxResult {
    pub output: Vec<u8>,
    pub logs: Vec<Log>,
    pub gas_used: u64,
    pub status: bool,
}

/// Error encountered while generating or inspecting predeployed state
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No artifact file at the given path
    ArtifactNotFound(PathBuf),
    /// Reading an artifact or config file failed
    Io(#[from] std::io::Error),
    /// Artifact is not a valid Hardhat artifact
    Json(#[from] serde_json::Error),
    /// Artifact has no deployed bytecode
    EmptyBytecode(String),
    /// An identifier could not be parsed as an address
    InvalidAddress { field: &'static str, input: String },
    /// Schain name is empty
    InvalidSchainName,
    /// Config file is not valid TOML for the generator
    Config(#[from] toml::de::Error),
    /// EVM error
    EvmError(#[from] EVMError<Infallible>),
    /// Unexpected result of the transaction execution error
    UnexpectedExecResult(ExecutionResult),
}

impl fmt::Display for TxResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tx Result:\n> success: {}\n> gas used: {}\n> outcome: {}\n> logs: {:#?}\n",
            self.status,
            self.gas_used,
            Bytes::from(self.output.clone()),
            self.logs,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactNotFound(path) => {
                write!(f, "Artifact not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "Invalid artifact: {}", e),
            Self::EmptyBytecode(name) => {
                write!(f, "Artifact for {} has empty deployed bytecode", name)
            }
            Self::InvalidAddress { field, input } => {
                write!(f, "Invalid {} address: {:?}", field, input)
            }
            Self::InvalidSchainName => write!(f, "Schain name must not be empty"),
            Self::Config(e) => write!(f, "Invalid config: {}", e),
            Self::EvmError(e) => write!(f, "{}", e),
            Self::UnexpectedExecResult(ExecutionResult::Revert { gas_used, output }) => {
                write!(
                    f,
                    "Unexpected result of the transaction execution:\n REVERT:\n > output [hex]: {}\n > gas used: {}",
                    output, gas_used
                )
            }
            Self::UnexpectedExecResult(other) => write!(
                f,
                "Unexpected result of the transaction execution: {:?}",
                other
            ),
        }
    }
}
