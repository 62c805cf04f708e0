use alloy_core::hex;
use alloy_primitives::{address, Address, U256};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Once,
};

use crate::{contracts::TokenManagerKind, proxy::PROXY_ARTIFACT_FILENAME};

static INIT: Once = Once::new();

pub const DEPLOYER: Address = address!("00000000000000000000000000000000000000aa");
pub const DEPOSIT_BOX: Address = address!("00000000000000000000000000000000000000b2");
pub const SCHAIN_NAME: &str = "mychain";

/// Runtime code returning `sload(calldataload(0))`:
/// PUSH1 0 CALLDATALOAD SLOAD PUSH1 0 MSTORE PUSH1 32 PUSH1 0 RETURN
pub const STORAGE_READER_CODE: &[u8] = &[
    0x60, 0x00, 0x35, 0x54, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3,
];

pub fn initialize_logger() {
    INIT.call_once(|| {
        let log_level = std::env::var("RUST_LOG").unwrap_or("INFO".to_owned());
        let tracing_sub = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(tracing_sub)
            .expect("Setting tracing subscriber failed");
    });
}

/// Storage word of an address field.
pub fn address_word(addr: Address) -> U256 {
    addr.into_word().into()
}

pub fn write_artifact(
    dir: &Path,
    filename: &str,
    contract_name: &str,
    deployed_bytecode: &[u8],
) -> io::Result<PathBuf> {
    let artifact = serde_json::json!({
        "_format": "hh-sol-artifact-1",
        "contractName": contract_name,
        "sourceName": format!("contracts/{}.sol", contract_name),
        "abi": [],
        "bytecode": hex::encode_prefixed(deployed_bytecode),
        "deployedBytecode": hex::encode_prefixed(deployed_bytecode),
        "linkReferences": {},
        "deployedLinkReferences": {}
    });

    let path = dir.join(filename);
    fs::write(&path, artifact.to_string())?;
    Ok(path)
}

/// Token manager and proxy artifacts whose code is [`STORAGE_READER_CODE`].
pub fn write_fixture_artifacts(dir: &Path) -> io::Result<()> {
    for kind in TokenManagerKind::ALL {
        write_artifact(
            dir,
            kind.artifact_filename(),
            &kind.to_string(),
            STORAGE_READER_CODE,
        )?;
    }
    write_artifact(
        dir,
        PROXY_ARTIFACT_FILENAME,
        "TransparentUpgradeableProxy",
        STORAGE_READER_CODE,
    )?;

    Ok(())
}
