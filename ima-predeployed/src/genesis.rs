use tracing::info;

use crate::{
    addresses,
    artifact::ArtifactStore,
    config::GeneratorConfig,
    contracts::{TokenManagerErc20Generator, TokenManagerGenerator, TokenManagerKind},
    error::Result,
    generator::{Allocation, ContractGenerator, Predeployed},
    proxy::UpgradeableContractGenerator,
};

fn build_token_manager(
    config: &GeneratorConfig,
    artifacts: &ArtifactStore,
    kind: TokenManagerKind,
    deposit_box: &str,
) -> Result<ContractGenerator> {
    match kind {
        TokenManagerKind::Erc20 => TokenManagerErc20Generator::new(
            config.owner_address.as_str(),
            deposit_box,
            config.schain_name.as_str(),
        )
        .build(artifacts),
        kind => TokenManagerGenerator::new(
            kind,
            config.owner_address.as_str(),
            deposit_box,
            config.schain_name.as_str(),
        )
        .build(artifacts),
    }
}

/// Proxied token managers for every deposit box in `config`.
pub fn generate_token_managers(
    config: &GeneratorConfig,
    artifacts: &ArtifactStore,
) -> Result<Allocation> {
    let mut allocation = Allocation::new();

    for (kind, deposit_box) in config.deposit_boxes.iter() {
        let implementation = build_token_manager(config, artifacts, kind, deposit_box)?;
        let proxy_address = kind.address();
        let upgradeable = UpgradeableContractGenerator::from_artifacts(
            artifacts,
            addresses::implementation_address(proxy_address),
            config.proxy_admin_address,
            implementation,
        )?;

        allocation.extend(upgradeable.generate_allocation(
            proxy_address,
            config.balance,
            config.nonce,
        ));
        info!("Generated {} at {}", kind, proxy_address);
    }

    info!(
        "Generated {} accounts for schain {:?}",
        allocation.len(),
        config.schain_name
    );

    Ok(allocation)
}
