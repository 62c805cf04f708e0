//! Well-known predeployed addresses on every schain.

use alloy_primitives::{address, Address};

pub const PROXY_ADMIN: Address = address!("d2aaa00000000000000000000000000000000000");
pub const MESSAGE_PROXY_FOR_SCHAIN: Address = address!("d2aaa00100000000000000000000000000000000");
pub const KEY_STORAGE: Address = address!("d2aaa00200000000000000000000000000000000");
pub const COMMUNITY_LOCKER: Address = address!("d2aaa00300000000000000000000000000000000");
pub const TOKEN_MANAGER_ETH: Address = address!("d2aaa00400000000000000000000000000000000");
pub const TOKEN_MANAGER_ERC20: Address = address!("d2aaa00500000000000000000000000000000000");
pub const TOKEN_MANAGER_ERC721: Address = address!("d2aaa00600000000000000000000000000000000");
pub const ETH_ERC20: Address = address!("d2aaa00700000000000000000000000000000000");
pub const TOKEN_MANAGER_LINKER: Address = address!("d2aaa00800000000000000000000000000000000");
pub const TOKEN_MANAGER_ERC1155: Address = address!("d2aaa00900000000000000000000000000000000");
pub const TOKEN_MANAGER_ERC721_WITH_METADATA: Address =
    address!("d2aaa00a00000000000000000000000000000000");

/// Address holding the implementation behind the proxy at `proxy`.
pub fn implementation_address(proxy: Address) -> Address {
    let mut bytes = proxy.0 .0;
    bytes[19] = 0x01;
    Address::from(bytes)
}
