mod token_manager;
mod token_manager_erc20;

pub use token_manager::{TokenManagerGenerator, TokenManagerKind};
pub use token_manager_erc20::TokenManagerErc20Generator;
