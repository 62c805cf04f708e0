//! Genesis state for the IMA contracts predeployed on a schain.

mod error;
pub use error::{Error, Result, TxResult};

pub mod access_control;
pub mod addresses;
pub mod artifact;
pub mod config;
pub mod contracts;
pub mod exec;
pub mod generator;
pub mod genesis;
pub mod layout;
pub mod proxy;
pub mod storage;

pub mod test_utils;
