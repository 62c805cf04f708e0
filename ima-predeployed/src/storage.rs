//! Solidity storage words as written into genesis state.

use std::collections::{btree_map, BTreeMap};

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;
use serde::Serialize;
use tracing::trace;

/// Contract storage: slot to 32-byte word. Zero words are never kept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Storage(BTreeMap<U256, U256>);

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, slot: U256) -> U256 {
        self.0.get(&slot).copied().unwrap_or_default()
    }

    pub fn write_uint256(&mut self, slot: U256, value: U256) {
        trace!("slot {:#x} <- {:#x}", slot, value);
        if value.is_zero() {
            self.0.remove(&slot);
        } else {
            self.0.insert(slot, value);
        }
    }

    pub fn write_bytes32(&mut self, slot: U256, value: B256) {
        self.write_uint256(slot, value.into());
    }

    pub fn write_address(&mut self, slot: U256, address: Address) {
        self.write_uint256(slot, address.into_word().into());
    }

    /// Merges `value` into `width` bytes of the word at `slot`, starting
    /// `offset` bytes from its low end.
    ///
    /// # Panics
    ///
    /// Panics if the field does not fit in the word (`offset + width > 32`).
    pub fn write_packed(&mut self, slot: U256, offset: usize, width: usize, value: U256) {
        assert!(
            offset.checked_add(width).is_some_and(|end| end <= 32),
            "packed field exceeds the storage word"
        );

        let mask = if width == 32 {
            U256::MAX
        } else {
            (U256::from(1) << (width * 8)) - U256::from(1)
        };
        let shift = offset * 8;
        let word = (self.read(slot) & !(mask << shift)) | ((value & mask) << shift);
        self.write_uint256(slot, word);
    }

    pub fn write_address_packed(&mut self, slot: U256, offset: usize, address: Address) {
        self.write_packed(slot, offset, 20, address.into_word().into());
    }

    pub fn write_bool(&mut self, slot: U256, offset: usize, value: bool) {
        self.write_packed(slot, offset, 1, U256::from(value as u8));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, U256, U256> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Storage {
    type Item = (&'a U256, &'a U256);
    type IntoIter = btree_map::Iter<'a, U256, U256>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Slot of `mapping[key]` for a mapping declared at `slot`.
///
/// Only valid for value-type keys, whose ABI encoding is a single padded word.
pub fn mapping_slot<K: SolValue>(key: &K, slot: U256) -> U256 {
    let key_bytes = key.abi_encode();
    let id_bytes: [u8; 32] = slot.to_be_bytes();

    let mut concatenated = Vec::with_capacity(key_bytes.len() + id_bytes.len());
    concatenated.extend_from_slice(&key_bytes);
    concatenated.extend_from_slice(&id_bytes);

    keccak256(concatenated).into()
}
