//! In-memory EVM for inspecting generated genesis state.

use revm::{
    primitives::{
        address, keccak256, AccountInfo, Address, Bytecode, Bytes, ExecutionResult, Output,
        TransactTo, U256,
    },
    Evm, InMemoryDB,
};
use tracing::debug;

use crate::{
    error::{Error, Result, TxResult},
    generator::Allocation,
};

pub const CALLER: Address = address!("0000000000000000000000000000000000000001");

/// Writes every account of `allocation`, code and storage, into `db`.
pub fn insert_allocation(db: &mut InMemoryDB, allocation: &Allocation) {
    for (addr, account) in allocation {
        let info = AccountInfo::new(
            account.balance,
            account.nonce,
            keccak256(&account.code),
            Bytecode::new_raw(account.code.clone()),
        );
        db.insert_account_info(*addr, info);

        for (slot, value) in &account.storage {
            db.insert_account_storage(*addr, *slot, *value)
                .unwrap_or_else(|never| match never {});
        }
        debug!("Inserted {} ({} slots)", addr, account.storage.len());
    }
}

pub fn read_slot(db: &InMemoryDB, addr: Address, slot: U256) -> U256 {
    db.accounts
        .get(&addr)
        .and_then(|account| account.storage.get(&slot).copied())
        .unwrap_or_default()
}

pub fn call(db: &mut InMemoryDB, addr: Address, calldata: Bytes) -> Result<TxResult> {
    let mut evm = Evm::builder()
        .with_db(db)
        .modify_tx_env(|tx| {
            tx.caller = CALLER;
            tx.transact_to = TransactTo::Call(addr);
            tx.data = calldata;
            tx.value = U256::ZERO;
            tx.gas_limit = 1_000_000;
        })
        .build();

    let result = evm.transact_commit()?;

    match result {
        ExecutionResult::Success {
            output: Output::Call(value),
            gas_used,
            logs,
            ..
        } => {
            let tx_result = TxResult {
                output: value.to_vec(),
                logs,
                gas_used,
                status: true,
            };
            debug!("Call to {}\n{}", addr, tx_result);
            Ok(tx_result)
        }
        result => Err(Error::UnexpectedExecResult(result)),
    }
}
