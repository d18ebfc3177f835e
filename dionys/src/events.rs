use alloy::rpc::types::eth::{Log as RpcLog, TransactionReceipt};
use alloy::sol_types::SolEvent;

/// Scan a slice of receipt logs and decode the first one matching `E`.
/// Logs emitted by other contracts in the same transaction simply fail
/// the selector check and are skipped.
pub fn first_event_in<E: SolEvent>(logs: &[RpcLog]) -> Option<E> {
    logs.iter()
        .find_map(|log| log.log_decode::<E>().ok().map(|l| l.inner.data))
}

/// Decode the first `E` emitted by a confirmed transaction, if any.
pub fn first_event<E: SolEvent>(receipt: &TransactionReceipt) -> Option<E> {
    first_event_in(receipt.inner.logs())
}
