//! This module implements the observability for the donation client. It
//! exposes functions which represent events that are meaningful to the system.
//! These functions are called when the corresponding events occur and log the
//! event.

use {
    crate::{
        domain::Error,
        infra::{cli, token::Receipt},
    },
    alloy::primitives::{Address, TxHash, U256},
};

/// Setup the observability. The log arguments configure the tokio tracing
/// framework.
pub fn init(args: &cli::Args) {
    let config = ::observe::Config::new(&args.log, args.stderr_threshold, args.use_json_logs);
    ::observe::tracing::initialize(&config);
}

/// Observe that the status shown to the user changed.
pub fn status(status: &str) {
    tracing::debug!(status, "status");
}

/// Observe that the wallet is connected to another chain than required.
pub fn wrong_chain(current: u64, required: u64) {
    tracing::info!(current, required, "wallet is connected to another chain");
}

/// Observe that the wallet doesn't know the required chain.
pub fn adding_chain(chain_id: u64) {
    tracing::info!(chain_id, "asking wallet to add chain");
}

/// Observe a successful connection.
pub fn connected(account: Address) {
    tracing::info!(%account, "wallet connected");
}

/// Observe that the wallet reported a different set of accounts.
pub fn accounts_changed(accounts: &[Address]) {
    tracing::info!(?accounts, "wallet accounts changed");
}

/// Observe a fetched balance.
pub fn balance(account: Address, balance: U256, sufficient: bool) {
    tracing::debug!(%account, %balance, sufficient, "fetched balance");
}

/// Observe that a balance was fetched for an account that is no longer the
/// connected one.
pub fn stale_balance(account: Address) {
    tracing::debug!(%account, "discarded balance of previously connected account");
}

/// Observe that a donation is about to be submitted.
pub fn donating(from: Address, to: Address, amount: U256) {
    tracing::info!(%from, %to, %amount, "submitting donation");
}

/// Observe that the donation was accepted by the wallet.
pub fn submitted(tx: TxHash) {
    tracing::info!(?tx, "donation submitted");
}

/// Observe that the donation was mined.
pub fn confirmed(receipt: &Receipt) {
    tracing::info!(tx = ?receipt.tx_hash, block = ?receipt.block_number, "donation confirmed");
}

/// Observe that an action failed.
pub fn failed(err: &Error) {
    tracing::warn!(?err, "{err}");
}
