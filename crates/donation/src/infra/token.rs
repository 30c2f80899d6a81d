//! The token that is donated.

use {
    alloy::{
        primitives::{Address, TxHash, U256},
        providers::{PendingTransactionBuilder, PendingTransactionError, Provider},
    },
    async_trait::async_trait,
    contracts::alloy::ERC20,
    ethrpc::AlloyProvider,
    thiserror::Error,
};

/// A mined transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Confirmation(#[from] PendingTransactionError),
    #[error("transaction {0:#x} reverted")]
    Reverted(TxHash),
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait Token: Send + Sync {
    /// Raw token balance of `owner`.
    async fn balance_of(&self, owner: Address) -> Result<U256, Error>;

    /// Submits a transfer of `amount` raw token units from `from` to `to`.
    /// The transaction is signed by the wallet `from` belongs to. Returns as
    /// soon as the transaction was accepted for inclusion.
    async fn transfer(&self, from: Address, to: Address, amount: U256) -> Result<TxHash, Error>;

    /// Waits until the transaction is included in a block.
    async fn confirmation(&self, tx: TxHash) -> Result<Receipt, Error>;
}

/// An ERC-20 token reached through a provider whose transactions are signed by
/// the user's wallet.
pub struct Erc20 {
    contract: ERC20::Instance,
}

impl Erc20 {
    pub fn new(address: Address, provider: AlloyProvider) -> Self {
        Self {
            contract: ERC20::Instance::new(address, provider),
        }
    }
}

#[async_trait]
impl Token for Erc20 {
    async fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        Ok(self.contract.balanceOf(owner).call().await?)
    }

    async fn transfer(&self, from: Address, to: Address, amount: U256) -> Result<TxHash, Error> {
        let pending = self
            .contract
            .transfer(to, amount)
            .from(from)
            .send()
            .await?;
        Ok(*pending.tx_hash())
    }

    async fn confirmation(&self, tx: TxHash) -> Result<Receipt, Error> {
        let receipt = PendingTransactionBuilder::new(self.contract.provider().root().clone(), tx)
            .get_receipt()
            .await?;
        if !receipt.status() {
            return Err(Error::Reverted(tx));
        }
        Ok(Receipt {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

/// Creates the error a wallet or node reports when it refuses a request with
/// the given message. Useful for testing.
#[cfg(test)]
pub fn testing_error(message: &'static str) -> Error {
    Error::Contract(alloy::contract::Error::TransportError(
        ethrpc::alloy::errors::testing_error_response(-32000, message),
    ))
}
