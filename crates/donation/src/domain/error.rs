use {
    crate::infra::{token, wallet::ProviderError},
    thiserror::Error,
};

/// Everything that can go wrong in a session. The `Display` output is the
/// status shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error("MetaMask not detected. Please install MetaMask to continue.")]
    ProviderMissing,
    #[error("Wallet connection request was rejected.")]
    UserRejected,
    #[error("Error connecting wallet: {0}")]
    Wallet(#[source] ProviderError),
    #[error("Failed to switch to {network} network.")]
    NetworkSwitchFailed {
        network: String,
        source: ProviderError,
    },
    #[error("Failed to add {network} network. Please add it manually.")]
    NetworkAddFailed {
        network: String,
        source: ProviderError,
    },
    #[error("Please connect your wallet first.")]
    NotConnected,
    #[error("Insufficient {symbol} balance. You need at least {amount} {symbol} to donate.")]
    InsufficientBalance { amount: String, symbol: String },
    #[error("Another action is still in progress.")]
    Busy,
    #[error("Insufficient funds to cover the transfer and network fees.")]
    ChainInsufficientFunds(#[source] token::Error),
    #[error("Transaction rejected in wallet.")]
    UserRejectedTransfer(#[source] token::Error),
    #[error("Error processing donation: {0}")]
    UnclassifiedTransferError(#[source] token::Error),
    #[error("Failed to fetch {symbol} balance: {source}")]
    BalanceCheckFailed {
        symbol: String,
        source: token::Error,
    },
}

impl Error {
    /// Sorts a failed transfer into one of the cases the user gets a dedicated
    /// message for. Wallets and nodes don't agree on error codes so the
    /// message is all there is to go by.
    pub fn transfer(err: token::Error) -> Self {
        let message = err.to_string().to_lowercase();
        if message.contains("insufficient funds") {
            Self::ChainInsufficientFunds(err)
        } else if message.contains("user rejected") || message.contains("user denied") {
            Self::UserRejectedTransfer(err)
        } else {
            Self::UnclassifiedTransferError(err)
        }
    }
}
