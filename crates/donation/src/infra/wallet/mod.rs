//! The wallet the user authorizes the client with. Modeled after the
//! EIP-1193 provider API that browser wallets inject into web pages.

use {
    crate::infra::config::Chain,
    alloy::primitives::Address,
    async_trait::async_trait,
    thiserror::Error,
    tokio::sync::broadcast,
};

mod rpc;

pub use rpc::RpcWallet;

/// The user rejected the request.
pub const USER_REJECTED: i64 = 4001;
/// The wallet doesn't know the requested chain and it has to be added first.
pub const UNRECOGNIZED_CHAIN: i64 = 4902;
/// Generic JSON-RPC error, used when the wallet could not be reached or sent
/// back something unexpected.
pub const INTERNAL_ERROR: i64 = -32603;

/// An error returned by the wallet.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN
    }
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Asks the user to authorize the client (`eth_requestAccounts`). Returns
    /// the authorized accounts, the selected one first.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// The chain the wallet is currently connected to (`eth_chainId`).
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Asks the wallet to switch to another chain
    /// (`wallet_switchEthereumChain`).
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError>;

    /// Asks the wallet to register a chain it doesn't know yet
    /// (`wallet_addEthereumChain`).
    async fn add_chain(&self, chain: &Chain) -> Result<(), ProviderError>;

    /// Notifications about the authorized accounts changing, e.g. because the
    /// user selected another account or disconnected the client.
    fn accounts_changed(&self) -> broadcast::Receiver<Vec<Address>>;
}
