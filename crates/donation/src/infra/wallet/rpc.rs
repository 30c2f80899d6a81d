use {
    super::{ProviderError, Wallet},
    crate::infra::config::{Chain, NativeCurrency},
    alloy::{
        primitives::{Address, U64},
        providers::Provider,
        transports::TransportError,
    },
    async_trait::async_trait,
    ethrpc::AlloyProvider,
    serde::{Serialize, de::DeserializeOwned},
    serde_json::{Value, json},
    std::time::Duration,
    tokio::{sync::broadcast, task::JoinHandle},
    tracing::Instrument,
    url::Url,
};

/// A wallet that exposes its EIP-1193 provider over JSON-RPC, e.g. a desktop
/// wallet listening on `http://127.0.0.1:1248`.
///
/// JSON-RPC has no push notifications so account changes are detected by
/// polling `eth_accounts`.
pub struct RpcWallet {
    provider: AlloyProvider,
    accounts: broadcast::Sender<Vec<Address>>,
    poller: JoinHandle<()>,
}

impl RpcWallet {
    pub fn new(url: &Url, poll_interval: Duration) -> Self {
        Self::with_provider(ethrpc::alloy::provider(url, "wallet"), poll_interval)
    }

    pub fn with_provider(provider: AlloyProvider, poll_interval: Duration) -> Self {
        let (accounts, _) = broadcast::channel(16);
        let poller = tokio::task::spawn(
            poll_accounts(provider.clone(), accounts.clone(), poll_interval)
                .instrument(tracing::info_span!("wallet_accounts")),
        );
        Self {
            provider,
            accounts,
            poller,
        }
    }

    /// The provider requests are sent through. Transactions sent through it
    /// are signed by the wallet.
    pub fn provider(&self) -> &AlloyProvider {
        &self.provider
    }

    /// Sends a raw EIP-1193 request to the wallet.
    pub async fn request(
        &self,
        method: &'static str,
        params: Value,
    ) -> Result<Value, ProviderError> {
        request(&self.provider, method, params).await
    }
}

impl Drop for RpcWallet {
    fn drop(&mut self) {
        self.poller.abort();
    }
}

#[async_trait]
impl Wallet for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let method = "eth_requestAccounts";
        decode(method, self.request(method, json!([])).await?)
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let method = "eth_chainId";
        let chain_id: U64 = decode(method, self.request(method, json!([])).await?)?;
        Ok(chain_id.to())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        self.request(
            "wallet_switchEthereumChain",
            json!([{ "chainId": hex_chain_id(chain_id) }]),
        )
        .await?;
        Ok(())
    }

    async fn add_chain(&self, chain: &Chain) -> Result<(), ProviderError> {
        let params = serde_json::to_value([AddEthereumChainParameter::from(chain)])
            .map_err(|err| ProviderError::internal(err.to_string()))?;
        self.request("wallet_addEthereumChain", params).await?;
        Ok(())
    }

    fn accounts_changed(&self) -> broadcast::Receiver<Vec<Address>> {
        self.accounts.subscribe()
    }
}

impl From<TransportError> for ProviderError {
    fn from(err: TransportError) -> Self {
        match ethrpc::alloy::errors::error_response(&err) {
            Some(payload) => ProviderError::new(payload.code, payload.message.to_string()),
            None => ProviderError::internal(err.to_string()),
        }
    }
}

async fn request(
    provider: &AlloyProvider,
    method: &'static str,
    params: Value,
) -> Result<Value, ProviderError> {
    provider
        .raw_request::<_, Value>(method.into(), params)
        .await
        .map_err(ProviderError::from)
}

fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T, ProviderError> {
    serde_json::from_value(value)
        .map_err(|err| ProviderError::internal(format!("unexpected {method} response: {err}")))
}

/// Chain ids are sent to wallets as hex quantities, e.g. `0x89` for 137.
fn hex_chain_id(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}

/// EIP-3085 parameters of `wallet_addEthereumChain`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddEthereumChainParameter<'a> {
    chain_id: String,
    chain_name: &'a str,
    native_currency: &'a NativeCurrency,
    rpc_urls: &'a [Url],
    block_explorer_urls: &'a [Url],
}

impl<'a> From<&'a Chain> for AddEthereumChainParameter<'a> {
    fn from(chain: &'a Chain) -> Self {
        Self {
            chain_id: hex_chain_id(chain.id),
            chain_name: &chain.name,
            native_currency: &chain.native_currency,
            rpc_urls: &chain.rpc_urls,
            block_explorer_urls: &chain.block_explorer_urls,
        }
    }
}

/// Polls the authorized accounts and broadcasts them whenever they differ
/// from the previous poll. The first poll only establishes the baseline.
async fn poll_accounts(
    provider: AlloyProvider,
    sender: broadcast::Sender<Vec<Address>>,
    poll_interval: Duration,
) {
    let method = "eth_accounts";
    let mut previous: Option<Vec<Address>> = None;
    loop {
        tokio::time::sleep(poll_interval).await;
        let accounts = match request(&provider, method, json!([]))
            .await
            .and_then(|value| decode::<Vec<Address>>(method, value))
        {
            Ok(accounts) => accounts,
            Err(err) => {
                tracing::warn!(?err, "failed to poll wallet accounts");
                continue;
            }
        };

        match &previous {
            Some(previous) if *previous == accounts => continue,
            Some(_) => {
                tracing::debug!(?accounts, "wallet accounts changed");
                // Nobody listening is fine, the session only subscribes once
                // connected.
                let _ = sender.send(accounts.clone());
            }
            None => tracing::debug!(?accounts, "initial wallet accounts"),
        }
        previous = Some(accounts);
    }
}
