use {
    super::{Chain, Config, NativeCurrency, Token},
    alloy::primitives::{Address, U256},
    anyhow::{Context, Result, ensure},
    contracts::alloy::usdt,
    serde::Deserialize,
    std::path::Path,
    tokio::fs,
    url::Url,
};

/// The configuration file. Every field is optional and falls back to the
/// defaults of [`Config::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct File {
    /// Chain id of the network to donate on.
    chain_id: Option<u64>,
    /// Human readable name of the network, also used when asking the wallet
    /// to register the network.
    network_name: Option<String>,
    native_currency: Option<NativeCurrency>,
    rpc_urls: Option<Vec<Url>>,
    block_explorer_urls: Option<Vec<Url>>,
    token: Option<TokenFile>,
    recipient: Option<Address>,
    /// Donation amount as a decimal string in token units, e.g. "1" or "2.5".
    amount: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TokenFile {
    address: Address,
    symbol: String,
    decimals: u8,
}

/// Load the client configuration from a TOML file.
pub async fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    parse(&data).with_context(|| format!("invalid configuration in {path:?}"))
}

fn parse(data: &str) -> Result<Config> {
    let file: File = toml::de::from_str(data).context("TOML syntax error")?;
    let defaults = Config::default();

    let chain = match file.chain_id {
        Some(id) if id != defaults.chain.id => Chain {
            id,
            name: file
                .network_name
                .context("network-name is required for a custom chain-id")?,
            native_currency: file
                .native_currency
                .context("native-currency is required for a custom chain-id")?,
            rpc_urls: file
                .rpc_urls
                .context("rpc-urls is required for a custom chain-id")?,
            block_explorer_urls: file.block_explorer_urls.unwrap_or_default(),
        },
        _ => Chain {
            id: defaults.chain.id,
            name: file.network_name.unwrap_or(defaults.chain.name),
            native_currency: file
                .native_currency
                .unwrap_or(defaults.chain.native_currency),
            rpc_urls: file.rpc_urls.unwrap_or(defaults.chain.rpc_urls),
            block_explorer_urls: file
                .block_explorer_urls
                .unwrap_or(defaults.chain.block_explorer_urls),
        },
    };
    ensure!(!chain.rpc_urls.is_empty(), "rpc-urls must not be empty");

    let token = match file.token {
        Some(token) => Token {
            address: token.address,
            symbol: token.symbol,
            decimals: token.decimals,
        },
        None => Token {
            address: usdt::deployed(chain.id)
                .with_context(|| format!("no known USDT deployment on chain {}", chain.id))?,
            ..defaults.token
        },
    };

    let amount = match file.amount {
        Some(amount) => number::units::parse_token_amount(&amount, token.decimals)?,
        None => U256::from(10u64)
            .checked_pow(U256::from(token.decimals))
            .context("token decimals out of range")?,
    };
    ensure!(!amount.is_zero(), "amount must be positive");

    Ok(Config {
        chain,
        token,
        recipient: file.recipient.unwrap_or(defaults.recipient),
        amount,
    })
}
