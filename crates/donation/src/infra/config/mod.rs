use {
    alloy::primitives::{Address, U256, address},
    contracts::alloy::{networks, usdt},
    serde::{Deserialize, Serialize},
    url::Url,
};

pub mod file;

/// Everything the client needs to know about the donation it performs and
/// the network it performs it on. Constant for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub chain: Chain,
    pub token: Token,
    /// Receiver of every donation.
    pub recipient: Address,
    /// Raw token amount of a single donation.
    pub amount: U256,
}

/// The network donations are made on, including the parameters needed to
/// register it with a wallet that doesn't know it yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<Url>,
    pub block_explorer_urls: Vec<Url>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl Chain {
    /// Polygon PoS mainnet.
    pub fn polygon() -> Self {
        Self {
            id: networks::POLYGON,
            name: "Polygon Mainnet".to_string(),
            native_currency: NativeCurrency {
                name: "MATIC".to_string(),
                symbol: "MATIC".to_string(),
                decimals: 18,
            },
            rpc_urls: vec![Url::parse("https://polygon-rpc.com/").expect("valid url")],
            block_explorer_urls: vec![Url::parse("https://polygonscan.com/").expect("valid url")],
        }
    }
}

/// Placeholder receiver of donations, meant to be replaced through the
/// configuration file.
pub const DEFAULT_RECIPIENT: Address = address!("0x688f24BB5D74CCd57Cb8a8a2797ad760d2a5734A");

impl Default for Config {
    /// Donates 1 USDT on Polygon.
    fn default() -> Self {
        let chain = Chain::polygon();
        let token = Token {
            address: usdt::deployed(chain.id).expect("USDT is deployed on Polygon"),
            symbol: "USDT".to_string(),
            decimals: usdt::DECIMALS,
        };
        let amount = U256::from(10u64.pow(token.decimals.into()));
        Self {
            chain,
            token,
            recipient: DEFAULT_RECIPIENT,
            amount,
        }
    }
}
