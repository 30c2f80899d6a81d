pub mod networks {
    pub const MAINNET: u64 = 1;
    pub const GNOSIS: u64 = 100;
    pub const SEPOLIA: u64 = 11155111;
    pub const ARBITRUM_ONE: u64 = 42161;
    pub const BASE: u64 = 8453;
    pub const POLYGON: u64 = 137;
    pub const AVALANCHE: u64 = 43114;
    pub const BNB: u64 = 56;
    pub const OPTIMISM: u64 = 10;
}

pub use alloy::providers::DynProvider as Provider;

// Generate the bindings in a private module. That allows us to re-export all
// items in our own module while also adding some items ourselves.
#[allow(non_snake_case)]
mod ERC20Private {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        interface ERC20 {
            function transfer(address to, uint256 value) external returns (bool);
            function balanceOf(address account) external view returns (uint256);
        }
    );
}

/// The subset of the ERC-20 interface needed to query a balance and move
/// tokens.
#[allow(non_snake_case)]
pub mod ERC20 {
    pub use super::ERC20Private::*;
    pub type Instance = ERC20::ERC20Instance<super::Provider>;
}

/// Tether USD deployments by chain id.
pub mod usdt {
    use {
        super::networks::*,
        alloy::primitives::{Address, address},
        std::{collections::HashMap, sync::LazyLock},
    };

    /// Decimals of every USDT deployment listed here.
    pub const DECIMALS: u8 = 6;

    pub static DEPLOYMENT_INFO: LazyLock<HashMap<u64, Address>> = LazyLock::new(|| {
        maplit::hashmap! {
            MAINNET => address!("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
            POLYGON => address!("0xc2132D05D31c914a87C6611C10748AEb04B58e8F"),
            ARBITRUM_ONE => address!("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
            OPTIMISM => address!("0x94b008aA00579c1307B0EF2c499aD98a8ce58e58"),
            AVALANCHE => address!("0x9702230A8Ea53601f5cD2dc00fDBc13d4dF4A8c7"),
        }
    });

    /// Returns the USDT deployment on the given chain.
    pub fn deployed(chain_id: u64) -> Option<Address> {
        DEPLOYMENT_INFO.get(&chain_id).copied()
    }
}
