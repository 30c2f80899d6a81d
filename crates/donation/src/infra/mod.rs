pub mod cli;
pub mod config;
pub mod observe;
pub mod token;
pub mod wallet;

pub use self::{
    config::Config,
    token::{Erc20, Token},
    wallet::{RpcWallet, Wallet},
};
