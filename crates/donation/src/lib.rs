//! A wallet client that connects to a browser style (EIP-1193) wallet, makes
//! sure it is on the right network, checks the token balance of the connected
//! account and donates a fixed amount of tokens to a fixed recipient.

pub mod domain;
pub mod infra;
mod run;


pub use run::{run, start};
