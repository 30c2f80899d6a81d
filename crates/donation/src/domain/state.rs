use alloy::primitives::{Address, U256};

/// The state of the session. The single source of truth the view is rendered
/// from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// The connected account.
    pub account: Option<Address>,
    /// Raw token balance of the connected account, `None` until it was fetched
    /// for the first time.
    pub balance: Option<U256>,
    /// Whether the balance covers a donation.
    pub sufficient: bool,
    /// Outcome of the last action, shown to the user.
    pub status: String,
    /// Whether an action is in flight.
    pub busy: bool,
}

impl State {
    /// Whether the donate action is available.
    pub fn can_donate(&self) -> bool {
        self.account.is_some() && self.sufficient && !self.busy
    }

    /// Whether the connect action is available.
    pub fn can_connect(&self) -> bool {
        self.account.is_none() && !self.busy
    }
}

/// A balance covers a donation if it is at least the donated amount.
pub fn is_sufficient(balance: U256, amount: U256) -> bool {
    balance >= amount
}
