use {
    super::Session,
    crate::{
        domain::{Error, state},
        infra::observe,
    },
    alloy::primitives::{Address, U256},
};

impl Session {
    /// Fetches the token balance of `account` and records whether it covers
    /// a donation. Doesn't wait for other actions; the result is dropped if
    /// `account` is no longer connected by the time it arrives.
    pub async fn check_balance(&self, account: Address) -> Result<U256, Error> {
        let balance = match self.0.token.balance_of(account).await {
            Ok(balance) => balance,
            Err(source) => {
                return Err(self.fail(Error::BalanceCheckFailed {
                    symbol: self.0.config.token.symbol.clone(),
                    source,
                }));
            }
        };

        let sufficient = state::is_sufficient(balance, self.0.config.amount);
        let current = self.0.state.send_if_modified(|state| {
            if state.account != Some(account) {
                return false;
            }
            state.balance = Some(balance);
            state.sufficient = sufficient;
            true
        });
        if current {
            observe::balance(account, balance, sufficient);
        } else {
            observe::stale_balance(account);
        }
        Ok(balance)
    }
}
