use {
    super::Session,
    crate::{
        domain::Error,
        infra::{observe, token::Receipt},
    },
    number::units::format_token_amount_exact,
};

impl Session {
    /// Transfers the configured amount from the connected account to the
    /// recipient and waits for the transfer to be mined.
    pub async fn donate(&self) -> Result<Receipt, Error> {
        let _busy = self.busy()?;
        let config = &self.0.config;

        let state = self.state();
        let Some(account) = state.account else {
            return Err(self.fail(Error::NotConnected));
        };
        if !state.sufficient {
            return Err(self.fail(Error::InsufficientBalance {
                amount: format_token_amount_exact(config.amount, config.token.decimals),
                symbol: config.token.symbol.clone(),
            }));
        }

        self.set_status("Processing donation...");
        observe::donating(account, config.recipient, config.amount);
        let token = &self.0.token;
        let receipt = async {
            let tx = token
                .transfer(account, config.recipient, config.amount)
                .await?;
            observe::submitted(tx);
            self.set_status("Transaction submitted. Waiting for confirmation...");
            token.confirmation(tx).await
        }
        .await
        .map_err(|err| self.fail(Error::transfer(err)))?;

        observe::confirmed(&receipt);
        self.set_status(format!(
            "Thank you for your donation! Transaction hash: {:#x}",
            receipt.tx_hash
        ));
        // Failures are reported through the status, the donation went through
        // regardless.
        let _ = self.check_balance(account).await;
        Ok(receipt)
    }
}
