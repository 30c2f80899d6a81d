use {
    super::Session,
    crate::{
        domain::Error,
        infra::{Wallet, observe},
    },
    alloy::primitives::Address,
};

impl Session {
    /// Connects the user's wallet: authorizes the client, makes sure the
    /// wallet is on the donation chain and fetches the balance of the
    /// selected account.
    pub async fn connect(&self) -> Result<Address, Error> {
        let _busy = self.busy()?;
        self.set_status("Connecting wallet...");

        let Some(wallet) = self.0.wallet.clone() else {
            return Err(self.fail(Error::ProviderMissing));
        };
        let account = match self.authorize(wallet.as_ref()).await {
            Ok(account) => account,
            Err(err) => return Err(self.fail(err)),
        };
        if let Err(err) = self.ensure_chain(wallet.as_ref()).await {
            return Err(self.fail(err));
        }

        self.set_account(Some(account));
        self.set_status("Wallet connected successfully.");
        observe::connected(account);
        self.listen(wallet.as_ref());

        // Failures are reported through the status and don't undo the
        // connection.
        let _ = self.check_balance(account).await;
        Ok(account)
    }

    async fn authorize(&self, wallet: &dyn Wallet) -> Result<Address, Error> {
        match wallet.request_accounts().await {
            Ok(accounts) => accounts.first().copied().ok_or(Error::UserRejected),
            Err(err) if err.is_user_rejection() => Err(Error::UserRejected),
            Err(err) => Err(Error::Wallet(err)),
        }
    }

    /// Switches the wallet to the donation chain, registering the chain with
    /// the wallet first if it doesn't know it.
    async fn ensure_chain(&self, wallet: &dyn Wallet) -> Result<(), Error> {
        let chain = &self.0.config.chain;
        let current = wallet.chain_id().await.map_err(Error::Wallet)?;
        if current == chain.id {
            return Ok(());
        }

        observe::wrong_chain(current, chain.id);
        self.set_status(format!("Please switch to {}", chain.name));
        match wallet.switch_chain(chain.id).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_unrecognized_chain() => {
                observe::adding_chain(chain.id);
                wallet
                    .add_chain(chain)
                    .await
                    .map_err(|source| Error::NetworkAddFailed {
                        network: chain.name.clone(),
                        source,
                    })
            }
            Err(source) => Err(Error::NetworkSwitchFailed {
                network: chain.name.clone(),
                source,
            }),
        }
    }
}
