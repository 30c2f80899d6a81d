//! The session the user drives through the connect and donate actions.
//!
//! The [`State`] lives in a watch channel: the session is its only writer and
//! renderers subscribe to it. Actions hold the busy flag for their duration so
//! they can't be triggered again while in flight. The one thing that happens
//! outside of actions are account change notifications of the wallet which
//! feed the same update path as a connect.

use {
    super::{Error, State},
    crate::infra::{Config, Token, Wallet, observe},
    alloy::primitives::Address,
    std::sync::{Arc, Mutex, Weak},
    tokio::{
        sync::{broadcast::error::RecvError, watch},
        task::JoinHandle,
    },
    tracing::Instrument,
};

mod balance;
mod connect;
mod donate;

#[derive(Clone)]
pub struct Session(Arc<Inner>);

struct Inner {
    config: Config,
    /// `None` if no wallet is installed.
    wallet: Option<Arc<dyn Wallet>>,
    token: Arc<dyn Token>,
    state: watch::Sender<State>,
    /// Task forwarding account changes of the wallet into the session.
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl Session {
    pub fn new(config: Config, wallet: Option<Arc<dyn Wallet>>, token: Arc<dyn Token>) -> Self {
        let (state, _) = watch::channel(State::default());
        Self(Arc::new(Inner {
            config,
            wallet,
            token,
            state,
            listener: Mutex::new(None),
        }))
    }

    pub fn config(&self) -> &Config {
        &self.0.config
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> State {
        self.0.state.borrow().clone()
    }

    /// Yields the state whenever it changes.
    pub fn subscribe(&self) -> watch::Receiver<State> {
        self.0.state.subscribe()
    }

    /// Marks the session busy until the returned guard is dropped. Fails if
    /// another action is already in flight.
    fn busy(&self) -> Result<impl Drop + '_, Error> {
        let acquired = self.0.state.send_if_modified(|state| {
            if state.busy {
                false
            } else {
                state.busy = true;
                true
            }
        });
        if !acquired {
            return Err(Error::Busy);
        }
        Ok(scopeguard::guard((), move |()| {
            self.0.state.send_modify(|state| state.busy = false)
        }))
    }

    fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        observe::status(&status);
        self.0.state.send_modify(|state| state.status = status);
    }

    /// Reports the error to the user and hands it back to the caller.
    fn fail(&self, err: Error) -> Error {
        observe::failed(&err);
        self.set_status(err.to_string());
        err
    }

    /// Switches to another account. The balance belongs to the previous
    /// account so it is forgotten.
    fn set_account(&self, account: Option<Address>) {
        self.0.state.send_if_modified(|state| {
            if state.account == account {
                return false;
            }
            state.account = account;
            state.balance = None;
            state.sufficient = false;
            true
        });
    }

    /// Follows the account changes of the wallet for the rest of the session.
    /// Replaces the listener of a previous connect.
    fn listen(&self, wallet: &dyn Wallet) {
        let mut changes = wallet.accounts_changed();
        let session = Arc::downgrade(&self.0);
        let task = tokio::task::spawn(
            async move {
                loop {
                    let accounts = match changes.recv().await {
                        Ok(accounts) => accounts,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "missed account changes");
                            continue;
                        }
                        Err(RecvError::Closed) => break,
                    };
                    let Some(session) = Weak::upgrade(&session) else {
                        break;
                    };
                    Session(session).accounts_changed(accounts).await;
                }
            }
            .instrument(tracing::info_span!("accounts_changed")),
        );
        let previous = self.0.listener.lock().unwrap().replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    async fn accounts_changed(&self, accounts: Vec<Address>) {
        observe::accounts_changed(&accounts);
        let account = accounts.first().copied();
        if self.state().account == account {
            return;
        }
        self.set_account(account);
        if let Some(account) = account {
            // Failures are reported through the status.
            let _ = self.check_balance(account).await;
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.get_mut().ok().and_then(Option::take) {
            listener.abort();
        }
    }
}
