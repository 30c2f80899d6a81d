//! What the user sees, derived from the session state alone.

use {
    super::State,
    crate::infra::Config,
    alloy::primitives::Address,
    number::units::{format_token_amount, format_token_amount_exact},
    std::fmt::{self, Display, Formatter},
};

/// Fraction digits of a displayed balance.
const BALANCE_PRECISION: u8 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub description: String,
    pub body: Body,
    /// Outcome of the last action, if there was one.
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Disconnected {
        connect: Button,
    },
    Connected {
        account: String,
        balance: String,
        donate: Button,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
}

pub fn render(state: &State, config: &Config) -> View {
    let symbol = &config.token.symbol;
    let network = &config.chain.name;
    let amount = format_token_amount_exact(config.amount, config.token.decimals);

    let body = match state.account {
        None => Body::Disconnected {
            connect: Button {
                label: "Connect Wallet".to_string(),
                enabled: state.can_connect(),
            },
        },
        Some(account) => Body::Connected {
            account: format!("Connected: {}", truncate_address(account)),
            balance: match state.balance {
                Some(balance) => format!(
                    "{} {symbol}",
                    format_token_amount(balance, config.token.decimals, BALANCE_PRECISION)
                ),
                None => "...".to_string(),
            },
            donate: Button {
                label: format!("Donate {amount} {symbol}"),
                enabled: state.can_donate() && state.balance.is_some(),
            },
        },
    };

    View {
        title: format!("{network} {symbol} Donation"),
        description: format!("Support us with a {amount} {symbol} donation on {network}"),
        body,
        status: Some(state.status.clone()).filter(|status| !status.is_empty()),
    }
}

/// `0x1234...abcd`
fn truncate_address(address: Address) -> String {
    let address = address.to_checksum(None);
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        match &self.body {
            Body::Disconnected { connect } => writeln!(f, "{connect}")?,
            Body::Connected {
                account,
                balance,
                donate,
            } => {
                writeln!(f, "{account}")?;
                writeln!(f, "Your balance: {balance}")?;
                writeln!(f, "{donate}")?;
            }
        }
        if let Some(status) = &self.status {
            writeln!(f, "{status}")?;
        }
        Ok(())
    }
}

impl Display for Button {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "[{}] (disabled)", self.label)
        }
    }
}
