use {
    std::{path::PathBuf, time::Duration},
    url::Url,
};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// The log filter.
    #[clap(long, env, default_value = "warn,donation=debug,ethrpc=debug")]
    pub log: String,

    /// At which log level logs should be printed to stderr instead of stdout.
    #[clap(long, env)]
    pub stderr_threshold: Option<tracing::Level>,

    /// Whether to use JSON format for the logs.
    #[clap(long, env, default_value = "false")]
    pub use_json_logs: bool,

    /// The JSON-RPC endpoint of the wallet to connect to. Without it the client
    /// behaves as if no wallet was installed.
    #[clap(long, env)]
    pub wallet_url: Option<Url>,

    /// Path to the donation configuration file. This file should be in TOML
    /// format. Donates 1 USDT on Polygon if omitted.
    #[clap(long, env)]
    pub config: Option<PathBuf>,

    /// How often the wallet is polled for changes of the authorized accounts.
    #[clap(long, env, default_value = "1s", value_parser = humantime::parse_duration)]
    pub accounts_poll_interval: Duration,
}

/// Arg types have custom `Display` impls instead of relying on `Debug` to avoid
/// accidentally printing secrets. Secret values are printed as "SECRET".
impl std::fmt::Display for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "log: {}", self.log)?;
        writeln!(f, "stderr_threshold: {:?}", self.stderr_threshold)?;
        writeln!(f, "use_json_logs: {}", self.use_json_logs)?;
        // Wallet endpoints may carry access tokens.
        writeln!(
            f,
            "wallet_url: {:?}",
            self.wallet_url.as_ref().map(|_| "SECRET")
        )?;
        writeln!(f, "config: {:?}", self.config)?;
        write!(
            f,
            "accounts_poll_interval: {}",
            humantime::format_duration(self.accounts_poll_interval)
        )
    }
}
