use {
    crate::{
        domain::{Session, State, view},
        infra::{self, Erc20, RpcWallet, Wallet, cli, config, observe},
    },
    anyhow::{Context, Result},
    clap::Parser,
    std::sync::Arc,
    tokio::{
        io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
        sync::{oneshot, watch},
        task::JoinSet,
    },
    tracing::Instrument,
};

pub async fn start(args: impl Iterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    observe::init(&args);
    tracing::info!("running donation client with validated arguments:\n{}", args);
    if let Err(err) = run(args, tokio::io::stdin(), tokio::io::stdout()).await {
        tracing::error!(?err, "donation client failed");
        std::process::exit(1);
    }
}

/// Drives a session from the commands read from `input` and renders every
/// change of its state to `output`. Returns once the input is exhausted or
/// the user quits, after the actions that were started have finished.
pub async fn run(
    args: cli::Args,
    input: impl AsyncRead + Unpin,
    output: impl AsyncWrite + Unpin + Send + 'static,
) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::file::load(path).await?,
        None => infra::Config::default(),
    };

    let wallet = args
        .wallet_url
        .as_ref()
        .map(|url| Arc::new(RpcWallet::new(url, args.accounts_poll_interval)));
    // Transfers have to be signed by the wallet so the token is reached
    // through it whenever there is one.
    let provider = match &wallet {
        Some(wallet) => wallet.provider().clone(),
        None => {
            let url = config
                .chain
                .rpc_urls
                .first()
                .context("no RPC url configured")?;
            ethrpc::alloy::provider(url, "token")
        }
    };
    let token = Arc::new(Erc20::new(config.token.address, provider));
    let session = Session::new(
        config,
        wallet.map(|wallet| wallet as Arc<dyn Wallet>),
        token,
    );

    let (stop_rendering, stopped) = oneshot::channel();
    let renderer = tokio::task::spawn(
        render(session.clone(), output, stopped).instrument(tracing::info_span!("render")),
    );
    let mut actions = JoinSet::new();
    let result = dispatch(&session, input, &mut actions).await;

    // A donation that was submitted is followed until it is confirmed.
    while actions.join_next().await.is_some() {}
    let _ = stop_rendering.send(());
    let _ = renderer.await;
    result
}

/// Starts an action for every command read from `input` until the input is
/// exhausted or the user quits.
async fn dispatch(
    session: &Session,
    input: impl AsyncRead + Unpin,
    actions: &mut JoinSet<()>,
) -> Result<()> {
    let mut lines = BufReader::new(input).lines();
    while let Some(line) = lines.next_line().await.context("failed to read command")? {
        let session = session.clone();
        match line.trim() {
            "connect" => {
                actions.spawn(
                    async move {
                        let _ = session.connect().await;
                    }
                    .instrument(tracing::info_span!("connect")),
                );
            }
            "donate" => {
                actions.spawn(
                    async move {
                        let _ = session.donate().await;
                    }
                    .instrument(tracing::info_span!("donate")),
                );
            }
            "quit" | "exit" => break,
            "" => (),
            command => {
                tracing::warn!(command, "unknown command, expected connect, donate or quit")
            }
        }
    }
    Ok(())
}

/// Writes the view whenever the session state changes. Once told to stop the
/// latest state is drawn if it wasn't already.
async fn render(
    session: Session,
    mut output: impl AsyncWrite + Unpin,
    mut stop: oneshot::Receiver<()>,
) {
    let mut state = session.subscribe();
    loop {
        if let Err(err) = draw(&session, &mut state, &mut output).await {
            tracing::warn!(?err, "failed to render");
            return;
        }
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    return;
                }
            }
            _ = &mut stop => break,
        }
    }
    if state.has_changed().unwrap_or(false) {
        if let Err(err) = draw(&session, &mut state, &mut output).await {
            tracing::warn!(?err, "failed to render");
        }
    }
}

async fn draw(
    session: &Session,
    state: &mut watch::Receiver<State>,
    output: &mut (impl AsyncWrite + Unpin),
) -> std::io::Result<()> {
    let view = {
        let state = state.borrow_and_update();
        view::render(&state, session.config())
    };
    output.write_all(format!("{view}\n").as_bytes()).await?;
    output.flush().await
}
