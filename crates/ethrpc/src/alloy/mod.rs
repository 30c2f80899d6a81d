pub mod errors;
mod instrumentation;

use {
    crate::AlloyProvider,
    alloy::{
        providers::{Provider, ProviderBuilder},
        rpc::client::{ClientBuilder, RpcClient},
    },
    instrumentation::{InstrumentationLayer, LabelingLayer},
    url::Url,
};

/// Creates a JSON-RPC client for `url`. Every request sent through it is
/// tagged with `label` and logged with its duration.
pub fn client(url: &Url, label: &str) -> RpcClient {
    ClientBuilder::default()
        .layer(LabelingLayer {
            label: label.into(),
        })
        .layer(InstrumentationLayer)
        .http(url.clone())
}

/// Creates a provider without a local signer. Transactions sent through it
/// are submitted with `eth_sendTransaction` so the node (or wallet) behind
/// `url` has to sign them.
pub fn provider(url: &Url, label: &str) -> AlloyProvider {
    ProviderBuilder::new()
        .connect_client(client(url, label))
        .erased()
}
