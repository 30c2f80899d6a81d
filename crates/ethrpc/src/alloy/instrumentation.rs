//! Transport layers that make RPC traffic visible in the logs.
//!
//! [`LabelingLayer`] tags every request with the name of the component that
//! issued it. Stacked layers prepend their names so the final label reads
//! outermost first, e.g. `session/wallet`. [`InstrumentationLayer`] sits
//! closest to the wire and logs every request with its label, method and
//! duration.

use {
    alloy::{
        rpc::json_rpc::{RequestPacket, ResponsePacket, SerializedRequest},
        transports::{TransportError, TransportFut},
    },
    std::{
        task::{Context, Poll},
        time::Instant,
    },
    tower::{Layer, Service},
};

pub(crate) struct LabelingLayer {
    pub label: String,
}

impl<S> Layer<S> for LabelingLayer {
    type Service = Labeled<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Labeled {
            inner,
            label: self.label.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Labeled<S> {
    inner: S,
    label: String,
}

impl<S> Service<RequestPacket> for Labeled<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError>,
    S::Future: Send + 'static,
{
    type Error = TransportError;
    type Future = TransportFut<'static>;
    type Response = ResponsePacket;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut packet: RequestPacket) -> Self::Future {
        for request in packet.requests_mut() {
            label_mut(request).prepend(&self.label);
        }
        Box::pin(self.inner.call(packet))
    }
}

pub(crate) struct InstrumentationLayer;

impl<S> Layer<S> for InstrumentationLayer {
    type Service = Instrumented<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Instrumented { inner }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Instrumented<S> {
    inner: S,
}

impl<S> Service<RequestPacket> for Instrumented<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError>,
    S::Future: Send + 'static,
{
    type Error = TransportError;
    type Future = TransportFut<'static>;
    type Response = ResponsePacket;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut packet: RequestPacket) -> Self::Future {
        let timers = packet
            .requests_mut()
            .iter_mut()
            .map(|request| {
                let component = label_mut(request).take();
                let method = request.method().to_string();
                tracing::trace!(%component, method, id = ?request.id(), "sending request");
                timer(component, method)
            })
            .collect::<Vec<_>>();

        let response = self.inner.call(packet);
        Box::pin(async move {
            let result = response.await;
            if let Err(err) = &result {
                tracing::debug!(?err, "transport error");
            }
            drop(timers);
            result
        })
    }
}

/// Logs how long a request took once it is dropped.
#[must_use]
fn timer(component: Label, method: String) -> impl Drop {
    scopeguard::guard(Instant::now(), move |start| {
        tracing::debug!(%component, method, elapsed = ?start.elapsed(), "request done");
    })
}

fn label_mut(request: &mut SerializedRequest) -> &mut Label {
    request
        .meta_mut()
        .extensions_mut()
        .get_or_insert_default::<Label>()
}

/// The components a request passed through, outermost first.
#[derive(Clone, Debug, Default)]
struct Label(Vec<String>);

impl Label {
    fn prepend(&mut self, component: &str) {
        self.0.insert(0, component.to_string());
    }

    fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("unlabeled");
        }
        f.write_str(&self.0.join("/"))
    }
}
