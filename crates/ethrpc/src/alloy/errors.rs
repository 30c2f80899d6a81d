use alloy::{rpc::json_rpc::ErrorPayload, transports::TransportError};

/// Returns the JSON-RPC error object returned by the remote end, if the error
/// is an error response rather than a transport failure.
pub fn error_response(err: &TransportError) -> Option<&ErrorPayload> {
    err.as_error_resp()
}

/// Builds the error a JSON-RPC endpoint returns for a failed request.
/// Useful for testing.
#[cfg(any(test, feature = "test-util"))]
pub fn testing_error_response(code: i64, message: &'static str) -> TransportError {
    TransportError::ErrorResp(ErrorPayload {
        code,
        message: message.into(),
        data: None,
    })
}
