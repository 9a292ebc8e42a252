use thiserror::Error;

/// # Service Errors
///
/// Every way the service can fail to come up or keep running. Request
/// handlers themselves are infallible, so these only surface from startup
/// and from the server future.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Process exit status for the outcome of a server run: `0` on a clean
/// shutdown, `1` for any [`ServiceError`].
pub fn exit_status(result: &Result<(), ServiceError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
