use clock_status::clock::SystemClock;
use clock_status::config::ServerConfig;
use clock_status::error::{ServiceError, exit_status};
use clock_status::{logging, server};
use std::process::ExitCode;
use std::sync::Arc;

/// Clock & Status Backend Entry Point
///
/// Launches the Actix-web HTTP server serving:
/// - `GET /`: current time sentence
/// - `GET /stats`: status and uptime as JSON
///
/// # Configuration
/// - Binds to `0.0.0.0:3001`
/// - Environment variables loaded from `.env` file (if present)
/// - Log filtering through `RUST_LOG` (default `info`); the startup line is
///   always emitted
#[actix_web::main]
async fn main() -> ExitCode {
    // Uptime counts from here
    let clock = SystemClock::start();

    dotenv::dotenv().ok();
    logging::init();

    let result = start(clock).await;
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    ExitCode::from(exit_status(&result))
}

async fn start(clock: SystemClock) -> Result<(), ServiceError> {
    server::run(&ServerConfig::default(), Arc::new(clock)).await
}
