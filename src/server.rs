use crate::clock::Clock;
use crate::config::ServerConfig;
use crate::error::ServiceError;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::Arc;
use tracing::info;

/// Binds the configured address and returns the server, ready to be awaited.
///
/// An occupied or unavailable address is reported as [`ServiceError::Bind`];
/// no retry is attempted.
pub fn bind(config: &ServerConfig, clock: Arc<dyn Clock>) -> Result<Server, ServiceError> {
    let addr = config.address();
    let listener = TcpListener::bind(&addr).map_err(|source| ServiceError::Bind {
        addr: addr.clone(),
        source,
    })?;

    let server = listen(listener, clock)?;
    info!("Backend démarré sur le port {}", config.port);
    Ok(server)
}

/// Serves the application on an already bound listener.
pub fn listen(listener: TcpListener, clock: Arc<dyn Clock>) -> Result<Server, ServiceError> {
    let clock = web::Data::from(clock);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(clock.clone())
            .configure(routes::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Binds and runs until the server is stopped by a shutdown signal.
pub async fn run(config: &ServerConfig, clock: Arc<dyn Clock>) -> Result<(), ServiceError> {
    bind(config, clock)?.await?;
    Ok(())
}
