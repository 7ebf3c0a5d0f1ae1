//! Server mode
//!
//! Serves the redirect page for every path: a lookup hit answers with a
//! 307, anything else renders the "Invalid or expired link" page.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use tracing::{info, warn};

use crate::api::middleware::RequestLogMiddleware;
use crate::api::services::{AppStartTime, health_routes, redirect_routes};
use crate::config::get_config;
use crate::runtime::lifetime::{shutdown, startup};

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime::now();

    let ctx = startup::prepare_startup().map_err(|e| {
        tracing::error!("Server startup failed: {:#}", e);
        e
    })?;
    let redirector = ctx.redirector.clone();

    let config = get_config();
    let workers = config.server.cpu_count.clamp(1, 32);
    info!("Using {} workers for the server", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogMiddleware)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .app_data(web::Data::new(redirector.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(health_routes())
            .service(redirect_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .shutdown_timeout(shutdown::SHUTDOWN_GRACE_SECS)
    .disable_signals()
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = shutdown::listen_for_shutdown() => {
            handle.stop(true).await;
            info!("Graceful shutdown: server stopped");
        }
    }

    Ok(())
}
