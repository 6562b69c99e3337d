//! Listener bootstrap with graceful shutdown.

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::state::AppState;
use log::{info, warn};
use std::future::Future;
use std::io;
use tokio::net::TcpListener;

/// Binds `config`'s address and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> io::Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|message| io::Error::new(io::ErrorKind::InvalidInput, message))?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, state, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_on<S>(listener: TcpListener, state: AppState, shutdown: S) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!("event=server_start module=server status=ok addr={local_addr}");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("event=server_stop module=server status=ok addr={local_addr}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=server status=error error={err}");
    }
}
