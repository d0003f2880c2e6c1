use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::{BatteryHandler, StaticHandler};

pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serves connections one at a time, forever.
///
/// Each connection is driven to completion before the next is accepted.
/// Failures on one connection are logged and do not stop the loop.
pub async fn serve<H>(listener: TcpListener, handlers: &H) -> anyhow::Result<()>
where
    H: BatteryHandler + StaticHandler + ?Sized,
{
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                continue;
            }
        };
        tracing::debug!(%peer, "Accepted connection");

        let mut conn = Connection::new(socket);
        if let Err(e) = conn.run(handlers).await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
