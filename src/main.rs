use battery_beacon::config::Config;
use battery_beacon::routes::{Routes, StaticFileResolver};
use battery_beacon::server::listener;
use battery_beacon::telemetry::CommandCollector;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Battery server is starting");
    let cfg = Config::load()?;

    let routes = Routes::new(
        CommandCollector::from_config(&cfg.collector),
        StaticFileResolver::new(&cfg.root),
    );
    tracing::info!(
        root = %cfg.root.display(),
        collector = %cfg.collector.program,
        "Serving files"
    );

    let tcp = listener::bind(&cfg).await?;

    tokio::select! {
        res = listener::serve(tcp, &routes) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
