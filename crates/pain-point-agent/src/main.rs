mod agent;
mod config;
mod error;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use solution_core::catalog::Catalog;

use config::Config;
use server::PainPointServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting pain-point-agent MCP server");

    let config = Config::from_env()?;
    info!(
        catalog_path = %config.catalog_path.display(),
        max_results = config.max_results,
        similarity = config.similarity.as_str(),
        "configuration loaded"
    );

    let catalog = Catalog::load_or_empty(&config.catalog_path);
    info!(
        solutions = catalog.len(),
        categories = catalog.categories().len(),
        "catalog ready"
    );

    let server = PainPointServer::new(
        catalog,
        config.match_settings(),
        config.catalog_path.clone(),
    );

    if let Some(addr) = config.tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
