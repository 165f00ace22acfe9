use anyhow::{Context, Result};
use clap::Parser;
use phishguard_core::config;
use phishguard_core::config::AppConfig;
use phishguard_server::tracing_init::init_tracing;
use phishguard_server::{bind_listener, build_router, AppState};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "phishguard")]
#[command(about = "Phishing risk analysis API", long_about = None)]
struct Cli {
    /// Path to config file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory of static assets served for non-API paths
    #[arg(long)]
    static_dir: Option<String>,
}

impl Cli {
    fn apply(self, cfg: &mut AppConfig) {
        if let Some(host) = self.host {
            cfg.server.host = host;
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
        if let Some(dir) = self.static_dir {
            cfg.server.static_dir = Some(dir);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    cli.apply(&mut cfg);

    init_tracing(&cfg.log_level);

    let analyzer = phishguard_core::build_analyzer(&cfg);
    let static_dir = cfg.server.static_dir.as_ref().map(PathBuf::from);
    if let Some(dir) = &static_dir {
        info!(dir = %dir.display(), "serving static files");
    }
    let app = build_router(AppState::new(analyzer), static_dir.as_deref());

    let listener = bind_listener(&cfg.server)
        .await
        .with_context(|| format!("bind {}", cfg.server.bind_addr()))?;
    let addr = listener.local_addr().context("read local address")?;

    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
