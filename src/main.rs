use anyhow::{Context, Result};
use clap::Parser;
use huddle::{create_router, AppState, Config};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "huddle", about = "Ephemeral meeting-room coordinator")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/huddle")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );

    let state = AppState::new(&cfg)?;
    let app = create_router(state, &cfg.service.static_dir);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
