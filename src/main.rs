mod api;
mod cache;
mod config;
mod error;
mod extract;
mod fetcher;
mod markup;
mod pipeline;
mod ranker;
mod roster;
mod types;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::routes::{router, ApiState};
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::Pipeline;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let pipeline = Arc::new(Pipeline::new(&cfg)?);
    info!(
        roster = %cfg.roster_path,
        cache = %cfg.cache_path,
        base_url = %cfg.fide_base_url,
        "pipeline ready"
    );

    let state = ApiState {
        pipeline,
        roster_path: cfg.roster_path.clone().into(),
    };
    let app = router(state);
    let bind_addr = format!("0.0.0.0:{}", cfg.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("HTTP server listening on {bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
