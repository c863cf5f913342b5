use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use clap::Parser;
use sketchpad_shared::drawings::{DRAWINGS_ROUTE, MANIFEST_ROUTE};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

mod handlers;
mod state;
mod storage;

use crate::handlers::drawings_handler;
use crate::state::AppState;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding index.html and the wasm bundle.
    #[arg(long)]
    public_dir: Option<PathBuf>,
    /// Directory holding the preset drawings.
    #[arg(long)]
    drawings_dir: Option<PathBuf>,
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

fn router(public_dir: PathBuf, drawings_dir: PathBuf) -> Router {
    let state = AppState {
        drawings_dir: drawings_dir.clone(),
    };
    Router::new()
        .route(MANIFEST_ROUTE, get(drawings_handler))
        .nest_service(DRAWINGS_ROUTE, ServeDir::new(drawings_dir))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let public_dir = args
        .public_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"));
    let drawings_dir = args
        .drawings_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../drawings"));
    log::info!(
        "Serving page from {} and drawings from {}",
        public_dir.display(),
        drawings_dir.display()
    );

    let app = router(public_dir, drawings_dir);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("Sketchpad running at http://localhost:{}", args.port);
    axum::serve(listener, app).await.context("server crashed")?;
    Ok(())
}
