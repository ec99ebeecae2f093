use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

mod handlers;

use crate::handlers::ping_handler;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serves the grid map editor page and assets")]
struct Args {
    /// Directory holding index.html, the wasm bundle and icon/.
    #[arg(long)]
    public_dir: Option<PathBuf>,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
}

impl Args {
    fn public_dir(&self) -> PathBuf {
        self.public_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"))
    }

    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn app(public_dir: PathBuf) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let public_dir = args.public_dir();
    if !public_dir.join("index.html").is_file() {
        tracing::warn!(
            public_dir = %public_dir.display(),
            "index.html not found; the editor page will 404"
        );
    }

    let addr = args.addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|error| {
        tracing::error!(%addr, %error, "failed to bind");
        error
    })?;
    tracing::info!(
        public_dir = %public_dir.display(),
        "Grid map editor running at http://localhost:{}",
        args.port
    );
    axum::serve(listener, app(public_dir)).await
}
