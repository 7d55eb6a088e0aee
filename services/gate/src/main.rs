use std::path::PathBuf;

use tracing::info;

use passgate_core::tracing::init_tracing;
use passgate_gate::config::GateConfig;
use passgate_gate::router::build_router;
use passgate_gate::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = GateConfig::from_env();

    let state = AppState {
        codes_path: PathBuf::from(config.codes_path),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.gate_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("gate service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
