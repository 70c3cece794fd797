use axum::{routing::get, Router};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::info;

use chess_duel_core::GameSession;

mod ws;

pub struct AppState {
    pub game: Mutex<GameSession>,
    pub seats: Mutex<ws::Seats>,
    pub tx: broadcast::Sender<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let (tx, _) = broadcast::channel(64);

    let state = Arc::new(AppState {
        game: Mutex::new(GameSession::new()),
        seats: Mutex::new(ws::Seats::default()),
        tx,
    });

    let app = Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/health", get(ws::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();

    info!("WebSocket server running on port {port}");

    axum::serve(listener, app).await.unwrap();
}
