use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::info;

use gridseer_core::SessionState;
use gridseer_protocol::{Reply, Update};

mod dialogue;
mod render;

struct AppState {
    sessions: Mutex<HashMap<i64, SessionState>>,
    token: String,
}

async fn route_health() -> Json<Value> {
    Json(json!({ "message": "Bot is live" }))
}

async fn route_webhook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(update): Json<Update>,
) -> Result<Json<Vec<Reply>>, StatusCode> {
    if token != state.token {
        return Err(StatusCode::NOT_FOUND);
    }

    let mut sessions = state
        .sessions
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(dialogue::handle_update(&mut sessions, update)))
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let token = std::env::var("BOT_TOKEN").unwrap_or_else(|_| "dev-token".to_string());
    let state = Arc::new(AppState {
        sessions: Mutex::new(HashMap::new()),
        token,
    });

    let app = Router::new()
        .route("/", get(route_health))
        .route("/webhook/{token}", post(route_webhook))
        .with_state(state);

    let addr = std::env::var("BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
