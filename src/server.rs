//! HTTP transport: two stateless engine endpoints and the web front end.
//!
//! Every request carries a whole board; nothing is kept between requests,
//! so handlers need no shared game state.

use crate::config::ServerConfig;
use crate::games::squares::{Board, Color, Move, Outcome, compute_next_move, evaluate};
use axum::{
    Json, Router,
    extract::{Request, State},
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Board snapshot sent by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    /// Board side length.
    pub size: usize,
    /// Flat row-major cells.
    #[serde(default)]
    pub data: String,
    /// Color to move (`w` or `b`); only the first letter counts.
    #[serde(default)]
    pub next_player_color: Option<String>,
}

/// Move chosen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Column, 0-based.
    pub x: usize,
    /// Row, 0-based.
    pub y: usize,
    /// Color to place.
    pub color: Color,
}

impl From<Move> for MoveResponse {
    fn from(action: Move) -> Self {
        Self {
            x: action.x,
            y: action.y,
            color: action.color,
        }
    }
}

/// Board status.
///
/// `status` is `0` in progress, `1` won, `2` draw and `-1` for a board that
/// could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Numeric status code.
    pub status: i32,
    /// Winning color, if any.
    pub color: Option<Color>,
    /// Human-readable summary.
    pub message: String,
}

impl From<Outcome> for StatusResponse {
    fn from(outcome: Outcome) -> Self {
        let status = match outcome {
            Outcome::InProgress => 0,
            Outcome::Won(_) => 1,
            Outcome::Draw => 2,
        };
        Self {
            status,
            color: outcome.winner(),
            message: outcome.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn bad_request(error: String) -> Response {
    warn!(%error, "Bad request");
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

#[derive(Debug, Clone)]
struct AppState {
    static_dir: Arc<PathBuf>,
}

#[instrument(skip(req), fields(size = req.size))]
async fn next_move(Json(req): Json<BoardRequest>) -> Response {
    let board = match Board::parse(req.size, &req.data) {
        Ok(board) => board,
        Err(e) => return bad_request(format!("Invalid board: {}", e)),
    };
    let color = match req.next_player_color.as_deref().map(str::parse::<Color>) {
        Some(Ok(color)) => color,
        Some(Err(e)) => return bad_request(e.to_string()),
        None => return bad_request("nextPlayerColor missing".to_string()),
    };

    match compute_next_move(&board, color) {
        Some(action) => {
            debug!(%action, "Responding with move");
            (StatusCode::OK, Json(MoveResponse::from(action))).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[instrument(skip(req), fields(size = req.size))]
async fn game_status(Json(req): Json<BoardRequest>) -> Json<StatusResponse> {
    match Board::parse(req.size, &req.data) {
        Ok(board) => Json(StatusResponse::from(evaluate(&board))),
        Err(e) => {
            debug!(error = %e, "Status requested for invalid board");
            Json(StatusResponse {
                status: -1,
                color: None,
                message: format!("Invalid board: {}", e),
            })
        }
    }
}

fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[instrument(skip(state))]
async fn static_file(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        debug!(%method, "Static files are read-only");
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let path = match uri.path() {
        "/" => "/index.html",
        other => other,
    };
    let relative = path.trim_start_matches('/');
    if relative.split(['/', '\\']).any(|segment| segment == "..") {
        warn!(path, "Rejected path traversal");
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read(state.static_dir.join(relative)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(path))], bytes).into_response(),
        Err(e) => {
            debug!(path, error = %e, "Static file not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Builds the application router serving front-end files from `static_dir`.
pub fn router(static_dir: impl Into<PathBuf>) -> Router {
    let state = AppState {
        static_dir: Arc::new(static_dir.into()),
    };

    Router::new()
        .route("/api/squares/nextMove", post(next_move))
        .route("/api/squares/gameStatus", post(game_status))
        .fallback(static_file)
        .with_state(state)
        .layer(ServiceBuilder::new().map_request(log_request))
}

/// Binds and serves until the process stops.
#[instrument(skip(config), fields(host = %config.host(), port = *config.port()))]
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let app = router(config.static_dir().clone());

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/ (static files from {})",
        config.host(),
        config.port(),
        config.static_dir().display()
    );

    axum::serve(listener, app).await?;
    Ok(())
}
