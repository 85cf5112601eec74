//! In-process similarity service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const SIMILARITY_PATH: &str = "/ml/skill-similarity";

/// Similarity reported for a job skill the candidate holds.
pub const HELD_SIMILARITY: f64 = 0.9;

#[derive(Debug, Clone, Copy)]
pub enum ServerMode {
    /// Scores [`HELD_SIMILARITY`] for held skills, 0.2 otherwise.
    Answer,
    Status(u16),
    Unsuccessful,
    Malformed,
    Slow(Duration),
}

struct ServerState {
    mode: ServerMode,
    requests: AtomicUsize,
}

pub struct SimilarityServer {
    pub addr: SocketAddr,
    state: Arc<ServerState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl SimilarityServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }
}

impl Drop for SimilarityServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn spawn_similarity_server(mode: ServerMode) -> std::io::Result<SimilarityServer> {
    let state = Arc::new(ServerState {
        mode,
        requests: AtomicUsize::new(0),
    });
    let router = Router::new()
        .route(SIMILARITY_PATH, post(similarity))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    Ok(SimilarityServer {
        addr,
        state,
        shutdown_tx: Some(shutdown_tx),
    })
}

async fn similarity(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    match state.mode {
        ServerMode::Answer => Json(answer(&body)).into_response(),
        ServerMode::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({"error": "boom"}))).into_response()
        }
        ServerMode::Unsuccessful => Json(json!({"success": false})).into_response(),
        ServerMode::Malformed => (StatusCode::OK, "{not json").into_response(),
        ServerMode::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(answer(&body)).into_response()
        }
    }
}

fn answer(body: &Value) -> Value {
    let held: Vec<String> = body["candidate_enhanced_skills"]["verified_skills"]
        .as_array()
        .map(|skills| {
            skills
                .iter()
                .filter_map(|s| s["skill"].as_str().map(str::to_lowercase))
                .collect()
        })
        .unwrap_or_default();
    let job_skills: Vec<String> = body["job_skills"]
        .as_array()
        .map(|skills| {
            skills
                .iter()
                .filter_map(|s| s.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let matches: Vec<Value> = job_skills
        .iter()
        .map(|skill| {
            let hit = held.iter().any(|h| h == &skill.to_lowercase());
            let (candidate_skill, similarity, strength) = if hit {
                (Value::String(skill.clone()), HELD_SIMILARITY, "strong")
            } else {
                (Value::Null, 0.2, "no_match")
            };
            json!({
                "job_skill": skill,
                "candidate_skill": candidate_skill,
                "similarity_score": similarity,
                "match_strength": strength,
            })
        })
        .collect();
    let strong = matches
        .iter()
        .filter(|m| m["match_strength"] == "strong")
        .count();

    json!({
        "success": true,
        "similarity_result": {
            "overall_score": 50.0,
            "matches": matches,
            "strong_matches": strong,
            "moderate_matches": strong,
            "weak_matches": strong,
            "coverage": 50.0,
            "job_skills_count": job_skills.len(),
        }
    })
}
