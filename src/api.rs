//! HTTP API endpoints.
//!
//! Each handler unpacks its JSON body, calls the matching `AppState`
//! operation and lets `PartyError` pick the status code.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::PartyResult;
use crate::party::PartySnapshot;
use crate::protocol::*;
use crate::state::AppState;

/// API routes plus the web client: `index.html` at `/`, assets under `/static`
pub fn app(static_dir: &Path) -> Router<Arc<AppState>> {
    router()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}

/// All API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/create_party", post(create_party))
        .route("/api/join_party", post(join_party))
        .route("/api/register_player", post(register_player))
        .route("/api/start_round", post(start_round))
        .route("/api/submit_vote", post(submit_vote))
        .route("/api/star_choose_task", post(star_choose_task))
        .route("/api/party_state", get(party_state))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: Status::Ok,
        parties: state.party_count().await,
    })
}

/// POST /api/create_party
pub async fn create_party(
    State(state): State<Arc<AppState>>,
) -> PartyResult<Json<CreatePartyResponse>> {
    let party_id = state.create_party().await?;
    Ok(Json(CreatePartyResponse { party_id }))
}

/// POST /api/join_party
pub async fn join_party(
    State(state): State<Arc<AppState>>,
    Json(req): Json<JoinPartyRequest>,
) -> PartyResult<Json<JoinPartyResponse>> {
    let party_id = state.join_party(&req.party_id).await?;
    Ok(Json(JoinPartyResponse { party_id }))
}

/// POST /api/register_player
pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterPlayerRequest>,
) -> PartyResult<Json<RegisterPlayerResponse>> {
    let registration = state
        .register_player(&req.party_id, &req.player_name)
        .await?;
    Ok(Json(registration.into()))
}

/// POST /api/start_round
///
/// Answers `{"status": "finished"}` when the deck has run out.
pub async fn start_round(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartRoundRequest>,
) -> PartyResult<Json<StatusResponse>> {
    let outcome = state.start_round(&req.party_id, &req.player_id).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/submit_vote
pub async fn submit_vote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitVoteRequest>,
) -> PartyResult<Json<StatusResponse>> {
    state
        .submit_vote(&req.party_id, &req.player_id, &req.target_player_id)
        .await?;
    Ok(Json(StatusResponse::ok()))
}

/// POST /api/star_choose_task
pub async fn star_choose_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StarChooseTaskRequest>,
) -> PartyResult<Json<StatusResponse>> {
    state
        .choose_task(&req.party_id, &req.player_id, req.task_index)
        .await?;
    Ok(Json(StatusResponse::ok()))
}

/// GET /api/party_state?party_id=..&player_id=..
pub async fn party_state(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PartyStateQuery>,
) -> PartyResult<Json<PartySnapshot>> {
    let snapshot = state.party_state(&query.party_id, &query.player_id).await?;
    Ok(Json(snapshot))
}
