use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::{
    registry::Tournament,
    service::TournamentService,
    types::{CreateTournamentRequest, TournamentResponse, UploadStrokesRequest},
};
use crate::{
    bonus::WeightTable,
    ingest::IngestReport,
    leaderboard::Leaderboard,
    shared::{AppError, AppState},
    store::{InMemoryRecordStore, Round, RoundDefinition, SkinsEntry, SkinsResult, TournamentSnapshot},
};

/// POST /tournaments
#[instrument(name = "create_tournament", skip(state, request), fields(tournament_id = %request.id))]
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(request): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<TournamentResponse>), AppError> {
    let weights = WeightTable::try_from(request.weights)?;
    let service = TournamentService::builder()
        .with_weights(weights)
        .with_team_policy(request.team_credit)
        .build()?;

    let response = TournamentResponse {
        id: request.id.trim().to_string(),
        weights: service.weights().clone(),
        team_credit: service.team_policy(),
    };
    state.registry.create(&request.id, service).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /tournaments
pub async fn list_tournaments(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.ids().await)
}

/// PUT /tournaments/:id/rounds
#[instrument(name = "define_round", skip(state, definition))]
pub async fn define_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(definition): Json<RoundDefinition>,
) -> Result<Json<Round>, AppError> {
    let handle = state.registry.get(&id).await?;
    let mut guard = handle.lock().await;
    let Tournament { service, store, .. } = &mut *guard;

    let round = service.define_round(store, definition)?;
    Ok(Json(round))
}

/// POST /tournaments/:id/strokes
#[instrument(name = "upload_strokes", skip(state, request))]
pub async fn upload_strokes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UploadStrokesRequest>,
) -> Result<Json<IngestReport>, AppError> {
    let round_id = request.round_id.clone();
    let table = request.into_table();

    let handle = state.registry.get(&id).await?;
    let mut guard = handle.lock().await;
    let Tournament { service, store, .. } = &mut *guard;

    let report = service.upload_strokes(store, &table, round_id.as_deref())?;
    info!(
        records = report.records_upserted,
        warnings = report.warnings.len(),
        "Strokes uploaded"
    );
    Ok(Json(report))
}

/// PUT /tournaments/:id/skins
#[instrument(name = "record_skins", skip(state, entry))]
pub async fn record_skins(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(entry): Json<SkinsEntry>,
) -> Result<Json<SkinsResult>, AppError> {
    let handle = state.registry.get(&id).await?;
    let mut guard = handle.lock().await;
    let Tournament { service, store, .. } = &mut *guard;

    let result = service.record_skins(store, entry)?;
    Ok(Json(result))
}

/// GET /tournaments/:id/leaderboard
#[instrument(name = "leaderboard", skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Leaderboard>, AppError> {
    let handle = state.registry.get(&id).await?;
    let guard = handle.lock().await;

    Ok(Json(guard.service.leaderboard(&guard.store)))
}

/// GET /tournaments/:id/snapshot
#[instrument(name = "export_snapshot", skip(state))]
pub async fn export_snapshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TournamentSnapshot>, AppError> {
    let handle = state.registry.get(&id).await?;
    let guard = handle.lock().await;

    Ok(Json(guard.store.snapshot()))
}

/// PUT /tournaments/:id/snapshot
#[instrument(name = "import_snapshot", skip(state, snapshot))]
pub async fn import_snapshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(snapshot): Json<TournamentSnapshot>,
) -> Result<StatusCode, AppError> {
    let handle = state.registry.get(&id).await?;
    let mut guard = handle.lock().await;

    guard.store = InMemoryRecordStore::from_snapshot(snapshot);
    info!("Snapshot imported");
    Ok(StatusCode::NO_CONTENT)
}
