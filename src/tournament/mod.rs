// Public API - what other modules can use
pub use handlers::{
    create_tournament, define_round, export_snapshot, import_snapshot, leaderboard,
    list_tournaments, record_skins, upload_strokes,
};
pub use registry::{Tournament, TournamentRegistry};
pub use service::{TournamentService, TournamentServiceBuilder};

// Internal modules
mod handlers;
pub mod registry;
pub mod service;
pub mod types;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::shared::AppState;

/// Routes for the tournament API, one group per page of the scoring app
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tournaments", post(create_tournament).get(list_tournaments))
        .route("/tournaments/:id/rounds", put(define_round))
        .route("/tournaments/:id/strokes", post(upload_strokes))
        .route("/tournaments/:id/skins", put(record_skins))
        .route("/tournaments/:id/leaderboard", get(leaderboard))
        .route(
            "/tournaments/:id/snapshot",
            get(export_snapshot).put(import_snapshot),
        )
        .with_state(state)
}
