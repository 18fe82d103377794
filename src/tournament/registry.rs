use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::service::TournamentService;
use crate::shared::AppError;
use crate::store::InMemoryRecordStore;

/// A tournament's scoring configuration together with its records
#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: String,
    pub service: TournamentService,
    pub store: InMemoryRecordStore,
}

/// Live tournaments keyed by id.
///
/// Each tournament sits behind its own mutex, so writes to one tournament are
/// serialized while different tournaments proceed independently.
#[derive(Debug, Default)]
pub struct TournamentRegistry {
    tournaments: RwLock<HashMap<String, Arc<Mutex<Tournament>>>>,
}

impl TournamentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, id: &str, service: TournamentService) -> Result<(), AppError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::BadRequest(
                "Tournament id must not be blank".to_string(),
            ));
        }

        let mut tournaments = self.tournaments.write().await;
        if tournaments.contains_key(id) {
            warn!(tournament_id = %id, "Tournament already exists");
            return Err(AppError::Conflict(format!(
                "Tournament '{}' already exists",
                id
            )));
        }

        tournaments.insert(
            id.to_string(),
            Arc::new(Mutex::new(Tournament {
                id: id.to_string(),
                service,
                store: InMemoryRecordStore::new(),
            })),
        );

        info!(tournament_id = %id, "Tournament created");
        Ok(())
    }

    /// Handle to a tournament; lock it for the duration of one operation
    pub async fn get(&self, id: &str) -> Result<Arc<Mutex<Tournament>>, AppError> {
        let tournaments = self.tournaments.read().await;
        match tournaments.get(id) {
            Some(tournament) => Ok(Arc::clone(tournament)),
            None => {
                debug!(tournament_id = %id, "Tournament not found");
                Err(AppError::NotFound(format!("Tournament '{}' not found", id)))
            }
        }
    }

    pub async fn ids(&self) -> Vec<String> {
        let tournaments = self.tournaments.read().await;
        let mut ids: Vec<String> = tournaments.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::WinnerKind;
    use crate::store::RecordStore;

    fn service() -> TournamentService {
        TournamentService::builder()
            .with_weight(WinnerKind::Hunter, 1.5)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn creates_and_fetches_tournaments() {
        let registry = TournamentRegistry::new();
        registry.create(" masters ", service()).await.unwrap();

        let tournament = registry.get("masters").await.unwrap();
        let guard = tournament.lock().await;
        assert_eq!(guard.id, "masters");
        assert!(guard.store.players().is_empty());
        drop(guard);

        assert_eq!(registry.ids().await, vec!["masters".to_string()]);
    }

    #[tokio::test]
    async fn rejects_duplicate_and_blank_ids() {
        let registry = TournamentRegistry::new();
        registry.create("masters", service()).await.unwrap();

        let duplicate = registry.create("masters", service()).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        let blank = registry.create("  ", service()).await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn missing_tournament_is_not_found() {
        let registry = TournamentRegistry::new();
        let result = registry.get("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn writes_through_shared_handle_are_visible() {
        let registry = TournamentRegistry::new();
        registry.create("masters", service()).await.unwrap();

        {
            let handle = registry.get("masters").await.unwrap();
            let mut tournament = handle.lock().await;
            tournament.store.add_player("Alice");
        }

        let handle = registry.get("masters").await.unwrap();
        let tournament = handle.lock().await;
        assert_eq!(tournament.store.players(), ["Alice".to_string()]);
    }
}
