//! In-memory artifact store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use delve_core::entity::{Artifact, ArtifactId, Rarity};

use crate::error::{EngineError, Result};
use crate::repository::ArtifactRepository;

/// In-memory store for artifacts outside any dungeon or inventory.
#[derive(Default)]
pub struct InMemoryArtifacts {
    rows: Mutex<HashMap<u64, Artifact>>,
    next_id: AtomicU64,
}

impl InMemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifacts {
    async fn create(&self, mut artifact: Artifact) -> Result<Artifact> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        artifact.id = ArtifactId(id);
        self.rows.lock().unwrap().insert(id, artifact.clone());
        Ok(artifact)
    }

    async fn find(&self, id: ArtifactId) -> Result<Option<Artifact>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn delete(&self, id: ArtifactId) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| EngineError::not_found("artifact", id))
    }

    async fn list_by_rarity(&self, rarity: Rarity) -> Result<Vec<Artifact>> {
        let rows = self.rows.lock().unwrap();
        let mut artifacts: Vec<Artifact> = rows
            .values()
            .filter(|a| a.rarity == rarity)
            .cloned()
            .collect();
        artifacts.sort_by_key(|a| a.id);
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str, rarity: Rarity) -> Artifact {
        Artifact {
            id: ArtifactId::UNASSIGNED,
            name: name.into(),
            description: String::new(),
            rarity,
        }
    }

    #[tokio::test]
    async fn rarity_filter_returns_only_matching_tiers() {
        let repo = InMemoryArtifacts::new();
        repo.create(artifact("Rusty Sword", Rarity::Common)).await.unwrap();
        repo.create(artifact("Excalibur", Rarity::Legendary)).await.unwrap();
        repo.create(artifact("Worn Shield", Rarity::Common)).await.unwrap();

        let commons = repo.list_by_rarity(Rarity::Common).await.unwrap();
        assert_eq!(commons.len(), 2);
        assert!(commons.iter().all(|a| a.rarity == Rarity::Common));

        let found = repo.find(commons[0].id).await.unwrap();
        assert_eq!(found.unwrap().name, "Rusty Sword");
    }
}
