mod player;
mod round;
mod snapshot;
mod vote;

use crate::config::ServerConfig;
use crate::error::{PartyError, PartyResult};
use crate::party::Party;
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// How many random codes to try before giving up on allocating a party
pub const MAX_PARTY_ID_ATTEMPTS: u32 = 100;

/// A party behind its own lock
pub type SharedParty = Arc<RwLock<Party>>;

struct Registry {
    parties: HashMap<PartyId, SharedParty>,
    /// Draws party codes and seeds each party's own generator
    rng: StdRng,
}

/// Shared application state: every live party, keyed by its 4-digit code
pub struct AppState {
    registry: RwLock<Registry>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic registry: same seed, same codes, decks and tie-breaks
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        match config.rng_seed {
            Some(seed) => {
                tracing::warn!("Using fixed RNG seed {}; games are reproducible", seed);
                Self::seeded(seed)
            }
            None => Self::new(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            registry: RwLock::new(Registry {
                parties: HashMap::new(),
                rng,
            }),
        }
    }

    /// Allocate a fresh code and store a new idle party under it.
    ///
    /// The collision check and the insert happen under one write lock.
    pub async fn create_party(&self) -> PartyResult<PartyId> {
        let mut registry = self.registry.write().await;
        let Registry { parties, rng } = &mut *registry;

        let party_id = (0..MAX_PARTY_ID_ATTEMPTS)
            .map(|_| format!("{:04}", rng.random_range(0..=9999u32)))
            .find(|code| !parties.contains_key(code))
            .ok_or(PartyError::CapacityExhausted {
                attempts: MAX_PARTY_ID_ATTEMPTS,
            })?;

        let party = Party::new(party_id.clone(), StdRng::from_rng(rng));
        parties.insert(party_id.clone(), Arc::new(RwLock::new(party)));

        tracing::info!("Created party {} ({} live)", party_id, parties.len());
        Ok(party_id)
    }

    /// Look up a party by code
    pub async fn get_party(&self, party_id: &str) -> PartyResult<SharedParty> {
        self.registry
            .read()
            .await
            .parties
            .get(party_id)
            .cloned()
            .ok_or_else(|| PartyError::not_found("Party not found"))
    }

    /// Check that a (possibly padded) code names a live party
    pub async fn join_party(&self, party_id: &str) -> PartyResult<PartyId> {
        let party_id = party_id.trim();
        self.get_party(party_id).await?;
        tracing::debug!("Join check passed for party {}", party_id);
        Ok(party_id.to_string())
    }

    pub async fn party_count(&self) -> usize {
        self.registry.read().await.parties.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
