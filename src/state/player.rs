use super::AppState;
use crate::error::PartyResult;
use crate::types::*;

impl AppState {
    /// Register a player with display name. The first registrant becomes host.
    pub async fn register_player(&self, party_id: &str, name: &str) -> PartyResult<Registration> {
        let party = self.get_party(party_id).await?;
        let mut party = party.write().await;

        let player = party.register(name)?;
        let is_host = party.is_host(&player.id);

        tracing::info!(
            "Player {} ({}) joined party {}{}",
            player.name,
            player.id,
            party_id,
            if is_host { " as host" } else { "" }
        );

        Ok(Registration {
            party_id: party.id().clone(),
            player,
            is_host,
        })
    }
}
