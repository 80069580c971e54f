use super::AppState;
use crate::error::PartyResult;
use crate::party::PartySnapshot;

impl AppState {
    /// Per-viewer view of a party. Takes only the read lock.
    pub async fn party_state(&self, party_id: &str, player_id: &str) -> PartyResult<PartySnapshot> {
        let party = self.get_party(party_id).await?;
        let party = party.read().await;
        party.snapshot(player_id)
    }
}
