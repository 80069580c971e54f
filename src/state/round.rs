use super::AppState;
use crate::error::PartyResult;
use crate::types::*;

impl AppState {
    /// Start the next round (host only). Finishes the party once the deck is empty.
    pub async fn start_round(&self, party_id: &str, player_id: &str) -> PartyResult<RoundStart> {
        let party = self.get_party(party_id).await?;
        let mut party = party.write().await;

        let outcome = party.start_round(player_id)?;
        match &outcome {
            RoundStart::Started { round_number } => {
                let question = party
                    .current_round()
                    .map(|r| r.question.text.as_str())
                    .unwrap_or_default();
                tracing::info!(
                    "Party {} round {}: {}",
                    party_id,
                    round_number,
                    question
                );
            }
            RoundStart::Finished => {
                tracing::info!(
                    "Party {} finished after {} rounds",
                    party_id,
                    party.round_number()
                );
            }
        }

        Ok(outcome)
    }

    /// The star picks one of the offered tasks
    pub async fn choose_task(
        &self,
        party_id: &str,
        player_id: &str,
        task_index: i64,
    ) -> PartyResult<&'static str> {
        let party = self.get_party(party_id).await?;
        let mut party = party.write().await;

        let task = party.choose_task(player_id, task_index)?;
        tracing::info!(
            "Party {} round {}: star {} chose \"{}\"",
            party_id,
            party.round_number(),
            player_id,
            task
        );

        Ok(task)
    }
}
