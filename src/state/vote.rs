use super::AppState;
use crate::error::PartyResult;
use crate::types::*;

impl AppState {
    /// Record a vote. The vote that completes the ballot box runs the tally
    /// under the same lock, so concurrent last votes cannot tally twice.
    pub async fn submit_vote(
        &self,
        party_id: &str,
        voter_id: &str,
        target_id: &str,
    ) -> PartyResult<VoteOutcome> {
        let party = self.get_party(party_id).await?;
        let mut party = party.write().await;

        let outcome = party.submit_vote(voter_id, target_id)?;
        match &outcome {
            VoteOutcome::Recorded { votes, needed } => {
                tracing::debug!(
                    "Party {}: vote {}/{} recorded from {}",
                    party_id,
                    votes,
                    needed,
                    voter_id
                );
            }
            VoteOutcome::Tallied { star_id } => {
                let stars = party.player(star_id).map(|p| p.stars).unwrap_or_default();
                tracing::info!(
                    "Party {} round {}: star is {} ({} stars total)",
                    party_id,
                    party.round_number(),
                    star_id,
                    stars
                );
            }
        }

        Ok(outcome)
    }
}
