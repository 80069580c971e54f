//! Per-viewer read model of a party.

use super::Party;
use crate::error::{PartyError, PartyResult};
use crate::types::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub stars: u32,
}

/// The requesting player's own record
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ViewerInfo {
    pub id: PlayerId,
    pub name: String,
    pub stars: u32,
    pub has_voted: bool,
    pub vote_target_id: Option<PlayerId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartySnapshot {
    pub party_id: PartyId,
    pub state: PartyPhase,
    pub round_number: u32,
    pub questions_left: usize,
    pub host_id: Option<PlayerId>,
    pub me_is_host: bool,
    /// Sorted by stars (desc), then name (case-insensitive)
    pub players: Vec<PlayerSummary>,
    pub you: ViewerInfo,
    pub question_text: Option<String>,
    pub is_positive: Option<bool>,
    pub star_player_id: Option<PlayerId>,
    pub star_player_name: Option<String>,
    /// Only ever filled for the star while they are choosing
    pub task_options_for_star: Vec<&'static str>,
    pub selected_task: Option<&'static str>,
    pub created_at: String,
    pub server_now: String,
}

impl Party {
    /// Build the state as seen by `viewer_id`. Never mutates.
    pub fn snapshot(&self, viewer_id: &str) -> PartyResult<PartySnapshot> {
        let viewer = self
            .player(viewer_id)
            .ok_or_else(|| PartyError::not_found("Player not in this party"))?;

        let mut players: Vec<PlayerSummary> = self
            .players()
            .iter()
            .map(|p| PlayerSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                stars: p.stars,
            })
            .collect();
        players.sort_by_cached_key(|p| (std::cmp::Reverse(p.stars), p.name.to_lowercase()));

        let mut snapshot = PartySnapshot {
            party_id: self.id().clone(),
            state: self.phase(),
            round_number: self.round_number(),
            questions_left: self.deck().remaining(),
            host_id: self.host_id().cloned(),
            me_is_host: self.is_host(viewer_id),
            players,
            you: ViewerInfo {
                id: viewer.id.clone(),
                name: viewer.name.clone(),
                stars: viewer.stars,
                has_voted: false,
                vote_target_id: None,
            },
            question_text: None,
            is_positive: None,
            star_player_id: None,
            star_player_name: None,
            task_options_for_star: Vec::new(),
            selected_task: None,
            created_at: self.created_at().to_rfc3339(),
            server_now: chrono::Utc::now().to_rfc3339(),
        };

        let phase = self.phase();
        let Some(round) = self.current_round().filter(|_| phase.has_active_round()) else {
            return Ok(snapshot);
        };

        snapshot.question_text = Some(round.question.text.clone());
        snapshot.is_positive = Some(round.polarity().is_positive());

        if phase == PartyPhase::Voting {
            snapshot.you.has_voted = round.has_voted(viewer_id);
            snapshot.you.vote_target_id = round.vote_of(viewer_id).cloned();
        }

        if let Some(star_id) = &round.star_id {
            snapshot.star_player_id = Some(star_id.clone());
            snapshot.star_player_name = self.player(star_id).map(|p| p.name.clone());

            if phase == PartyPhase::TaskChoice && star_id == viewer_id {
                snapshot.task_options_for_star = round.task_options.clone();
            }
        }

        if phase == PartyPhase::TaskResult {
            snapshot.selected_task = round.selected_task;
        }

        Ok(snapshot)
    }
}
