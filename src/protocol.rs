//! JSON request and response bodies for the HTTP API

use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePartyResponse {
    pub party_id: PartyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinPartyRequest {
    pub party_id: PartyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinPartyResponse {
    pub party_id: PartyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPlayerRequest {
    pub party_id: PartyId,
    pub player_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPlayerResponse {
    pub party_id: PartyId,
    pub player_id: PlayerId,
    pub name: String,
    pub stars: u32,
    pub is_host: bool,
}

impl From<Registration> for RegisterPlayerResponse {
    fn from(reg: Registration) -> Self {
        Self {
            party_id: reg.party_id,
            player_id: reg.player.id,
            name: reg.player.name,
            stars: reg.player.stars,
            is_host: reg.is_host,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRoundRequest {
    pub party_id: PartyId,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitVoteRequest {
    pub party_id: PartyId,
    pub player_id: PlayerId,
    pub target_player_id: PlayerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarChooseTaskRequest {
    pub party_id: PartyId,
    pub player_id: PlayerId,
    /// Signed so that negative indexes reach validation instead of failing to parse
    pub task_index: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyStateQuery {
    pub party_id: PartyId,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }
}

impl From<RoundStart> for StatusResponse {
    fn from(outcome: RoundStart) -> Self {
        let status = match outcome {
            RoundStart::Started { .. } => Status::Ok,
            RoundStart::Finished => Status::Finished,
        };
        Self { status }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: Status,
    pub parties: usize,
}
