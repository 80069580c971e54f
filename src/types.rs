use serde::{Deserialize, Serialize};

/// Opaque ID types for readability
pub type PartyId = String;
pub type PlayerId = String;
pub type QuestionId = u32;

/// Longest display name a player may register with (in characters)
pub const MAX_NAME_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartyPhase {
    Idle,
    Voting,
    TaskChoice,
    TaskResult,
    Finished,
}

impl PartyPhase {
    /// Whether the host may start the next round from this phase
    pub fn accepts_round_start(self) -> bool {
        matches!(self, PartyPhase::Idle | PartyPhase::TaskResult)
    }

    /// Whether a round record is expected to exist in this phase
    pub fn has_active_round(self) -> bool {
        matches!(
            self,
            PartyPhase::Voting | PartyPhase::TaskChoice | PartyPhase::TaskResult
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn is_positive(self) -> bool {
        self == Polarity::Positive
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub polarity: Polarity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub stars: u32,
}

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub party_id: PartyId,
    pub player: Player,
    pub is_host: bool,
}

/// Outcome of a host's request to start the next round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStart {
    Started { round_number: u32 },
    /// The deck ran out; the party is now finished
    Finished,
}

/// Outcome of an accepted vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded { votes: usize, needed: usize },
    /// This vote completed the round and the tally picked a star
    Tallied { star_id: PlayerId },
}
