//! A single party: roster, deck, task pools and the round state machine.
//!
//! `Party` is plain synchronous data. Callers hold the party's lock for the
//! whole of each operation, which makes every check-then-mutate sequence
//! (including the tally on the last vote) atomic.

mod deck;
mod round;
mod snapshot;

pub use deck::{Deck, TaskPools};
pub use round::Round;
pub use snapshot::{PartySnapshot, PlayerSummary, ViewerInfo};

use crate::error::{PartyError, PartyResult};
use crate::types::*;
use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::Rng;

const PLAYER_ID_LENGTH: usize = 8;

/// Generate an opaque player id. No collision check: 62^8 keys per party.
fn generate_player_id<R: Rng + ?Sized>(rng: &mut R) -> PlayerId {
    rng.sample_iter(&Alphanumeric)
        .take(PLAYER_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Trim and check a display name
fn validate_name(raw: &str) -> PartyResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(PartyError::invalid_input("Name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(PartyError::invalid_input(format!(
            "Name must be at most {} characters",
            MAX_NAME_CHARS
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(PartyError::invalid_input("Name contains invalid characters"));
    }
    Ok(name.to_string())
}

#[derive(Debug)]
pub struct Party {
    id: PartyId,
    created_at: DateTime<Utc>,
    /// Join order is kept for tie-break iteration
    players: Vec<Player>,
    host_id: Option<PlayerId>,
    deck: Deck,
    tasks: TaskPools,
    phase: PartyPhase,
    current_round: Option<Round>,
    round_number: u32,
    rng: StdRng,
}

impl Party {
    /// Build a party in `Idle` with a freshly shuffled deck
    pub fn new(id: PartyId, mut rng: StdRng) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            id,
            created_at: Utc::now(),
            players: Vec::new(),
            host_id: None,
            deck,
            tasks: TaskPools::new(),
            phase: PartyPhase::Idle,
            current_round: None,
            round_number: 0,
            rng,
        }
    }

    pub fn id(&self) -> &PartyId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn phase(&self) -> PartyPhase {
        self.phase
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn host_id(&self) -> Option<&PlayerId> {
        self.host_id.as_ref()
    }

    pub fn is_host(&self, player_id: &str) -> bool {
        self.host_id.as_deref() == Some(player_id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn tasks(&self) -> &TaskPools {
        &self.tasks
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Add a player to the roster. The first one becomes host for good.
    pub fn register(&mut self, raw_name: &str) -> PartyResult<Player> {
        let name = validate_name(raw_name)?;

        let player = Player {
            id: generate_player_id(&mut self.rng),
            name,
            stars: 0,
        };
        self.players.push(player.clone());

        if self.host_id.is_none() {
            self.host_id = Some(player.id.clone());
        }

        Ok(player)
    }

    /// Host-only: deal the next question, or finish once the deck is empty
    pub fn start_round(&mut self, player_id: &str) -> PartyResult<RoundStart> {
        if !self.is_host(player_id) {
            return Err(PartyError::forbidden("Only host can start rounds"));
        }
        if !self.phase.accepts_round_start() {
            return Err(PartyError::invalid_state("Cannot start a round right now"));
        }

        let Some(question) = self.deck.draw() else {
            self.phase = PartyPhase::Finished;
            self.current_round = None;
            return Ok(RoundStart::Finished);
        };

        self.round_number += 1;
        self.current_round = Some(Round::new(question));
        self.phase = PartyPhase::Voting;

        Ok(RoundStart::Started {
            round_number: self.round_number,
        })
    }

    /// Record a vote and run the tally once every roster member has voted.
    ///
    /// The threshold is the roster size at the time of this call, so a player
    /// joining mid-round raises it.
    pub fn submit_vote(&mut self, voter_id: &str, target_id: &str) -> PartyResult<VoteOutcome> {
        if self.phase != PartyPhase::Voting || self.current_round.is_none() {
            return Err(PartyError::invalid_state("Not in voting state"));
        }
        if self.player(voter_id).is_none() {
            return Err(PartyError::not_found("Player not found"));
        }
        if self.player(target_id).is_none() {
            return Err(PartyError::not_found("Target player not found"));
        }

        let needed = self.players.len();
        let Some(round) = self.current_round.as_mut() else {
            return Err(PartyError::invalid_state("Not in voting state"));
        };
        if round.has_voted(voter_id) {
            return Err(PartyError::DuplicateVote);
        }

        round.record_vote(voter_id.to_string(), target_id.to_string());
        let votes = round.vote_count();
        if votes != needed {
            return Ok(VoteOutcome::Recorded { votes, needed });
        }

        let star_id = self.close_voting()?;
        Ok(VoteOutcome::Tallied { star_id })
    }

    /// Tally a full ballot box, credit the star and move to task choice
    fn close_voting(&mut self) -> PartyResult<PlayerId> {
        let Some(round) = self.current_round.as_mut() else {
            return Err(PartyError::invalid_state("Not in voting state"));
        };

        // Ballots only ever name roster members, so this means the roster changed under us
        let Some(star_id) = round.tally(&self.players, &self.tasks, &mut self.rng) else {
            tracing::error!(
                "Party {}: {} ballots but no roster member received a vote",
                self.id,
                round.vote_count()
            );
            return Err(PartyError::invalid_state("Vote tally found no winner"));
        };

        if let Some(star) = self.player_mut(&star_id) {
            star.stars += 1;
        }
        self.phase = PartyPhase::TaskChoice;

        Ok(star_id)
    }

    /// Star-only: pick one of the offered tasks and drop it from its pool
    pub fn choose_task(&mut self, player_id: &str, task_index: i64) -> PartyResult<&'static str> {
        if self.phase != PartyPhase::TaskChoice {
            return Err(PartyError::invalid_state("Not in task choice state"));
        }
        let Some(round) = self.current_round.as_mut() else {
            return Err(PartyError::invalid_state("Not in task choice state"));
        };
        if round.star_id.as_deref() != Some(player_id) {
            return Err(PartyError::forbidden("Only the star can pick a task"));
        }

        let chosen = usize::try_from(task_index)
            .ok()
            .and_then(|i| round.task_options.get(i).copied())
            .ok_or_else(|| PartyError::invalid_input("Invalid task index"))?;

        round.selected_task = Some(chosen);
        let polarity = round.polarity();
        self.tasks.take(polarity, chosen);
        self.phase = PartyPhase::TaskResult;

        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FALLBACK_TASKS, NEGATIVE_TASKS, POSITIVE_TASKS};
    use rand::SeedableRng;

    fn party(seed: u64) -> Party {
        Party::new("1234".to_string(), StdRng::seed_from_u64(seed))
    }

    /// Party with the given players registered; the first is host
    fn party_with(names: &[&str]) -> (Party, Vec<PlayerId>) {
        let mut p = party(1);
        let ids = names
            .iter()
            .map(|n| p.register(n).unwrap().id)
            .collect();
        (p, ids)
    }

    /// Everyone votes for `target`; returns the star
    fn everyone_votes_for(p: &mut Party, ids: &[PlayerId], target: &str) -> PlayerId {
        let mut outcome = None;
        for id in ids {
            outcome = Some(p.submit_vote(id, target).unwrap());
        }
        match outcome {
            Some(VoteOutcome::Tallied { star_id }) => star_id,
            other => panic!("Expected tally, got {:?}", other),
        }
    }

    #[test]
    fn test_new_party_is_idle() {
        let p = party(0);
        assert_eq!(p.phase(), PartyPhase::Idle);
        assert_eq!(p.round_number(), 0);
        assert_eq!(p.deck().remaining(), 40);
        assert!(p.host_id().is_none());
        assert!(p.current_round().is_none());
    }

    #[test]
    fn test_register_validates_name() {
        let mut p = party(0);

        assert!(matches!(p.register("   "), Err(PartyError::InvalidInput(_))));
        assert!(matches!(
            p.register("abcdefghijk"),
            Err(PartyError::InvalidInput(_))
        ));
        assert!(matches!(p.register("a\tb"), Err(PartyError::InvalidInput(_))));
        assert!(p.players().is_empty());

        let player = p.register("  abcdefghij  ").unwrap();
        assert_eq!(player.name, "abcdefghij");
        assert_eq!(player.stars, 0);
        assert_eq!(player.id.len(), 8);
        assert!(player.id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut p = party(0);
        assert!(p.register("ÄÖÜäöüßéèê").is_ok());
    }

    #[test]
    fn test_first_player_stays_host() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        assert!(p.is_host(&ids[0]));
        assert!(!p.is_host(&ids[1]));

        p.register("Cy").unwrap();
        p.start_round(&ids[0]).unwrap();
        p.register("Di").unwrap();

        assert_eq!(p.host_id(), Some(&ids[0]));
    }

    #[test]
    fn test_only_host_starts_rounds() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);

        assert!(matches!(
            p.start_round(&ids[1]),
            Err(PartyError::Forbidden(_))
        ));
        assert!(matches!(
            p.start_round("nobody"),
            Err(PartyError::Forbidden(_))
        ));
        assert_eq!(p.phase(), PartyPhase::Idle);
        assert_eq!(p.round_number(), 0);

        assert_eq!(
            p.start_round(&ids[0]).unwrap(),
            RoundStart::Started { round_number: 1 }
        );
        assert_eq!(p.phase(), PartyPhase::Voting);
        assert_eq!(p.deck().cursor(), 1);
    }

    #[test]
    fn test_start_round_rejected_mid_round() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();

        assert!(matches!(
            p.start_round(&ids[0]),
            Err(PartyError::InvalidState(_))
        ));
        assert_eq!(p.round_number(), 1);
        assert_eq!(p.deck().cursor(), 1);
    }

    #[test]
    fn test_vote_requires_voting_phase() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        assert!(matches!(
            p.submit_vote(&ids[0], &ids[1]),
            Err(PartyError::InvalidState(_))
        ));
    }

    #[test]
    fn test_vote_requires_roster_members() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();

        assert!(matches!(
            p.submit_vote("ghost", &ids[1]),
            Err(PartyError::NotFound(_))
        ));
        assert!(matches!(
            p.submit_vote(&ids[0], "ghost"),
            Err(PartyError::NotFound(_))
        ));
        assert_eq!(p.current_round().unwrap().vote_count(), 0);
    }

    #[test]
    fn test_duplicate_vote_rejected_without_change() {
        let (mut p, ids) = party_with(&["Ann", "Bo", "Cy"]);
        p.start_round(&ids[0]).unwrap();

        assert_eq!(
            p.submit_vote(&ids[0], &ids[1]).unwrap(),
            VoteOutcome::Recorded {
                votes: 1,
                needed: 3
            }
        );
        assert_eq!(
            p.submit_vote(&ids[0], &ids[2]),
            Err(PartyError::DuplicateVote)
        );

        let round = p.current_round().unwrap();
        assert_eq!(round.vote_count(), 1);
        assert_eq!(round.vote_of(&ids[0]), Some(&ids[1]));
    }

    #[test]
    fn test_unique_winner_gets_one_star() {
        let (mut p, ids) = party_with(&["A", "B", "C"]);
        p.start_round(&ids[0]).unwrap();

        p.submit_vote(&ids[0], &ids[1]).unwrap();
        p.submit_vote(&ids[1], &ids[2]).unwrap();
        let outcome = p.submit_vote(&ids[2], &ids[1]).unwrap();

        assert_eq!(
            outcome,
            VoteOutcome::Tallied {
                star_id: ids[1].clone()
            }
        );
        assert_eq!(p.phase(), PartyPhase::TaskChoice);
        assert_eq!(p.player(&ids[1]).unwrap().stars, 1);
        assert_eq!(p.player(&ids[0]).unwrap().stars, 0);
        assert_eq!(p.player(&ids[2]).unwrap().stars, 0);
    }

    #[test]
    fn test_tally_fires_once() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();
        everyone_votes_for(&mut p, &ids, &ids[1]);

        // Late vote after the tally is refused
        p.register("Cy").unwrap();
        let late = p.players()[2].id.clone();
        assert!(matches!(
            p.submit_vote(&late, &ids[1]),
            Err(PartyError::InvalidState(_))
        ));
        assert_eq!(p.player(&ids[1]).unwrap().stars, 1);
    }

    #[test]
    fn test_mid_round_join_raises_threshold() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();
        p.submit_vote(&ids[0], &ids[1]).unwrap();

        let late = p.register("Cy").unwrap().id;
        assert_eq!(
            p.submit_vote(&ids[1], &ids[0]).unwrap(),
            VoteOutcome::Recorded {
                votes: 2,
                needed: 3
            }
        );
        assert_eq!(p.phase(), PartyPhase::Voting);

        assert!(matches!(
            p.submit_vote(&late, &ids[1]).unwrap(),
            VoteOutcome::Tallied { .. }
        ));
        assert_eq!(p.phase(), PartyPhase::TaskChoice);
    }

    #[test]
    fn test_tally_without_roster_target_stays_in_voting() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();
        p.submit_vote(&ids[0], &ids[1]).unwrap();
        // Bo drops off the roster with Ann's ballot still naming him
        p.players.retain(|player| player.id != ids[1]);

        assert!(matches!(
            p.close_voting(),
            Err(PartyError::InvalidState(_))
        ));
        assert_eq!(p.phase(), PartyPhase::Voting);
        assert!(p.current_round().unwrap().star_id.is_none());
        assert_eq!(p.player(&ids[0]).unwrap().stars, 0);
    }

    #[test]
    fn test_only_star_chooses_task() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();
        let star = everyone_votes_for(&mut p, &ids, &ids[1]);
        assert_eq!(star, ids[1]);

        assert!(matches!(
            p.choose_task(&ids[0], 0),
            Err(PartyError::Forbidden(_))
        ));
        assert_eq!(p.phase(), PartyPhase::TaskChoice);
    }

    #[test]
    fn test_choose_task_out_of_range_leaves_state() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();
        everyone_votes_for(&mut p, &ids, &ids[1]);

        let options_before = p.current_round().unwrap().task_options.clone();
        let polarity = p.current_round().unwrap().polarity();
        let pool_before = p.tasks().pool(polarity).to_vec();

        for bad in [-1, 2, 99] {
            assert!(matches!(
                p.choose_task(&ids[1], bad),
                Err(PartyError::InvalidInput(_))
            ));
        }

        assert_eq!(p.current_round().unwrap().task_options, options_before);
        assert_eq!(p.tasks().pool(polarity), pool_before.as_slice());
        assert_eq!(p.phase(), PartyPhase::TaskChoice);
    }

    #[test]
    fn test_chosen_task_leaves_pool() {
        let (mut p, ids) = party_with(&["Ann", "Bo"]);
        p.start_round(&ids[0]).unwrap();
        everyone_votes_for(&mut p, &ids, &ids[1]);

        let option = p.current_round().unwrap().task_options[0];
        let polarity = p.current_round().unwrap().polarity();

        assert_eq!(p.choose_task(&ids[1], 0).unwrap(), option);
        assert_eq!(p.phase(), PartyPhase::TaskResult);
        assert_eq!(p.current_round().unwrap().selected_task, Some(option));
        assert!(!p.tasks().pool(polarity).contains(&option));
        assert_eq!(p.tasks().pool(polarity).len(), 29);

        // Choosing again is not allowed
        assert!(matches!(
            p.choose_task(&ids[1], 0),
            Err(PartyError::InvalidState(_))
        ));
    }

    #[test]
    fn test_full_game_never_repeats_tasks() {
        let (mut p, ids) = party_with(&["Ann", "Bo", "Cy"]);
        let mut selected = Vec::new();
        let mut last_cursor = 0;

        loop {
            match p.start_round(&ids[0]).unwrap() {
                RoundStart::Finished => break,
                RoundStart::Started { round_number } => {
                    assert_eq!(round_number as usize, p.deck().cursor());
                }
            }
            assert!(p.deck().cursor() >= last_cursor);
            last_cursor = p.deck().cursor();

            let star = everyone_votes_for(&mut p, &ids, &ids[2]);
            let round = p.current_round().unwrap();
            let polarity = round.polarity();
            let pool = match polarity {
                Polarity::Positive => POSITIVE_TASKS,
                Polarity::Negative => NEGATIVE_TASKS,
            };
            assert!(round.task_options.len() <= 2);
            for option in &round.task_options {
                assert!(pool.contains(option) || FALLBACK_TASKS.contains(option));
                assert!(!selected.contains(option));
            }

            let chosen = p.choose_task(&star, 1).unwrap();
            selected.push(chosen);
        }

        assert_eq!(p.phase(), PartyPhase::Finished);
        assert_eq!(p.round_number(), 40);
        assert_eq!(p.deck().remaining(), 0);
        assert!(p.current_round().is_none());
        assert_eq!(p.player(&ids[2]).unwrap().stars, 40);

        // Finished is terminal
        assert!(matches!(
            p.start_round(&ids[0]),
            Err(PartyError::InvalidState(_))
        ));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = party(99);
        let mut b = party(99);
        let a_host = a.register("Ann").unwrap().id;
        let b_host = b.register("Ann").unwrap().id;
        assert_eq!(a_host, b_host);

        a.start_round(&a_host).unwrap();
        b.start_round(&b_host).unwrap();
        assert_eq!(
            a.current_round().unwrap().question,
            b.current_round().unwrap().question
        );
    }
}
