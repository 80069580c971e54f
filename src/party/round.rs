use super::deck::TaskPools;
use crate::types::*;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

/// One question-vote-task cycle
#[derive(Debug, Clone)]
pub struct Round {
    pub question: Question,
    /// voter id -> target id
    votes: HashMap<PlayerId, PlayerId>,
    pub star_id: Option<PlayerId>,
    pub task_options: Vec<&'static str>,
    pub selected_task: Option<&'static str>,
}

impl Round {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            votes: HashMap::new(),
            star_id: None,
            task_options: Vec::new(),
            selected_task: None,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.question.polarity
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.votes.contains_key(voter_id)
    }

    pub fn vote_of(&self, voter_id: &str) -> Option<&PlayerId> {
        self.votes.get(voter_id)
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// Record a ballot. Callers check for duplicates first.
    pub fn record_vote(&mut self, voter_id: PlayerId, target_id: PlayerId) {
        self.votes.insert(voter_id, target_id);
    }

    /// Count votes per target, in roster order
    pub fn vote_counts(&self, roster: &[Player]) -> Vec<(PlayerId, u32)> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for target in self.votes.values() {
            *counts.entry(target.as_str()).or_insert(0) += 1;
        }

        roster
            .iter()
            .filter_map(|p| counts.get(p.id.as_str()).map(|c| (p.id.clone(), *c)))
            .collect()
    }

    /// Pick the star and the task options offered to them.
    ///
    /// Ties at the top count are broken uniformly at random. Returns `None`
    /// only if no vote targets a roster member.
    pub fn tally<R: Rng + ?Sized>(
        &mut self,
        roster: &[Player],
        pools: &TaskPools,
        rng: &mut R,
    ) -> Option<PlayerId> {
        let counts = self.vote_counts(roster);
        let max = counts.iter().map(|(_, c)| *c).max()?;
        let tied: Vec<&PlayerId> = counts
            .iter()
            .filter(|(_, c)| *c == max)
            .map(|(id, _)| id)
            .collect();

        let star = (*tied.choose(rng)?).clone();
        self.task_options = pools.offer(self.polarity(), rng);
        self.star_id = Some(star.clone());
        Some(star)
    }
}
