//! Question deck and task pools, built once per party.

use crate::content::{
    question_text, FALLBACK_TASKS, NEGATIVE_ATTRIBUTES, NEGATIVE_TASKS, POSITIVE_ATTRIBUTES,
    POSITIVE_TASKS,
};
use crate::types::{Polarity, Question, QuestionId};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Shuffled, non-repeating question sequence with a forward-only cursor
#[derive(Debug, Clone)]
pub struct Deck {
    questions: Vec<Question>,
    cursor: usize,
}

impl Deck {
    /// Build every question from the attribute lists and shuffle them
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let positives = POSITIVE_ATTRIBUTES.iter().map(|a| (*a, Polarity::Positive));
        let negatives = NEGATIVE_ATTRIBUTES.iter().map(|a| (*a, Polarity::Negative));

        let mut questions: Vec<Question> = positives
            .chain(negatives)
            .enumerate()
            .map(|(id, (attribute, polarity))| Question {
                id: id as QuestionId,
                text: question_text(attribute),
                polarity,
            })
            .collect();
        questions.shuffle(rng);

        Self {
            questions,
            cursor: 0,
        }
    }

    /// Take the next question and advance the cursor, or `None` once exhausted
    pub fn draw(&mut self) -> Option<Question> {
        let question = self.questions.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(question)
    }

    #[cfg(test)]
    fn is_exhausted(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.questions.len()
    }

    /// Questions in dealing order
    #[cfg(test)]
    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Per-party task prompts that deplete as stars pick them
#[derive(Debug, Clone)]
pub struct TaskPools {
    positive: Vec<&'static str>,
    negative: Vec<&'static str>,
}

impl TaskPools {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_TASKS.to_vec(),
            negative: NEGATIVE_TASKS.to_vec(),
        }
    }

    pub fn pool(&self, polarity: Polarity) -> &[&'static str] {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    fn pool_mut(&mut self, polarity: Polarity) -> &mut Vec<&'static str> {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
        }
    }

    /// Pick the options shown to a star. Never mutates the pools.
    ///
    /// Two distinct entries when possible, the single survivor when only one
    /// is left, and the fixed fallback pair once the pool is empty.
    pub fn offer<R: Rng + ?Sized>(&self, polarity: Polarity, rng: &mut R) -> Vec<&'static str> {
        let pool = self.pool(polarity);
        match pool.len() {
            0 => FALLBACK_TASKS.to_vec(),
            1 => pool.to_vec(),
            len => index::sample(rng, len, 2)
                .into_iter()
                .map(|i| pool[i])
                .collect(),
        }
    }

    /// Remove one occurrence of `task` from the polarity's pool.
    /// Returns false if it was not there (fallback prompts never are).
    pub fn take(&mut self, polarity: Polarity, task: &str) -> bool {
        let pool = self.pool_mut(polarity);
        match pool.iter().position(|t| *t == task) {
            Some(pos) => {
                pool.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Default for TaskPools {
    fn default() -> Self {
        Self::new()
    }
}
