//! Markov melody composition — a first-order transition table over pitch
//! tokens, trained from example melodies and sampled with an injected RNG.

pub mod training;

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// First-order Markov chain over pitch tokens.
///
/// The transition table maps each observed token to the list of tokens that
/// followed it in the training data. Successors are kept with duplicates, so
/// a transition seen twice is twice as likely to be sampled. Keys are also
/// tracked in first-seen order, which keeps random key selection
/// deterministic under a seeded RNG.
#[derive(Debug, Clone, Default)]
pub struct MarkovComposer {
    chain: HashMap<String, Vec<String>>,
    keys: Vec<String>,
}

impl MarkovComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the transition table from training melodies, replacing any
    /// previous table wholesale.
    ///
    /// Each melody is a whitespace-separated token string; every adjacent
    /// token pair records one transition.
    pub fn train<'a, I>(&mut self, melodies: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.chain.clear();
        self.keys.clear();

        for melody in melodies {
            let tokens: Vec<&str> = melody.split_whitespace().collect();
            for pair in tokens.windows(2) {
                let (current, next) = (pair[0], pair[1]);
                let successors = match self.chain.entry(current.to_string()) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        self.keys.push(current.to_string());
                        entry.insert(Vec::new())
                    }
                };
                successors.push(next.to_string());
            }
        }
    }

    /// Whether any transitions have been learned.
    pub fn is_trained(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Tokens that appear as transition-table keys, in first-seen order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Observed successors of `token`, duplicates included.
    pub fn successors(&self, token: &str) -> Option<&[String]> {
        self.chain.get(token).map(Vec::as_slice)
    }

    /// Sample a melody of exactly `length` tokens.
    ///
    /// Returns an empty sequence when the model is untrained. The walk starts
    /// from `start` if it is a table key, otherwise from a uniformly random
    /// key. Each step picks uniformly among the current token's successors;
    /// a dead-end token (one never seen as a key) recovers by jumping to a
    /// uniformly random key, so the walk never fails short of `length`.
    pub fn compose<R: Rng>(&self, rng: &mut R, length: usize, start: Option<&str>) -> Vec<String> {
        if self.chain.is_empty() || length == 0 {
            return Vec::new();
        }

        let mut current = match start {
            Some(token) if self.chain.contains_key(token) => token.to_string(),
            _ => self.random_key(rng),
        };

        let mut melody = Vec::with_capacity(length);
        melody.push(current.clone());

        for _ in 1..length {
            current = match self.chain.get(&current) {
                Some(successors) => successors
                    .choose(rng)
                    .expect("training never records an empty successor list")
                    .clone(),
                None => self.random_key(rng),
            };
            melody.push(current.clone());
        }

        melody
    }

    /// Like [`compose`](Self::compose), joined into one notation string.
    pub fn compose_string<R: Rng>(&self, rng: &mut R, length: usize, start: Option<&str>) -> String {
        self.compose(rng, length, start).join(" ")
    }

    fn random_key<R: Rng>(&self, rng: &mut R) -> String {
        self.keys
            .choose(rng)
            .expect("checked non-empty before sampling")
            .clone()
    }
}
