//! Neighbor generation for the implicit word graph.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::ladder::edit_distance::is_adjacent;
use crate::ladder::Dictionary;

/// Letters tried for substitutions and insertions
const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// A set of words that neighbor generation can probe
pub trait WordSet {
    fn contains_word(&self, word: &str) -> bool;

    fn iter_words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl WordSet for HashSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn iter_words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl WordSet for BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn iter_words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl WordSet for Dictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn iter_words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter())
    }
}

/// How the word-ladder search finds the neighbors of a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborStrategy {
    /// Generate every substitution, insertion and deletion and probe the set
    #[default]
    General,
    /// Generate substitutions only. Only sound when all words share one length.
    SubstitutionOnly,
    /// Compare the word against every entry with `is_adjacent`
    BruteForce,
}

impl NeighborStrategy {
    pub fn neighbors<S: WordSet + ?Sized>(&self, word: &str, words: &S) -> BTreeSet<String> {
        match self {
            NeighborStrategy::General => neighbors_of(word, words),
            NeighborStrategy::SubstitutionOnly => substitution_neighbors(word, words),
            NeighborStrategy::BruteForce => brute_force_neighbors(word, words),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NeighborStrategy::General => "general",
            NeighborStrategy::SubstitutionOnly => "substitution",
            NeighborStrategy::BruteForce => "brute-force",
        }
    }
}

impl std::str::FromStr for NeighborStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(NeighborStrategy::General),
            "substitution" | "substitution-only" => Ok(NeighborStrategy::SubstitutionOnly),
            "brute-force" | "brute" => Ok(NeighborStrategy::BruteForce),
            other => Err(format!("unknown neighbor strategy: {}", other)),
        }
    }
}

/// Every word in `words` one substitution, insertion or deletion away from `word`.
///
/// Candidates are generated over `a..=z` and probed for membership, so the cost
/// depends on the word length and not on the size of the set. The word itself
/// is never included.
pub fn neighbors_of<S: WordSet + ?Sized>(word: &str, words: &S) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut found = substitution_neighbors(word, words);

    // insertions, one per gap
    for gap in 0..=chars.len() {
        for letter in ALPHABET {
            let candidate: String = chars[..gap]
                .iter()
                .chain(std::iter::once(&letter))
                .chain(chars[gap..].iter())
                .collect();
            if words.contains_word(&candidate) {
                found.insert(candidate);
            }
        }
    }

    // deletions
    if chars.len() > 1 {
        for skip in 0..chars.len() {
            let candidate: String = chars
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, c)| c)
                .collect();
            if words.contains_word(&candidate) {
                found.insert(candidate);
            }
        }
    }

    found
}

/// Every word in `words` that differs from `word` in exactly one position.
pub fn substitution_neighbors<S: WordSet + ?Sized>(word: &str, words: &S) -> BTreeSet<String> {
    let mut chars: Vec<char> = word.chars().collect();
    let mut found = BTreeSet::new();

    for i in 0..chars.len() {
        let original = chars[i];
        for letter in ALPHABET {
            if letter == original {
                continue;
            }
            chars[i] = letter;
            let candidate: String = chars.iter().collect();
            if words.contains_word(&candidate) {
                found.insert(candidate);
            }
        }
        chars[i] = original;
    }

    found
}

/// Linear scan: every other word in `words` adjacent to `word`.
pub fn brute_force_neighbors<S: WordSet + ?Sized>(word: &str, words: &S) -> BTreeSet<String> {
    words
        .iter_words()
        .filter(|candidate| *candidate != word && is_adjacent(word, candidate))
        .map(str::to_string)
        .collect()
}
