use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::ladder::diagnostics::{DiagnosticSink, LogSink};
use crate::ladder::edit_distance::is_adjacent;
use crate::ladder::neighbors::NeighborStrategy;
use crate::ladder::Dictionary;
use crate::{Error, Result};

/// Options for a word-ladder search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    #[serde(default)]
    pub strategy: NeighborStrategy,
    /// Match words case-insensitively. Begin, end and dictionary words are all
    /// lowercased for the query, and the ladder is returned in lowercase.
    #[serde(default)]
    pub ignore_case: bool,
}

impl LadderConfig {
    pub fn with_strategy(strategy: NeighborStrategy) -> Self {
        LadderConfig {
            strategy,
            ..LadderConfig::default()
        }
    }

    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

/// Breadth-first word-ladder search over a borrowed dictionary
///
/// Each query works on its own copy of the word set, so one dictionary can
/// serve any number of searches.
#[derive(Debug, Clone)]
pub struct WordLadder<'a> {
    dictionary: &'a Dictionary,
    config: LadderConfig,
}

impl<'a> WordLadder<'a> {
    /// Creates a search engine.
    ///
    /// Fails with [`Error::MixedWordLengths`] when the substitution-only
    /// strategy is requested for a dictionary whose words differ in length.
    pub fn new(dictionary: &'a Dictionary, config: LadderConfig) -> Result<Self> {
        if config.strategy == NeighborStrategy::SubstitutionOnly && dictionary.lengths().len() > 1 {
            return Err(Error::MixedWordLengths(dictionary.lengths().into_iter().collect()));
        }
        Ok(WordLadder { dictionary, config })
    }

    pub fn config(&self) -> LadderConfig {
        self.config
    }

    /// Finds a shortest ladder from `begin_word` to `end_word`.
    ///
    /// Returns an empty vector when `begin_word == end_word`, when `end_word`
    /// is not in the dictionary, or when no ladder exists. The last two cases
    /// are also reported to `sink`. Words are compared exactly unless the
    /// config sets `ignore_case`.
    pub fn generate(&self, begin_word: &str, end_word: &str, sink: &dyn DiagnosticSink) -> Vec<String> {
        let (begin_word, end_word, mut available): (Cow<str>, Cow<str>, HashSet<String>) =
            if self.config.ignore_case {
                (
                    Cow::Owned(begin_word.to_lowercase()),
                    Cow::Owned(end_word.to_lowercase()),
                    self.dictionary.iter().map(str::to_lowercase).collect(),
                )
            } else {
                (
                    Cow::Borrowed(begin_word),
                    Cow::Borrowed(end_word),
                    self.dictionary.words().clone(),
                )
            };
        let (begin_word, end_word) = (begin_word.as_ref(), end_word.as_ref());

        if begin_word == end_word {
            return Vec::new();
        }

        if !available.contains(end_word) {
            sink.report(begin_word, end_word, "end word is not in the dictionary");
            return Vec::new();
        }

        if self.config.strategy == NeighborStrategy::SubstitutionOnly
            && begin_word.chars().count() != end_word.chars().count()
        {
            sink.report(
                begin_word,
                end_word,
                "substitution-only search can't change word length",
            );
            return Vec::new();
        }

        available.remove(begin_word);

        let mut queue: VecDeque<Vec<String>> = VecDeque::new();
        queue.push_back(vec![begin_word.to_string()]);
        let mut expanded = 0usize;

        while let Some(ladder) = queue.pop_front() {
            let Some(last) = ladder.last() else {
                continue;
            };
            expanded += 1;

            for neighbor in self.config.strategy.neighbors(last, &available) {
                // Consume on discovery so sibling paths never queue the same word
                available.remove(&neighbor);

                let mut next = ladder.clone();
                next.push(neighbor);

                if next.last().map(String::as_str) == Some(end_word) {
                    log::debug!(
                        "ladder {} -> {} found with {} words after expanding {} paths",
                        begin_word,
                        end_word,
                        next.len(),
                        expanded
                    );
                    return next;
                }
                queue.push_back(next);
            }
        }

        sink.report(begin_word, end_word, "no ladder found");
        Vec::new()
    }
}

/// Finds a shortest ladder with the general neighbor strategy, logging
/// diagnostics through `log`.
pub fn generate_ladder(begin_word: &str, end_word: &str, dictionary: &Dictionary) -> Vec<String> {
    let search = WordLadder {
        dictionary,
        config: LadderConfig::default(),
    };
    search.generate(begin_word, end_word, &LogSink)
}

/// True when every consecutive pair of words is adjacent.
///
/// Ladders with fewer than two words are trivially valid.
pub fn validate_ladder<S: AsRef<str>>(ladder: &[S]) -> bool {
    ladder
        .windows(2)
        .all(|pair| is_adjacent(pair[0].as_ref(), pair[1].as_ref()))
}
