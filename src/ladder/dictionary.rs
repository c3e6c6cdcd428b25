use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::Result;

/// A set of unique words
///
/// Words are stored exactly as given; empty tokens are dropped. Case-insensitive
/// matching is a search option, see [`LadderConfig::ignore_case`].
///
/// [`LadderConfig::ignore_case`]: crate::ladder::LadderConfig::ignore_case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            words: HashSet::new(),
        }
    }

    /// Builds a dictionary from any collection of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Reads whitespace-separated words from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                dictionary.insert(token);
            }
        }
        Ok(dictionary)
    }

    /// Loads a word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    /// Loads a word list, logging the failure and falling back to an empty
    /// dictionary when the file can't be read.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                log::error!("can't open word list {}: {}", path.as_ref().display(), err);
                Dictionary::new()
            }
        }
    }

    /// Generates `count` distinct random words of length `word_len` over the
    /// first `alphabet_size` lowercase letters. Small alphabets give densely
    /// connected ladders. The same seed always yields the same dictionary.
    pub fn random(count: usize, word_len: usize, alphabet_size: u8, seed: u64) -> Self {
        let alphabet_size = alphabet_size.clamp(1, 26);
        let capacity = (alphabet_size as u128).saturating_pow(word_len as u32);
        let target = (count as u128).min(capacity) as usize;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut dictionary = Dictionary::new();
        while dictionary.len() < target {
            let word: String = (0..word_len)
                .map(|_| (b'a' + rng.gen_range(0..alphabet_size)) as char)
                .collect();
            dictionary.insert(&word);
        }
        dictionary
    }

    /// Inserts a word; returns false if it was empty or already present
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// The underlying word set
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// The distinct word lengths, in characters
    pub fn lengths(&self) -> BTreeSet<usize> {
        self.words.iter().map(|w| w.chars().count()).collect()
    }

    /// The common word length, if every word has the same one.
    /// `None` for empty dictionaries.
    pub fn uniform_length(&self) -> Option<usize> {
        let lengths = self.lengths();
        if lengths.len() == 1 {
            lengths.into_iter().next()
        } else {
            None
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
