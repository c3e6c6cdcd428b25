use ladder_paths::ladder::{
    brute_force_neighbors, edit_distance, edit_distance_within, generate_ladder, is_adjacent,
    neighbors_of, substitution_neighbors, validate_ladder, CollectingSink, Dictionary,
    LadderConfig, NeighborStrategy, NullSink, WordLadder,
};
use ladder_paths::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

fn sample_dictionary() -> Dictionary {
    Dictionary::from_words(["hot", "dot", "dog", "lot", "log", "cog"])
}

fn mixed_length_dictionary(seed: u64) -> Dictionary {
    let mut dictionary = Dictionary::new();
    for (offset, len) in [2usize, 3, 4].iter().enumerate() {
        let part = Dictionary::random(40, *len, 4, seed * 10 + offset as u64);
        dictionary.extend(part.iter());
    }
    dictionary
}

fn random_word(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..6);
    (0..len).map(|_| (b'a' + rng.gen_range(0..4)) as char).collect()
}

/// Word count of a shortest ladder by plain BFS, testing every pair of words
/// with `is_adjacent`. Zero when `end` can't be reached.
fn reference_ladder_len<'a>(begin: &'a str, end: &str, words: &[&'a str]) -> usize {
    let mut depth: HashMap<&str, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    depth.insert(begin, 1);
    queue.push_back(begin);

    while let Some(word) = queue.pop_front() {
        let d = depth[word];
        if word == end {
            return d;
        }
        for &next in words {
            if !depth.contains_key(next) && is_adjacent(word, next) {
                depth.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    0
}

fn assert_no_repeats(ladder: &[String]) {
    let mut seen = HashSet::new();
    assert!(ladder.iter().all(|w| seen.insert(w.clone())), "ladder repeats a word: {:?}", ladder);
}

#[test]
fn test_edit_distance_classics() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("flaw", "lawn"), 2);
    assert_eq!(edit_distance("same", "same"), 0);
    assert_eq!(edit_distance("né", "ne"), 1);
}

#[test]
fn test_threshold_short_circuits_on_length() {
    assert!(!edit_distance_within("a", "abc", 1));
    assert!(edit_distance_within("a", "abc", 2));
    assert!(edit_distance_within("", "", 0));
}

#[test]
fn test_adjacency_covers_every_edit() {
    assert!(is_adjacent("cat", "cot"));
    assert!(is_adjacent("cat", "cart"));
    assert!(is_adjacent("cart", "cat"));
    assert!(is_adjacent("cat", "cat"));
    assert!(is_adjacent("a", ""));
    assert!(!is_adjacent("cat", "dog"));
    assert!(!is_adjacent("cat", "cats!"));
    assert!(!is_adjacent("abc", "bca"));
}

#[test]
fn test_adjacency_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let a = random_word(&mut rng);
        let b = random_word(&mut rng);
        assert_eq!(is_adjacent(&a, &b), is_adjacent(&b, &a), "{:?} / {:?}", a, b);
        assert!(is_adjacent(&a, &a));
    }
}

#[test]
fn test_generated_neighbors_match_brute_force() {
    for seed in 0..5u64 {
        let dictionary = mixed_length_dictionary(seed);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut queries: Vec<String> = dictionary.iter().map(str::to_string).collect();
        queries.extend((0..50).map(|_| random_word(&mut rng)));

        for word in &queries {
            assert_eq!(
                neighbors_of(word, &dictionary),
                brute_force_neighbors(word, &dictionary),
                "neighbors of {:?}",
                word
            );
        }
    }
}

#[test]
fn test_neighbors_of_sample_word() {
    let dictionary = Dictionary::from_words(["cat", "cot", "cart", "at", "cats", "dog", "ca"]);
    let expected: BTreeSet<String> = ["at", "ca", "cart", "cats", "cot"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    assert_eq!(neighbors_of("cat", &dictionary), expected);
    assert_eq!(
        substitution_neighbors("cat", &dictionary),
        BTreeSet::from(["cot".to_string()])
    );
    assert!(!neighbors_of("cat", &dictionary).contains("cat"));
}

#[test]
fn test_single_letter_words_do_not_delete_to_empty() {
    let dictionary = Dictionary::from_words(["a", "b", "ab"]);
    let expected: BTreeSet<String> = ["ab", "b"].iter().map(|w| w.to_string()).collect();
    assert_eq!(neighbors_of("a", &dictionary), expected);
}

#[test]
fn test_sample_ladder() {
    let ladder = generate_ladder("hit", "cog", &sample_dictionary());

    assert_eq!(ladder, vec!["hit", "hot", "dot", "dog", "cog"]);
    assert!(validate_ladder(&ladder));
}

#[test]
fn test_words_match_exactly_as_given() {
    let dictionary = Dictionary::from_words(["Hot", "Hog", "Hug", "Cog"]);
    assert!(dictionary.contains("Cog"));
    assert!(!dictionary.contains("cog"));

    assert_eq!(generate_ladder("Hit", "Hug", &dictionary), vec!["Hit", "Hot", "Hog", "Hug"]);

    let brute = LadderConfig::with_strategy(NeighborStrategy::BruteForce);
    let search = WordLadder::new(&dictionary, brute).unwrap();
    assert_eq!(search.generate("Hog", "Cog", &NullSink), vec!["Hog", "Cog"]);

    let sink = CollectingSink::new();
    assert!(search.generate("hit", "hug", &sink).is_empty());
    assert_eq!(sink.diagnostics()[0].message, "end word is not in the dictionary");
}

#[test]
fn test_ignore_case_normalises_query_and_words() {
    let dictionary = Dictionary::from_words(["Hot", "DOT", "dog", "Cog"]);
    let before = dictionary.clone();
    let config = LadderConfig::default().ignoring_case();
    let search = WordLadder::new(&dictionary, config).unwrap();

    assert_eq!(search.generate("HIT", "cog", &NullSink), vec!["hit", "hot", "dot", "dog", "cog"]);
    assert!(search.generate("Dog", "DOG", &NullSink).is_empty());
    assert_eq!(dictionary, before);
}

#[test]
fn test_same_word_is_degenerate() {
    let dictionary = sample_dictionary();
    let sink = CollectingSink::new();
    let search = WordLadder::new(&dictionary, LadderConfig::default()).unwrap();

    assert!(search.generate("dog", "dog", &sink).is_empty());
    assert!(generate_ladder("dog", "dog", &dictionary).is_empty());
}

#[test]
fn test_end_word_missing_from_dictionary() {
    let dictionary = sample_dictionary();
    let sink = CollectingSink::new();
    let search = WordLadder::new(&dictionary, LadderConfig::default()).unwrap();

    assert!(search.generate("hit", "cig", &sink).is_empty());
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].context_a, "hit");
    assert_eq!(diagnostics[0].context_b, "cig");
}

#[test]
fn test_disconnected_dictionary_reports_no_ladder() {
    let dictionary = Dictionary::from_words(["hot", "dot", "xyz", "xyw"]);
    let sink = CollectingSink::new();
    let search = WordLadder::new(&dictionary, LadderConfig::default()).unwrap();

    assert!(search.generate("hit", "xyz", &sink).is_empty());
    let diagnostics = sink.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "no ladder found");
}

#[test]
fn test_closures_are_diagnostic_sinks() {
    let dictionary = Dictionary::from_words(["abc"]);
    let seen = RefCell::new(Vec::new());
    let sink = |a: &str, b: &str, message: &str| {
        seen.borrow_mut().push(format!("{} {} {}", a, b, message));
    };
    let search = WordLadder::new(&dictionary, LadderConfig::default()).unwrap();

    assert!(search.generate("xyz", "abc", &sink).is_empty());
    assert_eq!(seen.into_inner(), vec!["xyz abc no ladder found".to_string()]);
}

#[test]
fn test_ladders_change_length() {
    let dictionary = Dictionary::from_words(["cat", "cats", "coats", "boats"]);
    let ladder = generate_ladder("at", "boats", &dictionary);

    assert_eq!(ladder, vec!["at", "cat", "cats", "coats", "boats"]);
    assert!(validate_ladder(&ladder));
}

#[test]
fn test_all_strategies_agree_on_ladder_length() {
    for seed in 0..5u64 {
        let dictionary = Dictionary::random(300, 3, 6, seed);
        let mut words: Vec<&str> = dictionary.iter().collect();
        words.sort_unstable();

        for (begin, end) in words.iter().zip(words.iter().rev()).take(10) {
            let lengths: Vec<usize> = [
                NeighborStrategy::General,
                NeighborStrategy::SubstitutionOnly,
                NeighborStrategy::BruteForce,
            ]
            .iter()
            .map(|&strategy| {
                let search = WordLadder::new(&dictionary, LadderConfig::with_strategy(strategy)).unwrap();
                let ladder = search.generate(begin, end, &NullSink);
                if !ladder.is_empty() {
                    assert_eq!(ladder.first().map(String::as_str), Some(*begin));
                    assert_eq!(ladder.last().map(String::as_str), Some(*end));
                    assert!(validate_ladder(&ladder));
                    assert_no_repeats(&ladder);
                }
                ladder.len()
            })
            .collect();

            assert!(lengths.iter().all(|&len| len == lengths[0]), "{:?}", lengths);
            assert_eq!(lengths[0], reference_ladder_len(begin, end, &words));
        }
    }
}

#[test]
fn test_random_ladders_are_valid_and_minimal() {
    for seed in 0..5u64 {
        let dictionary = mixed_length_dictionary(seed);
        let mut words: Vec<&str> = dictionary.iter().collect();
        words.sort_unstable();

        for (begin, end) in words.iter().zip(words.iter().skip(7)).take(15) {
            let ladder = generate_ladder(begin, end, &dictionary);
            assert_eq!(
                ladder.len(),
                reference_ladder_len(begin, end, &words),
                "{} -> {}: {:?}",
                begin,
                end,
                ladder
            );
            if ladder.is_empty() {
                continue;
            }
            assert!(validate_ladder(&ladder));
            assert_no_repeats(&ladder);
            assert!(ladder.iter().skip(1).all(|w| dictionary.contains(w)));

            // No ladder is shorter than the edit distance between its ends
            assert!(ladder.len() > edit_distance(begin, end));
        }
    }
}

#[test]
fn test_search_leaves_dictionary_untouched() {
    let dictionary = sample_dictionary();
    let before = dictionary.clone();

    let _ = generate_ladder("hit", "cog", &dictionary);
    let _ = generate_ladder("hit", "nope", &dictionary);

    assert_eq!(dictionary, before);
}

#[test]
fn test_substitution_only_rejects_mixed_lengths() {
    let dictionary = Dictionary::from_words(["cat", "cart"]);
    let err = WordLadder::new(&dictionary, LadderConfig::with_strategy(NeighborStrategy::SubstitutionOnly)).unwrap_err();

    match err {
        Error::MixedWordLengths(lengths) => assert_eq!(lengths, vec![3, 4]),
        other => panic!("unexpected error: {}", other),
    }
    assert!(WordLadder::new(&dictionary, LadderConfig::default()).is_ok());
}

#[test]
fn test_substitution_only_reports_length_changes() {
    let dictionary = Dictionary::from_words(["cat", "cot"]);
    let search = WordLadder::new(&dictionary, LadderConfig::with_strategy(NeighborStrategy::SubstitutionOnly)).unwrap();
    let sink = CollectingSink::new();

    assert!(search.generate("at", "cot", &sink).is_empty());
    assert_eq!(sink.diagnostics().len(), 1);
    assert_eq!(search.generate("cat", "cot", &sink), vec!["cat", "cot"]);
}

#[test]
fn test_validate_ladder() {
    assert!(validate_ladder::<&str>(&[]));
    assert!(validate_ladder(&["solo"]));
    assert!(validate_ladder(&["cold", "cord", "card", "ward", "warm"]));
    assert!(!validate_ladder(&["cold", "warm"]));
}

#[test]
fn test_strategy_names_parse() {
    assert_eq!("general".parse::<NeighborStrategy>(), Ok(NeighborStrategy::General));
    assert_eq!("substitution".parse::<NeighborStrategy>(), Ok(NeighborStrategy::SubstitutionOnly));
    assert_eq!("brute-force".parse::<NeighborStrategy>(), Ok(NeighborStrategy::BruteForce));
    assert!("dfs".parse::<NeighborStrategy>().is_err());

    let config: LadderConfig = serde_json::from_str(r#"{"strategy": "substitution-only"}"#).unwrap();
    assert_eq!(config.strategy, NeighborStrategy::SubstitutionOnly);
    let config: LadderConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, LadderConfig::default());
}
