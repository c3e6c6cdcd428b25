use std::env;

use ladder_paths::ladder::{
    validate_ladder, Dictionary, LadderConfig, LogSink, NeighborStrategy, WordLadder,
};
use ladder_paths::output::format_ladder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: ladder [dictionary-file begin end [general|substitution|brute-force]]
    let args: Vec<String> = env::args().collect();
    let (dictionary, begin_word, end_word) = match args.as_slice() {
        [_, path, begin, end, ..] => (
            Dictionary::load_or_empty(path),
            begin.clone(),
            end.clone(),
        ),
        _ => (
            Dictionary::from_words(["hot", "dot", "dog", "lot", "log", "cog"]),
            "hit".to_string(),
            "cog".to_string(),
        ),
    };

    let strategy = match args.get(4) {
        Some(name) => name.parse::<NeighborStrategy>()?,
        None => NeighborStrategy::default(),
    };

    let search = WordLadder::new(&dictionary, LadderConfig::with_strategy(strategy))?;
    let ladder = search.generate(&begin_word, &end_word, &LogSink);

    println!("{}", format_ladder(&ladder));
    if !ladder.is_empty() {
        if validate_ladder(&ladder) {
            println!("Valid word ladder!");
        } else {
            println!("Invalid word ladder.");
        }
    }
    Ok(())
}
