use std::env;

use log::info;
use ngram_lm_core::{LanguageModel, ScoringOptions};

const SAMPLE_CORPUS: &str = "I saw a cat and a dog. The cat was sleeping, and the dog was awake. I woke up the cat.";

const CANDIDATES: [&str; 7] = [
    "woke up the cat",
    "a cat",
    "the cat",
    "the dog",
    "the woke",
    "the cat was awake",
    "as a result of the explosion",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows table statistics
    env_logger::init();

    // Use the corpus file given as first argument, or the built-in sample
    let model = match env::args().nth(1) {
        Some(path) => LanguageModel::from_file(path, 3)?,
        None => LanguageModel::from_text(SAMPLE_CORPUS, 3)?,
    };
    info!("Corpus size: {}, vocabulary size: {}", model.corpus_size(), model.counts().vocabulary_size());

    for candidate in CANDIDATES {
        for order in 1..=model.max_order() {
            // Plain MLE and add-one smoothing, each in linear and log space
            for smoothed in [false, true] {
                for log_space in [false, true] {
                    let options = ScoringOptions::with_order(order)?.smoothed(smoothed).in_log_space(log_space);
                    let estimate = model.estimate(candidate, &options)?;
                    println!(
                        "{:<30} n={} {:<8} {:<6} {}",
                        candidate,
                        order,
                        if smoothed { "laplace" } else { "mle" },
                        if log_space { "log" } else { "linear" },
                        estimate
                    );
                }
            }
        }
    }

    Ok(())
}
