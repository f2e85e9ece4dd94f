//! Invariants of the counts table and the estimators over generated corpora.

use ngram_lm_core::{count_ngrams, estimate_mle, estimate_smoothed, tokenize, Estimate, NotComputable};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORDS: [&str; 10] = ["the", "cat", "dog", "a", "was", "and", "saw", "up", "woke", "awake"];

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..60).prop_map(|words| words.into_iter().map(str::to_owned).collect())
}

fn random_corpus(rng: &mut StdRng, len: usize) -> Vec<String> {
	(0..len).map(|_| WORDS[rng.random_range(0..WORDS.len())].to_owned()).collect()
}

fn relative_eq(a: f64, b: f64) -> bool {
	(a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn prefix_counts_dominate(tokens in corpus_strategy(), max_order in 1usize..5) {
		let table = count_ngrams(&tokens, max_order).unwrap();
		for (ngram, count) in table.iter() {
			prop_assert!(count >= 1);
			if ngram.len() > 1 {
				let prefix = &ngram[..ngram.len() - 1];
				prop_assert!(table.count(prefix) >= count, "prefix {:?} rarer than {:?}", prefix, ngram);
			}
		}
	}

	#[test]
	fn unigram_counts_sum_to_corpus_size(tokens in corpus_strategy(), max_order in 1usize..5) {
		let table = count_ngrams(&tokens, max_order).unwrap();
		let total: usize = table.iter_order(1).map(|(_, count)| count).sum();
		prop_assert_eq!(total, tokens.len());
		prop_assert_eq!(table.corpus_size(), tokens.len());
	}

	#[test]
	fn each_order_counts_every_window(tokens in corpus_strategy(), max_order in 1usize..5) {
		let table = count_ngrams(&tokens, max_order).unwrap();
		for order in 1..=max_order {
			let total: usize = table.iter_order(order).map(|(_, count)| count).sum();
			prop_assert_eq!(total, tokens.len().saturating_sub(order - 1));
		}
	}

	#[test]
	fn tokenizer_is_round_trip_stable(text in "[A-Za-z0-9_ ,.!?;:'\"()-]{0,80}") {
		let tokens = tokenize(&text);
		prop_assert_eq!(tokenize(&tokens.join(" ")), tokens);
	}

	#[test]
	fn smoothed_is_a_positive_probability(
		tokens in prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..60),
		candidate in prop::collection::vec(prop::sample::select(vec!["the", "cat", "zebra", "up", "giraffe"]), 0..8),
		order in 1usize..4,
		log_space in any::<bool>(),
	) {
		let tokens: Vec<String> = tokens.into_iter().map(str::to_owned).collect();
		let table = count_ngrams(&tokens, 3).unwrap();
		let candidate = candidate.join(" ");
		let estimate = estimate_smoothed(&candidate, &table, order, tokens.len(), log_space).unwrap();

		let words = candidate.split_whitespace().count();
		if words < order {
			let is_too_short = matches!(estimate, Estimate::NotComputable(NotComputable::CandidateTooShort { .. }));
			prop_assert!(is_too_short);
		} else {
			let p = estimate.probability().unwrap();
			prop_assert!(p > 0.0 && p <= 1.0, "p = {}", p);
		}
	}

	#[test]
	fn mle_unseen_is_not_computable_in_both_spaces(
		tokens in prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..40),
		order in 1usize..4,
	) {
		let tokens: Vec<String> = tokens.into_iter().map(str::to_owned).collect();
		let table = count_ngrams(&tokens, 3).unwrap();
		// "zebra" never occurs in the corpus, so every window containing it is unseen
		let candidate = format!("{} zebra {}", tokens[0], tokens[tokens.len() - 1]);
		for log_space in [false, true] {
			let estimate = estimate_mle(&candidate, &table, order, tokens.len(), log_space).unwrap();
			let is_unseen = matches!(estimate, Estimate::NotComputable(NotComputable::Unseen { .. }));
			prop_assert!(is_unseen);
		}
	}
}

#[test]
fn log_and_linear_spaces_agree_on_generated_corpora() {
	let mut rng = StdRng::seed_from_u64(42);
	for _ in 0..20 {
		let tokens = random_corpus(&mut rng, 400);
		let table = count_ngrams(&tokens, 3).unwrap();

		for order in 1..=3 {
			// Candidates taken from the corpus so MLE has an estimate
			let start = rng.random_range(0..tokens.len() - 8);
			let candidate = tokens[start..start + 8].join(" ");

			let linear = estimate_mle(&candidate, &table, order, tokens.len(), false).unwrap().probability().unwrap();
			let log = estimate_mle(&candidate, &table, order, tokens.len(), true).unwrap().probability().unwrap();
			assert!(relative_eq(linear, log), "MLE order {}: {} vs {}", order, linear, log);

			let candidate = format!("{} zebra", candidate);
			let linear = estimate_smoothed(&candidate, &table, order, tokens.len(), false).unwrap().probability().unwrap();
			let log = estimate_smoothed(&candidate, &table, order, tokens.len(), true).unwrap().probability().unwrap();
			assert!(relative_eq(linear, log), "smoothed order {}: {} vs {}", order, linear, log);
		}
	}
}

#[test]
fn sample_corpus_scenario() {
	let tokens = tokenize("I saw a cat and a dog. The cat was sleeping, and the dog was awake. I woke up the cat.");
	let table = count_ngrams(&tokens, 3).unwrap();
	let the_cat = ["the".to_owned(), "cat".to_owned()];

	assert_eq!(tokens.len(), 21);
	assert_eq!(table.count(&the_cat), 2);
	assert_eq!(table.count(&["a".to_owned()]), 2);

	let p = estimate_mle("woke up the cat", &table, 1, tokens.len(), false).unwrap().probability().unwrap();
	assert!(p > 0.0 && p < 1.0);

	// Every trigram of the candidate occurs in the corpus
	let p = estimate_mle("woke up the cat", &table, 3, tokens.len(), false).unwrap().probability().unwrap();
	assert!((p - 1.0).abs() < 1e-12);

	assert!(!estimate_mle("the cat was awake", &table, 3, tokens.len(), false).unwrap().is_computable());
	assert!(!estimate_mle("the cat was awake", &table, 3, tokens.len(), true).unwrap().is_computable());
}
