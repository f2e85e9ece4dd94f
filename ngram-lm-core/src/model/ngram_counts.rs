use std::collections::HashMap;

use log::debug;

use crate::error::{ModelError, ModelResult};

/// An n-gram: `1..=max_order` consecutive tokens.
///
/// A unigram is a one-element vector, never a bare token, so every order
/// lives in the same table and is recovered from the length.
pub type NGram = Vec<String>;

/// Frequency table of every n-gram of order `1..=max_order` in a corpus.
///
/// Built once by [`count_ngrams`] and immutable afterwards.
///
/// # Invariants
/// - `max_order` is always >= 1
/// - Every stored count is >= 1
/// - For each key of length `m > 1`, its length `m - 1` prefix is stored
///   with a count at least as large (every occurrence of the longer n-gram
///   is also an occurrence of its prefix)
/// - Unigram counts sum to the number of corpus tokens
#[derive(Clone, Debug, PartialEq)]
pub struct CountsTable {
	/// Highest order counted
	max_order: usize,

	/// Occurrences per n-gram, all orders mixed
	counts: HashMap<NGram, usize>,

	/// Number of corpus tokens (sum of unigram counts)
	corpus_size: usize,

	/// Number of distinct unigrams
	vocabulary_size: usize,
}

/// Counts every n-gram of order `1..=max_order` in `tokens`.
///
/// Orders longer than the token sequence contribute nothing, which is not
/// an error: a two-token corpus counted at order 3 holds unigrams and the
/// single bigram only.
///
/// # Errors
/// Returns [`ModelError::InvalidOrder`] if `max_order` is 0.
pub fn count_ngrams(tokens: &[String], max_order: usize) -> ModelResult<CountsTable> {
	if max_order == 0 {
		return Err(ModelError::InvalidOrder);
	}

	let mut counts: HashMap<NGram, usize> = HashMap::new();
	for order in 1..=max_order.min(tokens.len()) {
		for window in tokens.windows(order) {
			// Look up by slice first so repeated n-grams don't allocate
			match counts.get_mut(window) {
				Some(count) => *count += 1,
				None => {
					counts.insert(window.to_vec(), 1);
				}
			}
		}
	}

	let vocabulary_size = counts.keys().filter(|ngram| ngram.len() == 1).count();
	debug!(
		"Counted {} distinct n-grams (orders 1..={}) from {} tokens, vocabulary size {}",
		counts.len(),
		max_order,
		tokens.len(),
		vocabulary_size
	);

	Ok(CountsTable { max_order, counts, corpus_size: tokens.len(), vocabulary_size })
}

impl CountsTable {
	/// Returns how many times `ngram` occurred, or 0 if it never did.
	pub fn count(&self, ngram: &[String]) -> usize {
		self.counts.get(ngram).copied().unwrap_or(0)
	}

	/// Returns `true` if `ngram` occurred at least once.
	pub fn contains(&self, ngram: &[String]) -> bool {
		self.counts.contains_key(ngram)
	}

	/// Highest order the table was counted at.
	pub fn max_order(&self) -> usize {
		self.max_order
	}

	/// Number of corpus tokens the table was built from.
	pub fn corpus_size(&self) -> usize {
		self.corpus_size
	}

	/// Number of distinct unigrams (the add-one smoothing denominator term).
	pub fn vocabulary_size(&self) -> usize {
		self.vocabulary_size
	}

	/// Number of distinct n-grams across all orders.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Returns `true` if the table was built from an empty corpus.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over every `(n-gram, count)` pair, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&[String], usize)> {
		self.counts.iter().map(|(ngram, count)| (ngram.as_slice(), *count))
	}

	/// Iterates over the `(n-gram, count)` pairs of a single order.
	pub fn iter_order(&self, order: usize) -> impl Iterator<Item = (&[String], usize)> {
		self.iter().filter(move |(ngram, _)| ngram.len() == order)
	}
}
