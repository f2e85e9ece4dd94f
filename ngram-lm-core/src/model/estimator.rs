use std::fmt;

use log::trace;

use super::ngram_counts::{CountsTable, NGram};
use crate::error::{ModelError, ModelResult};

/// Why a candidate could not be scored.
#[derive(Clone, Debug, PartialEq)]
pub enum NotComputable {
	/// The candidate has fewer tokens than the requested order.
	CandidateTooShort { tokens: usize, order: usize },

	/// An n-gram of the candidate never occurred in the corpus (MLE only).
	Unseen { ngram: NGram },
}

impl fmt::Display for NotComputable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NotComputable::CandidateTooShort { tokens, order } => {
				write!(f, "candidate has {} tokens, order {} needs at least as many", tokens, order)
			}
			NotComputable::Unseen { ngram } => write!(f, "n-gram ({}) never occurred", ngram.join(" ")),
		}
	}
}

/// Outcome of scoring a candidate.
///
/// `NotComputable` is a regular result: callers must tell "the model has
/// no estimate" apart from a probability.
#[derive(Clone, Debug, PartialEq)]
pub enum Estimate {
	/// Linear probability in `[0, 1]`, whatever space it was accumulated in.
	Probability(f64),
	NotComputable(NotComputable),
}

impl Estimate {
	/// Returns the probability, or `None` if not computable.
	pub fn probability(&self) -> Option<f64> {
		match self {
			Estimate::Probability(p) => Some(*p),
			Estimate::NotComputable(_) => None,
		}
	}

	/// Returns `true` if a probability was produced.
	pub fn is_computable(&self) -> bool {
		matches!(self, Estimate::Probability(_))
	}
}

impl fmt::Display for Estimate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Estimate::Probability(p) => write!(f, "{}", p),
			Estimate::NotComputable(reason) => write!(f, "not computable: {}", reason),
		}
	}
}

/// Running product of per-event probabilities.
///
/// In log space factors are summed as `log2` values and exponentiated back
/// on `finish`, so both modes return the same unit.
struct Accumulator {
	log_space: bool,
	value: f64,
}

impl Accumulator {
	fn new(log_space: bool) -> Self {
		Self { log_space, value: if log_space { 0.0 } else { 1.0 } }
	}

	fn push(&mut self, numerator: usize, denominator: usize) {
		let factor = numerator as f64 / denominator as f64;
		if self.log_space {
			self.value += factor.log2();
		} else {
			self.value *= factor;
		}
	}

	fn finish(self) -> f64 {
		if self.log_space { self.value.exp2() } else { self.value }
	}
}

/// Splits a candidate on whitespace.
///
/// Unlike [`tokenize`](super::tokenizer::tokenize) this neither lowercases
/// nor strips punctuation: candidates must already be normalized for their
/// tokens to match the table.
fn split_candidate(candidate: &str) -> Vec<String> {
	candidate.split_whitespace().map(str::to_owned).collect()
}

fn check_preconditions(table: &CountsTable, order: usize, corpus_size: usize) -> ModelResult<()> {
	if order == 0 {
		return Err(ModelError::InvalidOrder);
	}
	if order > table.max_order() {
		return Err(ModelError::OrderExceedsTable { order, max_order: table.max_order() });
	}
	if corpus_size == 0 || table.is_empty() {
		return Err(ModelError::EmptyCorpus);
	}
	if corpus_size != table.corpus_size() {
		return Err(ModelError::CorpusSizeMismatch { given: corpus_size, counted: table.corpus_size() });
	}
	Ok(())
}

/// Segments the candidate and checks it is long enough for `order`.
fn candidate_tokens(candidate: &str, order: usize) -> Result<Vec<String>, NotComputable> {
	let tokens = split_candidate(candidate);
	if tokens.len() < order {
		trace!("Candidate {:?} is shorter than order {}", candidate, order);
		return Err(NotComputable::CandidateTooShort { tokens: tokens.len(), order });
	}
	Ok(tokens)
}

/// Maximum-likelihood probability of `candidate` under an order-`order` model.
///
/// - Order 1: product of `count(w) / corpus_size` over the tokens
/// - Order > 1: product of `count(window) / count(context)` over every
///   window of `order` tokens, the context being the window minus its last token
///
/// Any unseen unigram or window makes the whole estimate
/// [`NotComputable::Unseen`]. With `log_space` the factors are summed as
/// `log2` values to avoid underflow; the result is still a probability.
///
/// # Errors
/// Rejects `order == 0`, an order above the table's maximum, an empty
/// corpus, and a `corpus_size` other than the table's own token count.
pub fn estimate_mle(candidate: &str, table: &CountsTable, order: usize, corpus_size: usize, log_space: bool) -> ModelResult<Estimate> {
	check_preconditions(table, order, corpus_size)?;
	let tokens = match candidate_tokens(candidate, order) {
		Ok(tokens) => tokens,
		Err(reason) => return Ok(Estimate::NotComputable(reason)),
	};

	let mut acc = Accumulator::new(log_space);
	for window in tokens.windows(order) {
		let count = table.count(window);
		if count == 0 {
			trace!("MLE has no estimate for unseen n-gram {:?}", window);
			return Ok(Estimate::NotComputable(NotComputable::Unseen { ngram: window.to_vec() }));
		}
		let context = if order == 1 { corpus_size } else { table.count(&window[..order - 1]) };
		acc.push(count, context);
	}
	Ok(Estimate::Probability(acc.finish()))
}

/// Add-one (Laplace) smoothed probability of `candidate`.
///
/// With `V` the vocabulary size of the table:
/// - Order 1: product of `(count(w) + 1) / (corpus_size + V)`
/// - Order > 1: product of `(count(window) + 1) / (count(context) + V)`
///
/// Absent n-grams and contexts count as 0, so the estimate is always a
/// probability in `(0, 1]` once the candidate is long enough. The same
/// formula is used in both spaces.
///
/// # Errors
/// Same preconditions as [`estimate_mle`].
pub fn estimate_smoothed(candidate: &str, table: &CountsTable, order: usize, corpus_size: usize, log_space: bool) -> ModelResult<Estimate> {
	check_preconditions(table, order, corpus_size)?;
	let tokens = match candidate_tokens(candidate, order) {
		Ok(tokens) => tokens,
		Err(reason) => return Ok(Estimate::NotComputable(reason)),
	};

	let vocabulary_size = table.vocabulary_size();
	let mut acc = Accumulator::new(log_space);
	for window in tokens.windows(order) {
		let context = if order == 1 { corpus_size } else { table.count(&window[..order - 1]) };
		acc.push(table.count(window) + 1, context + vocabulary_size);
	}
	Ok(Estimate::Probability(acc.finish()))
}
