use std::path::Path;

use log::info;

use super::estimator::{estimate_mle, estimate_smoothed, Estimate};
use super::ngram_counts::{count_ngrams, CountsTable};
use super::scoring_options::{ScoringOptions, Smoothing};
use super::tokenizer::tokenize;
use crate::error::{ModelError, ModelResult};
use crate::io::load_text;

/// An n-gram language model: the n-gram counts of a corpus.
///
/// This struct manages `counts`, every n-gram of order `1..=max_order` in
/// the corpus; the corpus size (denominator of unigram estimates) is the
/// table's own token count.
///
/// The model is built once and never updated; score as many candidates as
/// needed against it.
#[derive(Clone, Debug)]
pub struct LanguageModel {
	counts: CountsTable,
}

impl LanguageModel {
	/// Builds a model from an already tokenized corpus.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidOrder`] if `max_order` is 0.
	pub fn from_tokens(tokens: &[String], max_order: usize) -> ModelResult<Self> {
		Ok(Self { counts: count_ngrams(tokens, max_order)? })
	}

	/// Tokenizes `text` and builds a model from it.
	pub fn from_text(text: &str, max_order: usize) -> ModelResult<Self> {
		Self::from_tokens(&tokenize(text), max_order)
	}

	/// Reads and tokenizes a corpus file, then builds a model from it.
	///
	/// # Errors
	/// Returns [`ModelError::Io`] if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P, max_order: usize) -> ModelResult<Self> {
		let tokens = load_text(&filepath)?;
		info!("Loaded {} tokens from {}", tokens.len(), filepath.as_ref().display());
		Self::from_tokens(&tokens, max_order)
	}

	/// Returns the underlying counts table.
	pub fn counts(&self) -> &CountsTable {
		&self.counts
	}

	/// Number of tokens in the corpus the model was built from.
	pub fn corpus_size(&self) -> usize {
		self.counts.corpus_size()
	}

	/// Highest n-gram order the model can score.
	pub fn max_order(&self) -> usize {
		self.counts.max_order()
	}

	/// Scores `candidate` according to `options`.
	///
	/// # Behavior
	/// - `Smoothing::None` dispatches to [`estimate_mle`], `Smoothing::Laplace`
	///   to [`estimate_smoothed`]
	/// - With `normalize_candidate`, the candidate is tokenized like the
	///   corpus (lowercased, punctuation stripped) before scoring
	///
	/// # Errors
	/// Returns an error if the order is 0 or above [`LanguageModel::max_order`],
	/// or if the model was built from an empty corpus.
	pub fn estimate(&self, candidate: &str, options: &ScoringOptions) -> ModelResult<Estimate> {
		if options.order() == 0 {
			return Err(ModelError::InvalidOrder);
		}

		let normalized;
		let candidate = if options.normalize_candidate {
			normalized = tokenize(candidate).join(" ");
			normalized.as_str()
		} else {
			candidate
		};

		match options.smoothing {
			Smoothing::None => estimate_mle(candidate, &self.counts, options.order(), self.corpus_size(), options.log_space),
			Smoothing::Laplace => estimate_smoothed(candidate, &self.counts, options.order(), self.corpus_size(), options.log_space),
		}
	}
}
