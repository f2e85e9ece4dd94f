use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Probability estimator used when scoring a candidate.
///
/// # Variants
/// - `None`: plain maximum likelihood, unseen events are not computable
/// - `Laplace`: add-one smoothing, every event gets some mass
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Smoothing {
	#[default]
	None,
	Laplace,
}

/// Parameters for scoring a candidate against a [`LanguageModel`](super::language_model::LanguageModel).
///
/// # Invariants
/// - `order` is always >= 1 (enforced by [`ScoringOptions::set_order`] and
///   checked again when scoring, since deserialized values bypass the setter)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScoringOptions {
	/// Order of the n-gram model (1 = unigram, 2 = bigram, ...).
	order: usize,

	/// Estimator to use.
	pub smoothing: Smoothing,

	/// Accumulate log2 probabilities instead of multiplying.
	/// The returned unit is a linear probability either way.
	pub log_space: bool,

	/// Run the candidate through the corpus tokenizer before scoring
	/// (lowercase, strip punctuation). Off by default: candidates are split
	/// on whitespace only.
	pub normalize_candidate: bool,
}

impl Default for ScoringOptions {
	fn default() -> Self {
		Self { order: 1, smoothing: Smoothing::None, log_space: false, normalize_candidate: false }
	}
}

impl ScoringOptions {
	/// Creates options for an order-`order` model with every other setting at its default.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidOrder`] if `order` is 0.
	pub fn with_order(order: usize) -> ModelResult<Self> {
		let mut options = Self::default();
		options.set_order(order)?;
		Ok(options)
	}

	/// Returns the current n-gram order.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Sets the n-gram order.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidOrder`] if `order` is 0.
	pub fn set_order(&mut self, order: usize) -> ModelResult<()> {
		if order == 0 {
			return Err(ModelError::InvalidOrder);
		}
		self.order = order;
		Ok(())
	}

	/// Builder-style toggle for Laplace smoothing.
	pub fn smoothed(mut self, smoothed: bool) -> Self {
		self.smoothing = if smoothed { Smoothing::Laplace } else { Smoothing::None };
		self
	}

	/// Builder-style toggle for log-space accumulation.
	pub fn in_log_space(mut self, log_space: bool) -> Self {
		self.log_space = log_space;
		self
	}

	/// Builder-style toggle for candidate normalization.
	pub fn normalized(mut self, normalize: bool) -> Self {
		self.normalize_candidate = normalize;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_plain_unigram_mle() {
		let options = ScoringOptions::default();
		assert_eq!(options.order(), 1);
		assert_eq!(options.smoothing, Smoothing::None);
		assert!(!options.log_space);
		assert!(!options.normalize_candidate);
	}

	#[test]
	fn order_zero_is_rejected() {
		assert!(matches!(ScoringOptions::with_order(0), Err(ModelError::InvalidOrder)));

		let mut options = ScoringOptions::with_order(2).unwrap();
		assert!(options.set_order(0).is_err());
		assert_eq!(options.order(), 2);
	}

	#[test]
	fn builders_compose() {
		let options = ScoringOptions::with_order(3).unwrap().smoothed(true).in_log_space(true).normalized(true);
		assert_eq!(options.order(), 3);
		assert_eq!(options.smoothing, Smoothing::Laplace);
		assert!(options.log_space);
		assert!(options.normalize_candidate);
	}

	#[test]
	fn deserializes_with_lowercase_smoothing_and_defaults() {
		let options: ScoringOptions = serde_json::from_str(r#"{"order": 2, "smoothing": "laplace"}"#).unwrap();
		assert_eq!(options.order(), 2);
		assert_eq!(options.smoothing, Smoothing::Laplace);
		assert!(!options.log_space);

		let json = serde_json::to_value(ScoringOptions::default()).unwrap();
		assert_eq!(json["smoothing"], "none");
	}
}
