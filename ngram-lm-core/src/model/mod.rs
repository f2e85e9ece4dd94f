//! Top-level module for the n-gram language model.
//!
//! Components, in dependency order:
//! - Word tokenization (`tokenizer`)
//! - N-gram counting for every order up to a maximum (`ngram_counts`)
//! - MLE and add-one smoothed probability estimation (`estimator`)
//! - Scoring configuration (`scoring_options`)
//! - A model facade tying corpus, counts and estimators together (`language_model`)

/// Lowercasing word tokenizer used for corpora.
pub mod tokenizer;

/// Frequency table of every n-gram of order `1..=max_order`.
///
/// Built once from a token sequence and immutable afterwards.
pub mod ngram_counts;

/// Maximum-likelihood and Laplace-smoothed estimators, in linear or log space.
pub mod estimator;

/// Validated scoring parameters (order, smoothing, space, normalization).
pub mod scoring_options;

/// Corpus-backed model that scores candidates with `ScoringOptions`.
pub mod language_model;
