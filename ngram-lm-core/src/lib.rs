//! N-gram language modeling library.
//!
//! This crate provides a small statistical language model including:
//! - Word tokenization of raw corpora
//! - N-gram counting for all orders `1..=n` in a single table
//! - Maximum-likelihood and add-one (Laplace) smoothed estimation
//! - Linear or log-space accumulation of probabilities
//!
//! Candidates that cannot be scored are reported as
//! [`Estimate::NotComputable`](model::estimator::Estimate::NotComputable);
//! contract violations (order 0, empty corpus, ...) as [`ModelError`].

/// Tokenizer, counter, estimators and the model facade.
pub mod model;

/// Corpus file loading.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{ModelError, ModelResult};
pub use model::estimator::{estimate_mle, estimate_smoothed, Estimate, NotComputable};
pub use model::language_model::LanguageModel;
pub use model::ngram_counts::{count_ngrams, CountsTable, NGram};
pub use model::scoring_options::{ScoringOptions, Smoothing};
pub use model::tokenizer::tokenize;
