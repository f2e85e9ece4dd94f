use thiserror::Error;

/// Contract violations raised at the boundary of the model.
///
/// A candidate that simply cannot be scored is not an error: see
/// [`Estimate::NotComputable`](crate::model::estimator::Estimate::NotComputable).
#[derive(Debug, Error)]
pub enum ModelError {
	/// An n-gram order of zero was requested.
	#[error("n-gram order must be >= 1")]
	InvalidOrder,

	/// Scoring asked for an order the table was never counted at.
	#[error("order {order} exceeds the table's maximum order {max_order}")]
	OrderExceedsTable { order: usize, max_order: usize },

	/// The corpus (or the corpus size given alongside a table) is empty.
	#[error("corpus is empty")]
	EmptyCorpus,

	/// The corpus size given alongside a table is not the one it was counted from.
	#[error("corpus size {given} does not match the {counted} tokens the table was counted from")]
	CorpusSizeMismatch { given: usize, counted: usize },

	/// Reading a corpus file failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_values() {
		let err = ModelError::OrderExceedsTable { order: 4, max_order: 3 };
		assert_eq!(err.to_string(), "order 4 exceeds the table's maximum order 3");
		assert_eq!(ModelError::InvalidOrder.to_string(), "n-gram order must be >= 1");
		let err = ModelError::CorpusSizeMismatch { given: 1, counted: 4 };
		assert_eq!(err.to_string(), "corpus size 1 does not match the 4 tokens the table was counted from");
	}

	#[test]
	fn io_errors_convert() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
		let err: ModelError = io.into();
		assert!(matches!(err, ModelError::Io(_)));
	}
}
