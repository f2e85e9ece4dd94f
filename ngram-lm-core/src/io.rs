use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ModelResult;
use crate::model::tokenizer::tokenize;

/// Reads a whole text file into memory.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> ModelResult<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Reads a corpus file and tokenizes it.
///
/// # Errors
/// Returns [`ModelError::Io`](crate::error::ModelError::Io) if the file
/// cannot be opened or is not valid UTF-8.
pub fn load_text<P: AsRef<Path>>(filename: P) -> ModelResult<Vec<String>> {
	Ok(tokenize(&read_file(filename)?))
}
