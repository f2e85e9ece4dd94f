use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of letters, numbers and `_`.
///
/// Narrower than the regex crate's `\w`: combining marks split tokens, so
/// decomposed accents (`e` + U+0301) are not part of a word.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

/// Splits raw text into normalized word tokens.
///
/// - The whole text is lowercased first
/// - Tokens are maximal runs of letters, numbers and `_`, kept in
///   left-to-right order
/// - Punctuation and whitespace never appear in a token
///
/// Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
	let lowered = text.to_lowercase();
	WORD.find_iter(&lowered).map(|m| m.as_str().to_owned()).collect()
}
