//! Whitespace tokenizer for the trailing sampling parameters.

/// Parameters are separated by single spaces only; tabs are not delimiters.
const DELIMITER: char = ' ';

/// Split `input` on runs of spaces, dropping empty fields.
///
/// Leading and trailing delimiters are ignored and an all-delimiter input
/// yields an empty vector.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(DELIMITER)
        .filter(|field| !field.is_empty())
        .collect()
}
