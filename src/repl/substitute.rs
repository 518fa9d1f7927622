//! # Substitution Engine
//!
//! Applies a single `old -> new` text replacement to a recalled line.
//! Only the first occurrence is replaced; an empty `old` matches at the
//! start of the line, so `^^new` prepends without removing anything.

use super::error::HistoryError;

/// Replace the first occurrence of `old` in `text` with `new`
///
/// Fails with [`HistoryError::BadSubstitution`] when `old` does not occur.
pub fn substitute(old: &str, new: &str, text: &str) -> Result<String, HistoryError> {
    match text.find(old) {
        Some(start) => {
            let mut result = String::with_capacity(text.len() + new.len());
            result.push_str(&text[..start]);
            result.push_str(new);
            result.push_str(&text[start + old.len()..]);
            Ok(result)
        }
        None => Err(HistoryError::BadSubstitution),
    }
}
