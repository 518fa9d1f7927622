//! # Expansion Parser
//!
//! Scans a raw input line left to right, recognizes `^old^new` and
//! `!`-reference syntax, resolves references against the event store, and
//! assembles the fully expanded line. The scan is a deterministic single
//! pass with one character of lookahead; character classification decides
//! every branch, so no backtracking is needed. Any lookup or substitution
//! failure aborts the whole line.

use super::error::HistoryError;
use super::matcher;
use super::store::EventStore;
use super::substitute::substitute;

/// Result of expanding one raw input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The fully expanded line
    pub text: String,
    /// True iff at least one reference or substitution was resolved
    pub changed: bool,
}

/// Identifies which stored event a `!`-expansion targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRef {
    /// `!!` - the most recent event
    Last,
    /// `!n` - the event with exactly this number
    ByNumber(u64),
    /// `!str` - the most recent event starting with `str`
    ByPrefix(String),
    /// `!?str` - the most recent event containing `str`
    BySubstring(String),
}

/// Characters that form a prefix/substring search pattern after `!`
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// One `^old^new[^]` spec parsed out of `chars` (which starts with `^`)
///
/// The first `^` opens `old`, the second terminates it, and a third `^` or
/// end-of-input terminates `new`. Returns the spec and the number of
/// characters consumed, including a terminating `^` when present.
fn parse_caret_spec(chars: &[char]) -> (String, String, usize) {
    debug_assert_eq!(chars.first(), Some(&'^'));
    let mut i = 1;
    let mut old = String::new();
    while i < chars.len() && chars[i] != '^' {
        old.push(chars[i]);
        i += 1;
    }
    let mut new = String::new();
    if i < chars.len() {
        i += 1; // consume the old/new boundary
        while i < chars.len() && chars[i] != '^' {
            new.push(chars[i]);
            i += 1;
        }
        if i < chars.len() {
            i += 1; // consume the terminator
        }
    }
    (old, new, i)
}

fn resolve<'a>(store: &'a EventStore, reference: &EventRef) -> Result<&'a str, HistoryError> {
    match reference {
        EventRef::Last => matcher::last(store),
        EventRef::ByNumber(n) => matcher::by_number(store, *n),
        EventRef::ByPrefix(s) => matcher::by_prefix(store, s),
        EventRef::BySubstring(s) => matcher::by_substring(store, s),
    }
}

/// Expand all history references in `raw` against `store`
///
/// A line starting with `^` is one bare substitution against the last
/// event. Otherwise each `!` followed by an event specifier splices the
/// resolved event text (with up to one trailing `^old^new` applied to it,
/// and at most one further spec applied to the whole output built so far);
/// a `!` followed by anything else is literal. Errors discard the line.
pub fn expand(store: &EventStore, raw: &str) -> Result<Expansion, HistoryError> {
    // Bare substitution form: ^old^new against the last event. Everything
    // up to the second caret is old, the rest of the line is new.
    if let Some(rest) = raw.strip_prefix('^') {
        let (old, new) = match rest.find('^') {
            Some(pos) => (&rest[..pos], &rest[pos + 1..]),
            None => (rest, ""),
        };
        let base = matcher::last(store)?;
        let text = substitute(old, new, base)?;
        return Ok(Expansion { text, changed: true });
    }

    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut changed = false;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '!' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let reference = match chars.get(i + 1).copied() {
            Some('!') => {
                i += 2;
                EventRef::Last
            }
            Some(c) if c.is_ascii_digit() => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end].is_ascii_digit() {
                    end += 1;
                }
                let digits: String = chars[start..end].iter().collect();
                i = end;
                // A number too large for u64 certainly names no event
                EventRef::ByNumber(digits.parse().map_err(|_| HistoryError::NoSuchEvent)?)
            }
            Some('?') => {
                let start = i + 2;
                let mut end = start;
                while end < chars.len() && is_word_char(chars[end]) {
                    end += 1;
                }
                let pattern: String = chars[start..end].iter().collect();
                i = end;
                EventRef::BySubstring(pattern)
            }
            Some(c) if is_word_char(c) => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_word_char(chars[end]) {
                    end += 1;
                }
                let prefix: String = chars[start..end].iter().collect();
                i = end;
                EventRef::ByPrefix(prefix)
            }
            other => {
                // Literal '!': copy it together with the following character
                out.push('!');
                if let Some(c) = other {
                    out.push(c);
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }
        };

        let mut text = resolve(store, &reference)?.to_string();

        // Optional trailing substitution applied to the recalled text, then
        // at most one more spec applied to the whole output built so far.
        if chars.get(i) == Some(&'^') {
            let (old, new, consumed) = parse_caret_spec(&chars[i..]);
            text = substitute(&old, &new, &text)?;
            i += consumed;

            if chars.get(i) == Some(&'^') {
                let (old, new, consumed) = parse_caret_spec(&chars[i..]);
                let whole = format!("{out}{text}");
                out = substitute(&old, &new, &whole)?;
                text.clear();
                i += consumed;
            }
        }

        out.push_str(&text);
        changed = true;
    }

    Ok(Expansion { text: out, changed })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(lines: &[&str]) -> EventStore {
        let mut store = EventStore::new();
        for line in lines {
            store.append(line);
        }
        store
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let store = store_with(&["earlier"]);
        let expansion = expand(&store, "plain text").unwrap();
        assert_eq!(expansion.text, "plain text");
        assert!(!expansion.changed);
    }

    #[test]
    fn test_bang_bang_recalls_last() {
        let store = store_with(&["foo."]);
        let expansion = expand(&store, "!!").unwrap();
        assert_eq!(expansion.text, "foo.");
        assert!(expansion.changed);
    }

    #[test]
    fn test_bang_number() {
        let store = store_with(&["one", "two"]);
        assert_eq!(expand(&store, "!1").unwrap().text, "one");
        assert_eq!(expand(&store, "!2").unwrap().text, "two");
    }

    #[test]
    fn test_bang_number_absent_is_no_such_event() {
        let store = store_with(&["one"]);
        assert_eq!(expand(&store, "!7"), Err(HistoryError::NoSuchEvent));
    }

    #[test]
    fn test_prefix_match_prefers_newest() {
        let store = store_with(&["hello world", "help me"]);
        assert_eq!(expand(&store, "!hel").unwrap().text, "help me");
    }

    #[test]
    fn test_substring_match() {
        let store = store_with(&["hello world", "help me"]);
        assert_eq!(expand(&store, "!?world").unwrap().text, "hello world");
    }

    #[test]
    fn test_reference_splices_into_surrounding_text() {
        let store = store_with(&["bar"]);
        let expansion = expand(&store, "foo !! baz").unwrap();
        assert_eq!(expansion.text, "foo bar baz");
        assert!(expansion.changed);
    }

    #[test]
    fn test_pattern_stops_at_non_word_char() {
        let store = store_with(&["hello world"]);
        assert_eq!(expand(&store, "!hello, again").unwrap().text, "hello world, again");
    }

    #[test]
    fn test_literal_bang_before_other_char() {
        let store = store_with(&["earlier"]);
        let expansion = expand(&store, "a != b").unwrap();
        assert_eq!(expansion.text, "a != b");
        assert!(!expansion.changed);
    }

    #[test]
    fn test_trailing_bang_is_literal() {
        let store = store_with(&["earlier"]);
        let expansion = expand(&store, "wow!").unwrap();
        assert_eq!(expansion.text, "wow!");
        assert!(!expansion.changed);
    }

    #[test]
    fn test_bare_line_substitution() {
        let store = store_with(&["foo baz"]);
        let expansion = expand(&store, "^foo^bar").unwrap();
        assert_eq!(expansion.text, "bar baz");
        assert!(expansion.changed);
    }

    #[test]
    fn test_bare_substitution_new_takes_rest_of_line() {
        let store = store_with(&["a b"]);
        assert_eq!(expand(&store, "^b^x^y").unwrap().text, "a x^y");
    }

    #[test]
    fn test_bare_substitution_empty_old_prepends() {
        let store = store_with(&["abc"]);
        assert_eq!(expand(&store, "^^X").unwrap().text, "Xabc");
    }

    #[test]
    fn test_reference_with_trailing_substitution() {
        let store = store_with(&["foo baz"]);
        let expansion = expand(&store, "!!^foo^bar").unwrap();
        assert_eq!(expansion.text, "bar baz");
        assert!(expansion.changed);
    }

    #[test]
    fn test_numbered_reference_with_substitution() {
        let store = store_with(&["likes(mary, wine)", "other"]);
        assert_eq!(
            expand(&store, "!1^mary^john").unwrap().text,
            "likes(john, wine)"
        );
    }

    #[test]
    fn test_second_spec_applies_to_whole_output() {
        let store = store_with(&["foo baz"]);
        // First spec rewrites the recalled event, second one the whole line
        let expansion = expand(&store, "aa !!^foo^bar^aa^bb^").unwrap();
        assert_eq!(expansion.text, "bb bar baz");
    }

    #[test]
    fn test_substitution_without_match_is_bad_substitution() {
        let store = store_with(&["foo baz"]);
        assert_eq!(expand(&store, "!!^zap^bar"), Err(HistoryError::BadSubstitution));
        assert_eq!(expand(&store, "^zap^bar"), Err(HistoryError::BadSubstitution));
    }

    #[test]
    fn test_empty_store_reference_is_no_such_event() {
        let store = EventStore::new();
        assert_eq!(expand(&store, "!!"), Err(HistoryError::NoSuchEvent));
        assert_eq!(expand(&store, "!foo"), Err(HistoryError::NoSuchEvent));
        assert_eq!(expand(&store, "^a^b"), Err(HistoryError::NoSuchEvent));
    }

    #[test]
    fn test_multiple_references_in_one_line() {
        let store = store_with(&["alpha", "beta"]);
        assert_eq!(expand(&store, "!1 and !2").unwrap().text, "alpha and beta");
    }
}
