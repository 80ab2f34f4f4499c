//! Spanner resource name sanitization.
//!
//! Turns an arbitrary base name into one that satisfies a [`Policy`]:
//! lowercase, only allowed characters, starts with a letter, no trailing
//! separators and, for databases, no trailing digit.

use tracing::debug;

use crate::error::{self, InvalidNameError};
use crate::letters::LetterSource;
use crate::policy::Policy;

/// Sanitize `base` according to `policy`.
pub fn sanitize(
    base: &str,
    policy: Policy,
    letters: &dyn LetterSource,
) -> error::Result<String> {
    sanitize_truncated(base, policy, None, letters)
}

/// Same as [`sanitize`], but keeps at most `max_len` characters of the
/// mapped name before trailing separators are trimmed.
pub fn sanitize_truncated(
    base: &str,
    policy: Policy,
    max_len: Option<usize>,
    letters: &dyn LetterSource,
) -> error::Result<String> {
    if base.is_empty() {
        return Err(InvalidNameError::Empty);
    }

    let mut chars: Vec<char> = base.chars().map(|c| map_char(c, policy)).collect();

    if let Some(max_len) = max_len {
        chars.truncate(max_len);
    }

    trim_trailing(&mut chars, policy);

    if !chars.iter().any(|c| c.is_ascii_alphanumeric()) {
        return Err(InvalidNameError::NoAlphanumeric {
            base: base.to_string(),
        });
    }

    fix_first_char(&mut chars, letters);
    if policy.forbids_trailing_digit() {
        fix_last_char(&mut chars, letters);
    }

    Ok(chars.into_iter().collect())
}

fn map_char(c: char, policy: Policy) -> char {
    let c = c.to_ascii_lowercase();
    if policy.is_allowed(c) {
        c
    } else {
        policy.separator()
    }
}

fn trim_trailing(chars: &mut Vec<char>, policy: Policy) {
    while chars.last().is_some_and(|c| policy.is_trimmable(*c)) {
        chars.pop();
    }
}

fn fix_first_char(chars: &mut [char], letters: &dyn LetterSource) {
    if let Some(first) = chars.first_mut() {
        if !first.is_ascii_lowercase() {
            let replacement = letters.letter();
            debug!("replacing leading '{}' with '{}'", first, replacement);
            *first = replacement;
        }
    }
}

fn fix_last_char(chars: &mut [char], letters: &dyn LetterSource) {
    if let Some(last) = chars.last_mut() {
        if last.is_ascii_digit() {
            let replacement = letters.letter();
            debug!("replacing trailing '{}' with '{}'", last, replacement);
            *last = replacement;
        }
    }
}
