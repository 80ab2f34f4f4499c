use std::sync::LazyLock;

use regex::Regex;

static DATABASE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]([a-z0-9_]*[a-z])?$").expect("valid regex"));

static INSTANCE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]([a-z0-9-]*[a-z0-9])?$").expect("valid regex"));

/// Whether `id` could have been produced by database id sanitization.
pub fn is_valid_database_id(id: &str) -> bool {
    DATABASE_ID_RE.is_match(id)
}

/// Whether `id` is a well formed instance id no longer than `max_length`.
pub fn is_valid_instance_id(id: &str, max_length: usize) -> bool {
    id.len() <= max_length && INSTANCE_ID_RE.is_match(id)
}
