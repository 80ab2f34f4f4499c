//! Character class rules for Spanner resource identifiers.
//!
//! Database ids may contain `[a-z0-9_]`, instance ids `[a-z0-9-]`. Both must
//! start with a letter; database ids must not end with a digit.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Database,
    Instance,
}

impl Policy {
    /// Character that replaces anything the policy does not allow.
    pub fn separator(&self) -> char {
        match self {
            Policy::Database => '_',
            Policy::Instance => '-',
        }
    }

    /// Expects an already lowercased character.
    pub fn is_allowed(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == self.separator()
    }

    /// Characters stripped from the end of a sanitized name.
    pub fn is_trimmable(&self, c: char) -> bool {
        c == '_' || c == '-'
    }

    pub fn forbids_trailing_digit(&self) -> bool {
        matches!(self, Policy::Database)
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Database => write!(f, "database"),
            Policy::Instance => write!(f, "instance"),
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "database" | "db" => Ok(Policy::Database),
            "instance" => Ok(Policy::Instance),
            other => Err(anyhow::anyhow!("unknown resource kind: '{}'", other)),
        }
    }
}
