use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    clock::{Clock, DynClock, SystemClock},
    config::Config,
    error::Result,
    letters::{DynLetterSource, LetterSource, RandomLetters},
    policy::Policy,
    sanitize::sanitize_truncated,
    suffix::time_suffix,
};

/// Generates Spanner instance and database ids.
///
/// Holds the letter source used for boundary substitutions and the clock
/// that feeds instance suffixes. Cheap to clone and safe to share.
#[derive(Clone)]
pub struct IdGenerator {
    letters: DynLetterSource,
    clock: DynClock,
    config: Config,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        Self::with_valid_config(Config::default())
    }

    /// Fails when `config` does not pass [`Config::validate`].
    pub fn from_config(config: Config) -> anyhow::Result<IdGenerator> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: Config) -> IdGenerator {
        Self {
            letters: Arc::new(RandomLetters::new()),
            clock: Arc::new(SystemClock::new()),
            config,
        }
    }

    pub fn with_letters(mut self, letters: impl LetterSource + 'static) -> Self {
        self.letters = Arc::new(letters);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sanitized database id, no suffix.
    pub fn database_id(&self, base: &str) -> Result<String> {
        let max_len = self.config.database.max_length;
        warn_if_truncated(base, max_len);

        let id = sanitize_truncated(base, Policy::Database, max_len, self.letters.as_ref())?;
        debug!("generated database id '{}' from '{}'", id, base);
        Ok(id)
    }

    /// Sanitized instance id followed by `-YYYYMMDD-HHMMSS-ffffff`.
    pub fn instance_id(&self, base: &str) -> Result<String> {
        let max_len = Some(self.config.instance.max_base_length());
        warn_if_truncated(base, max_len);

        let sanitized =
            sanitize_truncated(base, Policy::Instance, max_len, self.letters.as_ref())?;
        let id = format!("{}{}", sanitized, time_suffix(self.clock.now()));
        debug!("generated instance id '{}' from '{}'", id, base);
        Ok(id)
    }

    /// Dispatches to [`Self::database_id`] or [`Self::instance_id`].
    pub fn generate(&self, policy: Policy, base: &str) -> Result<String> {
        match policy {
            Policy::Database => self.database_id(base),
            Policy::Instance => self.instance_id(base),
        }
    }
}

fn warn_if_truncated(base: &str, max_len: Option<usize>) {
    if let Some(max_len) = max_len {
        let len = base.chars().count();
        if len > max_len {
            warn!(
                "base name '{}' is {} chars long, only the first {} are kept",
                base, len, max_len
            );
        }
    }
}
