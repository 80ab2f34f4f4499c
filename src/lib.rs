use std::sync::LazyLock;

pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod letters;
pub mod logs;
pub mod policy;
pub mod sanitize;
pub mod suffix;
pub mod validate;

pub use error::InvalidNameError;
pub use generator::IdGenerator;
pub use policy::Policy;

static DEFAULT_GENERATOR: LazyLock<IdGenerator> = LazyLock::new(IdGenerator::new);

/// Spanner database id for `base`, e.g. `Test-Database` -> `test_database`.
pub fn generate_database_id(base: &str) -> Result<String, InvalidNameError> {
    DEFAULT_GENERATOR.database_id(base)
}

/// Spanner instance id for `base`, e.g. `0-test` -> `x-test-20240305-070809-000042`.
pub fn generate_instance_id(base: &str) -> Result<String, InvalidNameError> {
    DEFAULT_GENERATOR.instance_id(base)
}
