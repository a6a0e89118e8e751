use config::{
    Config, ConfigError, Environment, File, FileFormat,
    builder::{ConfigBuilder, DefaultState},
};
use registrar_core::DEFAULT_ROLE;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR, defaults};

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrarSettings {
    pub postgres: PostgresSettings,
    pub registration: RegistrationSettings,
    pub validation: ValidationSettings,
    pub hashing: HashingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationSettings {
    pub default_role: String,
}

/// Field constraints enforced by the constraint validator. Lengths count
/// characters, bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationSettings {
    pub username_min_length: u64,
    pub username_max_length: u64,
    pub password_min_length: u64,
    pub password_max_length: u64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            username_min_length: defaults::USERNAME_MIN_LENGTH,
            username_max_length: defaults::USERNAME_MAX_LENGTH,
            password_min_length: defaults::PASSWORD_MIN_LENGTH,
            password_max_length: defaults::PASSWORD_MAX_LENGTH,
        }
    }
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_kib: defaults::ARGON2_MEMORY_KIB,
            iterations: defaults::ARGON2_ITERATIONS,
            parallelism: defaults::ARGON2_PARALLELISM,
        }
    }
}

impl RegistrarSettings {
    /// Load settings from defaults, then `config/registrar.{json,...}` if
    /// present, then `REGISTRAR__*` environment variables (a `.env` file is
    /// read first).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults overridden by a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("postgres.url", defaults::DATABASE_URL)?
            .set_default("postgres.max_connections", defaults::MAX_CONNECTIONS)?
            .set_default("registration.default_role", DEFAULT_ROLE)?
            .set_default("validation.username_min_length", defaults::USERNAME_MIN_LENGTH)?
            .set_default("validation.username_max_length", defaults::USERNAME_MAX_LENGTH)?
            .set_default("validation.password_min_length", defaults::PASSWORD_MIN_LENGTH)?
            .set_default("validation.password_max_length", defaults::PASSWORD_MAX_LENGTH)?
            .set_default("hashing.memory_kib", defaults::ARGON2_MEMORY_KIB)?
            .set_default("hashing.iterations", defaults::ARGON2_ITERATIONS)?
            .set_default("hashing.parallelism", defaults::ARGON2_PARALLELISM)
    }
}
