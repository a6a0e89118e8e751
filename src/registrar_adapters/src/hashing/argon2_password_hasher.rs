use argon2::{
    Algorithm, Argon2, Params, PasswordHash, Version,
    password_hash::{PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core},
};
use registrar_core::{PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSettings;

/// Argon2id (v0x13) hasher producing PHC strings with a random salt.
///
/// Hashing is CPU bound, so it runs on the blocking pool inside the
/// caller's tracing span.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordHasherError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn from_settings(settings: &HashingSettings) -> Result<Self, PasswordHasherError> {
        Self::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
        )
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Check `password_candidate` against a PHC string produced by `encode`.
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    pub async fn verify(
        &self,
        expected_password_hash: &Secret<String>,
        password_candidate: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let expected_password_hash = expected_password_hash.clone();
        let password_candidate = password_candidate.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| -> Result<bool, PasswordHasherError> {
                let expected_password_hash: PasswordHash<'_> =
                    PasswordHash::new(expected_password_hash.expose_secret())
                        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

                Ok(hasher
                    .verify_password(
                        password_candidate.expose_secret().as_bytes(),
                        &expected_password_hash,
                    )
                    .is_ok())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn encode(
        &self,
        plaintext: &Secret<String>,
    ) -> Result<Secret<String>, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let plaintext = plaintext.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(plaintext.expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::new(h.to_string()))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}
