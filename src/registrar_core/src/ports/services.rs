use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{account::Account, violation::Violations};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn encode(
        &self,
        plaintext: &Secret<String>,
    ) -> Result<Secret<String>, PasswordHasherError>;
}

/// Port trait for field-level constraint checking.
///
/// Returns every failed constraint; an empty result means the account is
/// structurally valid. Uniqueness is not a field constraint and is checked
/// elsewhere.
pub trait AccountValidator: Send + Sync {
    fn validate(&self, account: &Account) -> Violations;
}
