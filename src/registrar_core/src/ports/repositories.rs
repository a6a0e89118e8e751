use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, role::Role};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Email already taken")]
    EmailTaken,
    #[error("Refusing to store an account with a plaintext password")]
    PlaintextPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UsernameTaken, Self::UsernameTaken)
                | (Self::EmailTaken, Self::EmailTaken)
                | (Self::PlaintextPassword, Self::PlaintextPassword)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for accounts.
///
/// Implementations must enforce username and email uniqueness on `save`
/// themselves (reporting [`AccountStoreError::UsernameTaken`] or
/// [`AccountStoreError::EmailTaken`]); lookups done before a save can race
/// with a concurrent registration.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError>;
    /// Insert the account, or replace the stored account with the same id.
    async fn save(&self, account: &Account) -> Result<(), AccountStoreError>;
    /// Remove the account with the same id. Absent accounts are not an error.
    async fn delete(&self, account: &Account) -> Result<(), AccountStoreError>;
}

// RoleStore port trait and errors
#[derive(Debug, Error)]
pub enum RoleStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleStoreError>;
}
