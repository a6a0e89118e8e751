use registrar_adapters::{
    config::RegistrarSettings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapAccountStore, HashMapRoleStore, PostgresAccountStore, PostgresRoleStore},
    validation::ConstraintValidator,
};
use registrar_application::{
    AccountAvailabilityUseCase, DeleteAccountError, DeleteAccountUseCase, RegisterAccountError,
    RegisterAccountUseCase,
};
use registrar_core::{
    Account, AccountStore, AccountStoreError, AccountValidator, DEFAULT_ROLE, PasswordHasher,
    RoleStore,
};

use crate::helpers::{StartupError, configure_postgresql};

/// Account service backed by PostgreSQL, Argon2id and the configured field
/// constraints.
pub type PostgresAccountService = AccountService<
    PostgresAccountStore,
    PostgresRoleStore,
    Argon2PasswordHasher,
    ConstraintValidator,
>;

/// Account service backed by in-memory stores, for tests and local runs.
pub type InMemoryAccountService = AccountService<
    HashMapAccountStore,
    HashMapRoleStore,
    Argon2PasswordHasher,
    ConstraintValidator,
>;

/// Entry point for account registration and removal.
///
/// Owns one of each collaborator and builds the use case for every call.
/// Collaborators are expected to be cheap to clone (stores share their
/// state internally), so the service itself can be cloned into handlers.
#[derive(Clone)]
pub struct AccountService<A, R, H, V> {
    account_store: A,
    role_store: R,
    password_hasher: H,
    validator: V,
    default_role: String,
}

impl<A, R, H, V> AccountService<A, R, H, V>
where
    A: AccountStore,
    R: RoleStore,
    H: PasswordHasher,
    V: AccountValidator,
{
    pub fn new(account_store: A, role_store: R, password_hasher: H, validator: V) -> Self {
        Self {
            account_store,
            role_store,
            password_hasher,
            validator,
            default_role: DEFAULT_ROLE.to_string(),
        }
    }

    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }

    /// Validate, check uniqueness, hash, activate, assign the default role
    /// and save. `candidate` reflects the stored state on success.
    pub async fn register(&self, candidate: &mut Account) -> Result<(), RegisterAccountError> {
        RegisterAccountUseCase::new(
            &self.account_store,
            &self.role_store,
            &self.password_hasher,
            &self.validator,
        )
        .with_default_role(self.default_role.as_str())
        .execute(candidate)
        .await
    }

    pub async fn delete(&self, account: &Account) -> Result<(), DeleteAccountError> {
        DeleteAccountUseCase::new(&self.account_store)
            .execute(account)
            .await
    }

    pub async fn username_is_in_use(&self, username: &str) -> Result<bool, AccountStoreError> {
        AccountAvailabilityUseCase::new(&self.account_store)
            .username_is_in_use(username)
            .await
    }

    pub async fn username_is_not_in_use(&self, username: &str) -> Result<bool, AccountStoreError> {
        AccountAvailabilityUseCase::new(&self.account_store)
            .username_is_not_in_use(username)
            .await
    }

    pub async fn email_is_in_use(&self, email: &str) -> Result<bool, AccountStoreError> {
        AccountAvailabilityUseCase::new(&self.account_store)
            .email_is_in_use(email)
            .await
    }

    pub async fn email_is_not_in_use(&self, email: &str) -> Result<bool, AccountStoreError> {
        AccountAvailabilityUseCase::new(&self.account_store)
            .email_is_not_in_use(email)
            .await
    }

    pub fn account_store(&self) -> &A {
        &self.account_store
    }

    pub fn password_hasher(&self) -> &H {
        &self.password_hasher
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }
}

impl PostgresAccountService {
    /// Connect, migrate and wire every collaborator from `settings`.
    pub async fn from_settings(settings: &RegistrarSettings) -> Result<Self, StartupError> {
        let pool = configure_postgresql(&settings.postgres).await?;
        let password_hasher = Argon2PasswordHasher::from_settings(&settings.hashing)?;

        Ok(Self::new(
            PostgresAccountStore::new(pool.clone()),
            PostgresRoleStore::new(pool),
            password_hasher,
            ConstraintValidator::new(settings.validation.clone()),
        )
        .with_default_role(settings.registration.default_role.clone()))
    }
}

impl InMemoryAccountService {
    /// Empty account store and a role store seeded with [`DEFAULT_ROLE`],
    /// matching what the PostgreSQL migrations seed.
    pub fn in_memory(settings: &RegistrarSettings) -> Result<Self, StartupError> {
        let password_hasher = Argon2PasswordHasher::from_settings(&settings.hashing)?;

        Ok(Self::new(
            HashMapAccountStore::new(),
            HashMapRoleStore::with_default_role(),
            password_hasher,
            ConstraintValidator::new(settings.validation.clone()),
        )
        .with_default_role(settings.registration.default_role.clone()))
    }
}
