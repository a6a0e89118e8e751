use registrar_core::{
    Account, AccountStore, AccountStoreError, AccountValidator, DEFAULT_ROLE, Password,
    PasswordHasher, PasswordHasherError, RoleStore, RoleStoreError, Violations,
};

/// An identifying field already belongs to a registered account.
#[derive(Debug, thiserror::Error)]
pub enum DuplicateAccount {
    #[error("The username {0} is already taken")]
    Username(String),
    #[error("A user with the email address {0} already exists")]
    Email(String),
}

/// Reference data the workflow depends on is missing. Points at a
/// deployment or seeding defect, not at the user's input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("The default user role {0} could not be found")]
    DefaultRoleMissing(String),
}

/// Error types for register account use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterAccountError {
    #[error("Invalid account: {0}")]
    Validation(Violations),
    #[error(transparent)]
    Duplicate(#[from] DuplicateAccount),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Role store error: {0}")]
    RoleStoreError(#[from] RoleStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl RegisterAccountError {
    /// Whether the end user can fix this by changing their input.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate(_))
    }
}

/// Register account use case - validates a candidate, enforces uniqueness,
/// hashes its password, activates it and assigns the default role before
/// saving it
pub struct RegisterAccountUseCase<'a, A, R, H, V>
where
    A: AccountStore,
    R: RoleStore,
    H: PasswordHasher,
    V: AccountValidator,
{
    account_store: &'a A,
    role_store: &'a R,
    password_hasher: &'a H,
    validator: &'a V,
    default_role: String,
}

impl<'a, A, R, H, V> RegisterAccountUseCase<'a, A, R, H, V>
where
    A: AccountStore,
    R: RoleStore,
    H: PasswordHasher,
    V: AccountValidator,
{
    pub fn new(
        account_store: &'a A,
        role_store: &'a R,
        password_hasher: &'a H,
        validator: &'a V,
    ) -> Self {
        Self {
            account_store,
            role_store,
            password_hasher,
            validator,
            default_role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Assign `role` instead of [`DEFAULT_ROLE`] to new accounts.
    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }

    /// Execute the register account use case
    ///
    /// The steps run in a fixed order and stop at the first failure:
    /// field validation, username lookup, email lookup, password hashing,
    /// activation, default role lookup, save. On success `candidate` holds
    /// the stored state (hashed password, active, default role).
    ///
    /// # Arguments
    /// * `candidate` - Account built with a plaintext password
    ///
    /// # Returns
    /// Ok(()) on success, or RegisterAccountError
    #[tracing::instrument(
        name = "RegisterAccountUseCase::execute",
        skip_all,
        fields(username = %candidate.username())
    )]
    pub async fn execute(&self, candidate: &mut Account) -> Result<(), RegisterAccountError> {
        let violations = self.validator.validate(candidate);
        if !violations.is_empty() {
            tracing::debug!(%violations, "Candidate account failed validation");
            return Err(RegisterAccountError::Validation(violations));
        }

        let Password::Plaintext(plaintext) = candidate.password() else {
            tracing::debug!("Candidate password is already hashed");
            let mut violations = Violations::new();
            violations.push("password", "must be submitted in plaintext");
            return Err(RegisterAccountError::Validation(violations));
        };

        if self
            .account_store
            .find_by_username(candidate.username())
            .await?
            .is_some()
        {
            tracing::warn!("Username already registered");
            return Err(DuplicateAccount::Username(candidate.username().to_string()).into());
        }

        if self
            .account_store
            .find_by_email(candidate.email())
            .await?
            .is_some()
        {
            tracing::warn!("Email already registered");
            return Err(DuplicateAccount::Email(candidate.email().to_string()).into());
        }

        // Work on a copy so a failed attempt leaves `candidate` untouched and
        // safe to retry.
        let mut account = candidate.clone();
        let hash = self.password_hasher.encode(plaintext).await?;
        account.set_password(Password::Hashed(hash));
        account.activate();

        let Some(role) = self.role_store.find_by_name(&self.default_role).await? else {
            tracing::error!(role = %self.default_role, "Default role is not seeded");
            return Err(ConfigurationError::DefaultRoleMissing(self.default_role.clone()).into());
        };
        account.set_roles([role]);

        // The store's own uniqueness constraint catches registrations that
        // raced past the lookups above.
        match self.account_store.save(&account).await {
            Ok(()) => {}
            Err(AccountStoreError::UsernameTaken) => {
                return Err(DuplicateAccount::Username(account.username().to_string()).into());
            }
            Err(AccountStoreError::EmailTaken) => {
                return Err(DuplicateAccount::Email(account.email().to_string()).into());
            }
            Err(e) => return Err(e.into()),
        }

        *candidate = account;
        tracing::info!(account_id = %candidate.id(), "Account registered");
        Ok(())
    }
}
