use registrar_core::{AccountStore, AccountStoreError};

/// Availability queries for pre-flight checks such as live username
/// feedback. Registration repeats these checks itself; a `false` here is no
/// reservation.
pub struct AccountAvailabilityUseCase<'a, A>
where
    A: AccountStore,
{
    account_store: &'a A,
}

impl<'a, A> AccountAvailabilityUseCase<'a, A>
where
    A: AccountStore,
{
    pub fn new(account_store: &'a A) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "AccountAvailabilityUseCase::username_is_in_use", skip(self))]
    pub async fn username_is_in_use(&self, username: &str) -> Result<bool, AccountStoreError> {
        Ok(self
            .account_store
            .find_by_username(username)
            .await?
            .is_some())
    }

    pub async fn username_is_not_in_use(&self, username: &str) -> Result<bool, AccountStoreError> {
        self.username_is_in_use(username).await.map(|in_use| !in_use)
    }

    #[tracing::instrument(name = "AccountAvailabilityUseCase::email_is_in_use", skip(self))]
    pub async fn email_is_in_use(&self, email: &str) -> Result<bool, AccountStoreError> {
        Ok(self.account_store.find_by_email(email).await?.is_some())
    }

    pub async fn email_is_not_in_use(&self, email: &str) -> Result<bool, AccountStoreError> {
        self.email_is_in_use(email).await.map(|in_use| !in_use)
    }
}
