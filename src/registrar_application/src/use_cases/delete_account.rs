use registrar_core::{Account, AccountStore, AccountStoreError};

/// Error types for delete account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Delete account use case - removes an account without further checks
pub struct DeleteAccountUseCase<'a, A>
where
    A: AccountStore,
{
    account_store: &'a A,
}

impl<'a, A> DeleteAccountUseCase<'a, A>
where
    A: AccountStore,
{
    pub fn new(account_store: &'a A) -> Self {
        Self { account_store }
    }

    /// Execute the delete account use case
    ///
    /// # Arguments
    /// * `account` - Account to remove; matched by id
    ///
    /// # Returns
    /// Ok(()) on success, or DeleteAccountError
    #[tracing::instrument(
        name = "DeleteAccountUseCase::execute",
        skip_all,
        fields(account_id = %account.id())
    )]
    pub async fn execute(&self, account: &Account) -> Result<(), DeleteAccountError> {
        self.account_store.delete(account).await?;

        tracing::info!("Account deleted");
        Ok(())
    }
}
