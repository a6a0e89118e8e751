use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use registrar_core::{Account, AccountId, AccountStore, AccountStoreError};

#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username() == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email() == email).cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        if !account.password().is_hashed() {
            return Err(AccountStoreError::PlaintextPassword);
        }

        // Uniqueness is checked under the write lock so two saves cannot
        // both claim the same username or email.
        let mut accounts = self.accounts.write().await;
        for other in accounts.values().filter(|a| a.id() != account.id()) {
            if other.username() == account.username() {
                return Err(AccountStoreError::UsernameTaken);
            }
            if other.email() == account.email() {
                return Err(AccountStoreError::EmailTaken);
            }
        }
        accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn delete(&self, account: &Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts.remove(&account.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::internet::en::{FreeEmail, Username};
    use registrar_core::Password;
    use secrecy::Secret;

    fn stored_account(username: &str, email: &str) -> Account {
        let mut account = Account::new(username, email, Secret::new("secret123".to_string()));
        account.set_password(Password::hashed("$argon2id$stub"));
        account
    }

    fn fake_account() -> Account {
        let username: String = Username().fake();
        let email: String = FreeEmail().fake();
        stored_account(&username, &email)
    }

    #[tokio::test]
    async fn save_then_find_by_username_and_email() {
        let store = HashMapAccountStore::new();
        let account = fake_account();

        store.save(&account).await.unwrap();

        let by_name = store.find_by_username(account.username()).await.unwrap();
        let by_email = store.find_by_email(account.email()).await.unwrap();
        assert_eq!(by_name.map(|a| a.id()), Some(account.id()));
        assert_eq!(by_email.map(|a| a.id()), Some(account.id()));
    }

    #[tokio::test]
    async fn save_rejects_plaintext_password() {
        let store = HashMapAccountStore::new();
        let account = Account::new(
            "alice",
            "alice@example.com",
            Secret::new("secret123".to_string()),
        );

        let result = store.save(&account).await;

        assert_eq!(result, Err(AccountStoreError::PlaintextPassword));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn save_enforces_unique_username_and_email() {
        let store = HashMapAccountStore::new();
        store
            .save(&stored_account("alice", "alice@example.com"))
            .await
            .unwrap();

        let same_name = store
            .save(&stored_account("alice", "other@example.com"))
            .await;
        let same_email = store
            .save(&stored_account("bob", "alice@example.com"))
            .await;

        assert_eq!(same_name, Err(AccountStoreError::UsernameTaken));
        assert_eq!(same_email, Err(AccountStoreError::EmailTaken));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn save_replaces_account_with_same_id() {
        let store = HashMapAccountStore::new();
        let mut account = stored_account("alice", "alice@example.com");
        store.save(&account).await.unwrap();

        account.activate();
        store.save(&account).await.unwrap();

        let stored = store.find_by_username("alice").await.unwrap().unwrap();
        assert!(stored.is_active());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_account() {
        let store = HashMapAccountStore::new();
        let account = fake_account();
        store.save(&account).await.unwrap();

        store.delete(&account).await.unwrap();

        assert!(
            store
                .find_by_username(account.username())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn delete_missing_account_is_a_no_op() {
        let store = HashMapAccountStore::new();
        store.save(&fake_account()).await.unwrap();

        let result = store.delete(&fake_account()).await;

        assert!(result.is_ok());
        assert_eq!(store.len().await, 1);
    }
}
