//! Hand-written port doubles shared by the use case tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use registrar_core::{
    Account, AccountId, AccountStore, AccountStoreError, AccountValidator, PasswordHasher,
    PasswordHasherError, Role, RoleStore, RoleStoreError, Violations,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn candidate(username: &str, email: &str, password: &str) -> Account {
    Account::new(username, email, Secret::new(password.to_string()))
}

#[derive(Default)]
pub struct MockAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
    lookups: AtomicUsize,
    saves: AtomicUsize,
    deletes: AtomicUsize,
    save_failure: Mutex<Option<AccountStoreError>>,
}

impl MockAccountStore {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts.into_iter().map(|a| (a.id(), a)).collect();
        Self {
            accounts: RwLock::new(accounts),
            ..Self::default()
        }
    }

    pub fn fail_next_save(&self, error: AccountStoreError) {
        *self.save_failure.lock().unwrap() = Some(error);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn get(&self, id: AccountId) -> Option<Account> {
        self.accounts.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username() == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email() == email).cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let failure = self.save_failure.lock().unwrap().take();
        if let Some(error) = failure {
            return Err(error);
        }
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn delete(&self, account: &Account) -> Result<(), AccountStoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.write().await;
        accounts.remove(&account.id());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockRoleStore {
    roles: Vec<Role>,
    lookups: AtomicUsize,
}

impl MockRoleStore {
    pub fn with_roles(names: &[&str]) -> Self {
        Self {
            roles: names.iter().map(|name| Role::new(*name)).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleStore for MockRoleStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.roles.iter().find(|r| r.name() == name).cloned())
    }
}

/// Reverses the plaintext behind a fixed prefix; enough to tell hashed from
/// plaintext in assertions.
#[derive(Default)]
pub struct MockPasswordHasher {
    calls: AtomicUsize,
    fail: bool,
}

impl MockPasswordHasher {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn encode(
        &self,
        plaintext: &Secret<String>,
    ) -> Result<Secret<String>, PasswordHasherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PasswordHasherError::UnexpectedError(
                "hasher unavailable".to_string(),
            ));
        }
        let reversed: String = plaintext.expose_secret().chars().rev().collect();
        Ok(Secret::new(format!("mock-hash${reversed}")))
    }
}

#[derive(Default)]
pub struct MockValidator {
    violations: Violations,
    calls: AtomicUsize,
}

impl MockValidator {
    pub fn rejecting(violations: Violations) -> Self {
        Self {
            violations,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AccountValidator for MockValidator {
    fn validate(&self, _account: &Account) -> Violations {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.violations.clone()
    }
}
