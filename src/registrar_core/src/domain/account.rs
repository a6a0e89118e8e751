use std::collections::HashSet;
use std::fmt;

use secrecy::Secret;
use uuid::Uuid;

use super::{password::Password, role::Role};

/// Stable identity of an account, assigned when the candidate is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user identity record.
///
/// Callers build a candidate with [`Account::new`] (plaintext password,
/// inactive, no roles). Registration is the only code path that hashes the
/// password, activates the account and assigns its roles.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: String,
    email: String,
    password: Password,
    active: bool,
    roles: HashSet<Role>,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: Secret<String>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            username: username.into(),
            email: email.into(),
            password: Password::Plaintext(password),
            active: false,
            roles: HashSet::new(),
        }
    }

    /// Rebuild an account from persisted state.
    pub fn from_parts(
        id: AccountId,
        username: String,
        email: String,
        password: Password,
        active: bool,
        roles: HashSet<Role>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password,
            active,
            roles,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    pub fn set_password(&mut self, password: Password) {
        self.password = password;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Replace every assigned role.
    pub fn set_roles(&mut self, roles: impl IntoIterator<Item = Role>) {
        self.roles = roles.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Account {
        Account::new(
            "alice",
            "alice@example.com",
            Secret::new("secret123".to_string()),
        )
    }

    #[test]
    fn new_candidate_is_inactive_plaintext_and_roleless() {
        let account = candidate();

        assert!(!account.is_active());
        assert!(!account.password().is_hashed());
        assert!(account.roles().is_empty());
        assert_eq!(account.username(), "alice");
        assert_eq!(account.email(), "alice@example.com");
    }

    #[test]
    fn candidates_get_distinct_ids() {
        assert_ne!(candidate().id(), candidate().id());
    }

    #[test]
    fn set_roles_replaces_previous_assignment() {
        let mut account = candidate();
        account.set_roles([Role::new("ADMIN"), Role::new("USER")]);
        account.set_roles([Role::new("USER")]);

        assert_eq!(account.roles().len(), 1);
        assert!(account.roles().contains(&Role::new("USER")));
    }

    #[test]
    fn from_parts_keeps_identity() {
        let id = AccountId::new();
        let account = Account::from_parts(
            id,
            "bob".to_string(),
            "bob@example.com".to_string(),
            Password::hashed("digest"),
            true,
            HashSet::from([Role::new("USER")]),
        );

        assert_eq!(account.id(), id);
        assert!(account.is_active());
        assert!(account.password().is_hashed());
    }
}
