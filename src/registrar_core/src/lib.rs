pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId},
    password::Password,
    role::{DEFAULT_ROLE, Role},
    violation::{Violation, Violations},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError, RoleStore, RoleStoreError},
    services::{AccountValidator, PasswordHasher, PasswordHasherError},
};
