//! # Registrar - Account Registration Library
//!
//! This is a facade crate that re-exports all public APIs from the registrar components.
//! Use this crate to get access to account registration in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! registrar = { path = "../registrar" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Password`, `Role`, `Violations`
//! - **Ports**: `AccountStore`, `RoleStore`, `PasswordHasher`, `AccountValidator`
//! - **Use cases**: `RegisterAccountUseCase`, `DeleteAccountUseCase`, `AccountAvailabilityUseCase`
//! - **Adapters**: `PostgresAccountStore`, `HashMapAccountStore`, `Argon2PasswordHasher`,
//!   `ConstraintValidator`
//! - **Service**: `AccountService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and ports
pub mod core {
    pub use registrar_core::*;
}

// Re-export most commonly used core types at the root level
pub use registrar_core::{Account, AccountId, DEFAULT_ROLE, Password, Role, Violation, Violations};

// Re-export port traits at root level
pub use registrar_core::{
    AccountStore, AccountStoreError, AccountValidator, PasswordHasher, PasswordHasherError,
    RoleStore, RoleStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use registrar_application::*;
}

pub use registrar_application::{
    AccountAvailabilityUseCase, ConfigurationError, DeleteAccountError, DeleteAccountUseCase,
    DuplicateAccount, RegisterAccountError, RegisterAccountUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use registrar_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use registrar_adapters::hashing::*;
    }

    /// Field validation
    pub mod validation {
        pub use registrar_adapters::validation::*;
    }

    /// Configuration
    pub mod config {
        pub use registrar_adapters::config::*;
    }
}

pub use registrar_adapters::{
    config::RegistrarSettings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapAccountStore, HashMapRoleStore, PostgresAccountStore, PostgresRoleStore},
    validation::ConstraintValidator,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

pub use registrar_service::{
    AccountService, InMemoryAccountService, PostgresAccountService, StartupError,
    configure_postgresql, telemetry::init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
