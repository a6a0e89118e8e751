pub mod account_availability;
pub mod delete_account;
pub mod register_account;

// Re-export for convenience
pub use account_availability::AccountAvailabilityUseCase;
pub use delete_account::{DeleteAccountError, DeleteAccountUseCase};
pub use register_account::{
    ConfigurationError, DuplicateAccount, RegisterAccountError, RegisterAccountUseCase,
};
