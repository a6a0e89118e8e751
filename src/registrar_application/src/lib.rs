pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use use_cases::{
    AccountAvailabilityUseCase, ConfigurationError, DeleteAccountError, DeleteAccountUseCase,
    DuplicateAccount, RegisterAccountError, RegisterAccountUseCase,
};
