use std::borrow::Cow;

use registrar_core::{Account, AccountValidator, Password, Violations};
use secrecy::ExposeSecret;
use validator::{ValidateEmail, ValidateLength, ValidationError, ValidationErrors};

use crate::config::ValidationSettings;

const USERNAME: &str = "username";
const EMAIL: &str = "email";
const PASSWORD: &str = "password";

/// Field checks driven by [`ValidationSettings`]:
///
/// * `username`: not blank, length within the configured bounds
/// * `email`: not blank, well-formed address
/// * `password`: length within the configured bounds (plaintext only;
///   a hashed password has nothing left to check)
#[derive(Debug, Clone, Default)]
pub struct ConstraintValidator {
    constraints: ValidationSettings,
}

impl ConstraintValidator {
    pub fn new(constraints: ValidationSettings) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &ValidationSettings {
        &self.constraints
    }

    fn check(&self, account: &Account) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let c = &self.constraints;

        let username = account.username().to_string();
        if username.trim().is_empty() {
            errors.add(USERNAME, blank());
        } else if !username.validate_length(
            Some(c.username_min_length),
            Some(c.username_max_length),
            None,
        ) {
            errors.add(
                USERNAME,
                length(c.username_min_length, c.username_max_length),
            );
        }

        let email = account.email().to_string();
        if email.trim().is_empty() {
            errors.add(EMAIL, blank());
        } else if !email.validate_email() {
            errors.add(
                EMAIL,
                ValidationError::new("email")
                    .with_message(Cow::Borrowed("must be a well-formed email address")),
            );
        }

        if let Password::Plaintext(password) = account.password() {
            if !password.expose_secret().validate_length(
                Some(c.password_min_length),
                Some(c.password_max_length),
                None,
            ) {
                errors.add(
                    PASSWORD,
                    length(c.password_min_length, c.password_max_length),
                );
            }
        }

        errors
    }
}

impl AccountValidator for ConstraintValidator {
    fn validate(&self, account: &Account) -> Violations {
        let errors = self.check(account);
        let field_errors = errors.field_errors();

        let mut violations = Violations::new();
        for field in [USERNAME, EMAIL, PASSWORD] {
            for issue in field_errors.get(field).into_iter().flat_map(|v| v.iter()) {
                violations.push(field, issue.to_string());
            }
        }
        violations
    }
}

fn blank() -> ValidationError {
    ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank"))
}

fn length(min: u64, max: u64) -> ValidationError {
    ValidationError::new("length")
        .with_message(Cow::Owned(format!("length must be between {min} and {max}")))
}
