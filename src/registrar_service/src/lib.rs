mod account_service;
mod helpers;
pub mod telemetry;

pub use account_service::{AccountService, InMemoryAccountService, PostgresAccountService};
pub use helpers::{StartupError, configure_postgresql, get_postgres_pool};
