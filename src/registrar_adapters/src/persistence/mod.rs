pub mod hashmap_account_store;
pub mod hashmap_role_store;
pub mod postgres_account_store;
pub mod postgres_role_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use hashmap_role_store::HashMapRoleStore;
pub use postgres_account_store::PostgresAccountStore;
pub use postgres_role_store::PostgresRoleStore;

/// Schema for the PostgreSQL stores, including the unique indexes on
/// username and email and the seeded default role.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
