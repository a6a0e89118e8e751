use std::collections::HashSet;

use registrar_core::{Account, AccountId, AccountStore, AccountStoreError, Password, Role};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

const USERNAME_CONSTRAINT: &str = "accounts_username_key";
const EMAIL_CONSTRAINT: &str = "accounts_email_key";

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }

    async fn find_one(
        &self,
        query: &'static str,
        value: &str,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Ok(None);
        };

        self.hydrate(row).await.map(Some)
    }

    async fn hydrate(&self, row: PgRow) -> Result<Account, AccountStoreError> {
        let id: Uuid = row.try_get("id").map_err(unexpected)?;
        let username: String = row.try_get("username").map_err(unexpected)?;
        let email: String = row.try_get("email").map_err(unexpected)?;
        let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;
        let active: bool = row.try_get("active").map_err(unexpected)?;

        let roles: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT role_name
                FROM account_roles
                WHERE account_id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(Account::from_parts(
            AccountId::from(id),
            username,
            email,
            Password::Hashed(Secret::new(password_hash)),
            active,
            roles.into_iter().map(Role::new).collect::<HashSet<_>>(),
        ))
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Finding account by username in PostgreSQL", skip_all)]
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountStoreError> {
        self.find_one(
            r#"
                SELECT id, username, email, password_hash, active
                FROM accounts
                WHERE username = $1
            "#,
            username,
        )
        .await
    }

    #[tracing::instrument(name = "Finding account by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        self.find_one(
            r#"
                SELECT id, username, email, password_hash, active
                FROM accounts
                WHERE email = $1
            "#,
            email,
        )
        .await
    }

    #[tracing::instrument(name = "Saving account to PostgreSQL", skip_all)]
    async fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        let Password::Hashed(password_hash) = account.password() else {
            return Err(AccountStoreError::PlaintextPassword);
        };
        let id = *account.id().as_uuid();

        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        sqlx::query(
            r#"
                INSERT INTO accounts (id, username, email, password_hash, active)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO UPDATE
                SET username = EXCLUDED.username,
                    email = EXCLUDED.email,
                    password_hash = EXCLUDED.password_hash,
                    active = EXCLUDED.active
            "#,
        )
        .bind(id)
        .bind(account.username())
        .bind(account.email())
        .bind(password_hash.expose_secret())
        .bind(account.is_active())
        .execute(&mut *tx)
        .await
        .map_err(map_constraint_violation)?;

        sqlx::query("DELETE FROM account_roles WHERE account_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;

        for role in account.roles() {
            sqlx::query("INSERT INTO account_roles (account_id, role_name) VALUES ($1, $2)")
                .bind(id)
                .bind(role.name())
                .execute(&mut *tx)
                .await
                .map_err(unexpected)?;
        }

        tx.commit().await.map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Deleting account from PostgreSQL", skip_all)]
    async fn delete(&self, account: &Account) -> Result<(), AccountStoreError> {
        // account_roles rows go with it through ON DELETE CASCADE
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(*account.id().as_uuid())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(())
    }
}

fn unexpected(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

fn map_constraint_violation(e: sqlx::Error) -> AccountStoreError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.constraint() {
            Some(USERNAME_CONSTRAINT) => return AccountStoreError::UsernameTaken,
            Some(EMAIL_CONSTRAINT) => return AccountStoreError::EmailTaken,
            _ => {}
        }
    }
    unexpected(e)
}
