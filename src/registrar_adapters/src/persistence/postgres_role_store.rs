use registrar_core::{Role, RoleStore, RoleStoreError};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresRoleStore {
    pool: PgPool,
}

impl PostgresRoleStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresRoleStore { pool }
    }
}

#[async_trait::async_trait]
impl RoleStore for PostgresRoleStore {
    #[tracing::instrument(name = "Finding role in PostgreSQL", skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleStoreError> {
        let role: Option<String> = sqlx::query_scalar("SELECT name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoleStoreError::UnexpectedError(e.to_string()))?;

        Ok(role.map(Role::new))
    }
}
