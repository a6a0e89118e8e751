use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use registrar_core::{DEFAULT_ROLE, Role, RoleStore, RoleStoreError};

#[derive(Default, Clone)]
pub struct HashMapRoleStore {
    roles: Arc<RwLock<HashMap<String, Role>>>,
}

impl HashMapRoleStore {
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_roles<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = names
            .into_iter()
            .map(|name| {
                let role = Role::new(name);
                (role.name().to_string(), role)
            })
            .collect();
        Self {
            roles: Arc::new(RwLock::new(roles)),
        }
    }

    /// Store seeded with [`DEFAULT_ROLE`] only.
    pub fn with_default_role() -> Self {
        Self::with_roles([DEFAULT_ROLE])
    }

    pub async fn add_role(&self, role: Role) {
        let mut roles = self.roles.write().await;
        roles.insert(role.name().to_string(), role);
    }
}

#[async_trait::async_trait]
impl RoleStore for HashMapRoleStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleStoreError> {
        let roles = self.roles.read().await;
        Ok(roles.get(name).cloned())
    }
}
