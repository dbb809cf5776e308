use beansec_api::models::{Role, RoleRef};
use indexmap::IndexMap;
use std::sync::Arc;

/// Per-run table handing out one shared [`Role`] per distinct name.
///
/// Roles are only ever added. Keyed by name, which is currently a role's
/// only attribute.
#[derive(Debug, Default)]
pub struct RoleRegistry {
    roles: IndexMap<String, RoleRef>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the role recorded under `name`, creating it on first sighting.
    pub fn resolve(&mut self, name: &str) -> RoleRef {
        if let Some(existing) = self.roles.get(name) {
            return Arc::clone(existing);
        }
        let role = Arc::new(Role::new(name));
        self.roles.insert(name.to_string(), Arc::clone(&role));
        role
    }

    pub fn get(&self, name: &str) -> Option<&RoleRef> {
        self.roles.get(name)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Consumes the registry, yielding roles in first-sighting order.
    pub fn into_roles(self) -> Vec<RoleRef> {
        self.roles.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_resolves_to_same_instance() {
        let mut registry = RoleRegistry::new();
        let first = registry.resolve("manager");
        let second = registry.resolve("manager");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn roles_keep_first_sighting_order() {
        let mut registry = RoleRegistry::new();
        registry.resolve("auditor");
        registry.resolve("admin");
        registry.resolve("auditor");
        let names: Vec<_> = registry.into_roles().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["auditor", "admin"]);
    }

    #[test]
    fn lookup_is_exact() {
        let mut registry = RoleRegistry::new();
        registry.resolve("Admin");
        assert!(registry.get("admin").is_none());
        assert!(registry.get("Admin").is_some());
    }
}
