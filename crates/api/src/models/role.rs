use std::sync::Arc;

/// A named security principal.
///
/// Within one generation run a role name maps to exactly one instance; every
/// reference shares it through [`RoleRef`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Role {
    pub name: String,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shared, graph-lifetime reference to a [`Role`].
pub type RoleRef = Arc<Role>;
