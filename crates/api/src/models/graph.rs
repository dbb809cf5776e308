use super::component::Component;
use super::role::RoleRef;

/// The finished object graph of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityModel {
    pub project: String,
    pub components: Vec<Component>,
    /// Every role resolved during the run, in first-sighting order.
    pub roles: Vec<RoleRef>,
}

impl SecurityModel {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn roles(&self) -> &[RoleRef] {
        &self.roles
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn role(&self, name: &str) -> Option<&RoleRef> {
        self.roles.iter().find(|r| r.name == name)
    }
}
