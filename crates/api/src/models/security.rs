use super::role::RoleRef;

/// Access-control declarations attached to a component or an operation.
///
/// `permit_all`, `deny_all` and `roles_allowed` may all be set at once; such
/// conflicts are kept verbatim. `roles_declared` and `run_as` are only ever
/// populated at component level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecuritySpec {
    pub permit_all: bool,
    pub deny_all: bool,
    pub roles_declared: Vec<RoleRef>,
    pub roles_allowed: Vec<RoleRef>,
    pub run_as: Option<RoleRef>,
}

impl SecuritySpec {
    /// Every role this spec references, in field order.
    pub fn referenced_roles(&self) -> impl Iterator<Item = &RoleRef> {
        self.roles_declared
            .iter()
            .chain(self.roles_allowed.iter())
            .chain(self.run_as.iter())
    }

    pub fn is_unrestricted(&self) -> bool {
        !self.permit_all
            && !self.deny_all
            && self.roles_declared.is_empty()
            && self.roles_allowed.is_empty()
            && self.run_as.is_none()
    }
}
