//! Serializable form of a [`SecurityModel`].
//!
//! Roles are stored once in `roles`; every other occurrence refers to a role
//! by name, which is unique within a model.

use beansec_api::models::{
    Archetype, Component, InvocationMode, Operation, RoleRef, SecurityModel, SecuritySpec,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityModelDocument {
    pub project: String,
    pub roles: Vec<String>,
    pub components: Vec<ComponentDocument>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocument {
    pub name: String,
    pub archetype: Archetype,
    pub security_specs: SecuritySpecDocument,
    pub operations: Vec<OperationDocument>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationDocument {
    pub signature: String,
    pub invocation_mode: InvocationMode,
    pub security_specs: SecuritySpecDocument,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySpecDocument {
    pub permit_all: bool,
    pub deny_all: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles_declared: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles_allowed: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as: Option<String>,
}

fn role_names(roles: &[RoleRef]) -> Vec<String> {
    roles.iter().map(|r| r.name.clone()).collect()
}

impl From<&SecuritySpec> for SecuritySpecDocument {
    fn from(spec: &SecuritySpec) -> Self {
        Self {
            permit_all: spec.permit_all,
            deny_all: spec.deny_all,
            roles_declared: role_names(&spec.roles_declared),
            roles_allowed: role_names(&spec.roles_allowed),
            run_as: spec.run_as.as_ref().map(|r| r.name.clone()),
        }
    }
}

impl From<&Operation> for OperationDocument {
    fn from(op: &Operation) -> Self {
        Self {
            signature: op.signature.name.clone(),
            invocation_mode: op.invocation_mode,
            security_specs: (&op.security).into(),
        }
    }
}

impl From<&Component> for ComponentDocument {
    fn from(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            archetype: component.archetype,
            security_specs: (&component.security).into(),
            operations: component.operations.iter().map(Into::into).collect(),
        }
    }
}

impl From<&SecurityModel> for SecurityModelDocument {
    fn from(model: &SecurityModel) -> Self {
        Self {
            project: model.project.clone(),
            roles: role_names(&model.roles),
            components: model.components.iter().map(Into::into).collect(),
        }
    }
}

pub fn document_schema() -> schemars::Schema {
    schemars::schema_for!(SecurityModelDocument)
}
