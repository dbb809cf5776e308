use serde::{Deserialize, Serialize};

/// Canonical identifier of an annotation the generator understands.
///
/// Each marker is accepted under two spellings, the simple name and the
/// fully-qualified name, and both are treated as the same marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Stateless,
    Stateful,
    Singleton,
    MessageDriven,
    PermitAll,
    DenyAll,
    DeclareRoles,
    RolesAllowed,
    RunAs,
    Asynchronous,
}

impl Marker {
    /// Accepted spellings, queried in this order.
    pub fn spellings(self) -> [&'static str; 2] {
        match self {
            Marker::Stateless => ["Stateless", "javax.ejb.Stateless"],
            Marker::Stateful => ["Stateful", "javax.ejb.Stateful"],
            Marker::Singleton => ["Singleton", "javax.ejb.Singleton"],
            Marker::MessageDriven => ["MessageDriven", "javax.ejb.MessageDriven"],
            Marker::PermitAll => ["PermitAll", "javax.annotation.security.PermitAll"],
            Marker::DenyAll => ["DenyAll", "javax.annotation.security.DenyAll"],
            Marker::DeclareRoles => ["DeclareRoles", "javax.annotation.security.DeclareRoles"],
            Marker::RolesAllowed => ["RolesAllowed", "javax.annotation.security.RolesAllowed"],
            Marker::RunAs => ["RunAs", "javax.annotation.security.RunAs"],
            Marker::Asynchronous => ["Asynchronous", "javax.ejb.Asynchronous"],
        }
    }
}

/// The `value` member of an annotation: one string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Scalar(String),
    List(Vec<String>),
}

impl AnnotationValue {
    /// Normalizes both shapes to one ordered sequence.
    pub fn into_values(self) -> Vec<String> {
        match self {
            AnnotationValue::Scalar(s) => vec![s],
            AnnotationValue::List(values) => values,
        }
    }

    pub fn first(&self) -> Option<&str> {
        match self {
            AnnotationValue::Scalar(s) => Some(s),
            AnnotationValue::List(values) => values.first().map(String::as_str),
        }
    }
}

/// An annotation as reported by the host: its written name and, if present,
/// its `value` member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub value: Option<AnnotationValue>,
}

impl Annotation {
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: AnnotationValue) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    pub fn values(&self) -> Vec<String> {
        self.value.clone().map(AnnotationValue::into_values).unwrap_or_default()
    }
}
