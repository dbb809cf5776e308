use std::path::PathBuf;

/// The host could not complete an annotation or member lookup.
///
/// Always recovered locally by the generator: the failed query degrades to
/// "feature absent" and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectionError {
    #[error("Unreadable source {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
    #[error("No type declared in {0}")]
    NoTypeDeclared(String),
    #[error("Malformed annotation @{annotation} on {element}")]
    MalformedAnnotation { element: String, annotation: String },
    #[error("Cannot enumerate sources: {0}")]
    Enumeration(String),
    #[error("Introspection failed: {0}")]
    Other(String),
}

/// The document sink could not persist a finished model.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Invalid document target: {0}")]
    InvalidTarget(String),
}

pub type IntrospectionResult<T> = std::result::Result<T, IntrospectionError>;
