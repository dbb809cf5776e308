use crate::error::WriteError;
use crate::models::SecurityModel;
use std::path::PathBuf;

/// Where a finished model is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTarget {
    pub path: PathBuf,
    pub uri: String,
}

/// Accepts a finished model and a target. Owns format, encoding and atomicity.
pub trait DocumentSink {
    fn write(&self, model: &SecurityModel, target: &DocumentTarget) -> Result<(), WriteError>;
}
