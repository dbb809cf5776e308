use crate::document::SecurityModelDocument;
use beansec_api::error::WriteError;
use beansec_api::models::SecurityModel;
use beansec_api::sink::{DocumentSink, DocumentTarget};
use std::fs;

/// Persists a model as a JSON [`SecurityModelDocument`].
#[derive(Debug, Clone, Copy)]
pub struct JsonDocumentWriter {
    pub pretty: bool,
}

impl Default for JsonDocumentWriter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonDocumentWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, model: &SecurityModel) -> Result<String, WriteError> {
        let document = SecurityModelDocument::from(model);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| WriteError::Serialize(e.to_string()))
    }
}

impl DocumentSink for JsonDocumentWriter {
    fn write(&self, model: &SecurityModel, target: &DocumentTarget) -> Result<(), WriteError> {
        let content = self.render(model)?;

        if let Some(parent) = target.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write a sibling file first so the target is replaced in one step.
        let tmp_path = target.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &target.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}
