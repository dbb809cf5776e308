use beansec_api::error::WriteError;
use beansec_api::sink::DocumentTarget;
use std::path::Path;
use url::Url;

pub const DOCUMENT_STEM: &str = "SecurityModel";
pub const DOCUMENT_EXTENSION: &str = "json";

/// Builds `<home>/<output_root>/<project>/SecurityModel.json` and its
/// `file://` URI.
pub fn document_target(
    home: &Path,
    output_root: &Path,
    project: &str,
) -> Result<DocumentTarget, WriteError> {
    if output_root.is_absolute() {
        return Err(WriteError::InvalidTarget(format!(
            "output root must be relative to the home directory: {}",
            output_root.display()
        )));
    }
    let path = home
        .join(output_root)
        .join(project)
        .join(format!("{}.{}", DOCUMENT_STEM, DOCUMENT_EXTENSION));
    let uri = Url::from_file_path(&path).map_err(|_| {
        WriteError::InvalidTarget(format!("not an absolute path: {}", path.display()))
    })?;
    Ok(DocumentTarget {
        path,
        uri: uri.to_string(),
    })
}
