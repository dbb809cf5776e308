use crate::error::{BeansecError, Result};
use crate::target::document_target;
use beansec_api::sink::DocumentTarget;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "beansec.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output root, relative to the home directory.
    pub output_root: PathBuf,
    /// Overrides the user home used for the document target.
    pub home_dir: Option<PathBuf>,
    /// Source roots relative to the project directory.
    pub source_roots: Vec<PathBuf>,
    pub include_constructors: bool,
    pub pretty: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("SecurityModels"),
            home_dir: None,
            source_roots: vec![PathBuf::from("src/main/java"), PathBuf::from("src")],
            include_constructors: true,
            pretty: true,
        }
    }
}

impl GeneratorConfig {
    /// Reads `beansec.json` from the project directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_for_project(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| BeansecError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn home(&self) -> Result<PathBuf> {
        self.home_dir
            .clone()
            .or_else(dirs::home_dir)
            .ok_or_else(|| BeansecError::Config("cannot determine home directory".to_string()))
    }

    pub fn document_target(&self, project_name: &str) -> Result<DocumentTarget> {
        Ok(document_target(&self.home()?, &self.output_root, project_name)?)
    }
}
