use crate::model::JavaCompilationUnit;
use crate::parser::JavaSourceParser;
use beansec_api::error::{IntrospectionError, IntrospectionResult};
use beansec_api::host::{CompilationUnit, ProjectModel};
use ignore::WalkBuilder;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JavaProjectOptions {
    /// Source roots relative to the project directory. When none exists the
    /// project directory itself is scanned.
    pub source_roots: Vec<PathBuf>,
    pub include_constructors: bool,
}

impl Default for JavaProjectOptions {
    fn default() -> Self {
        Self {
            source_roots: vec![PathBuf::from("src/main/java"), PathBuf::from("src")],
            include_constructors: true,
        }
    }
}

/// A Java project read from disk: every `.java` file under its source roots.
pub struct JavaProject {
    pub name: String,
    pub root: PathBuf,
    pub units: Vec<JavaCompilationUnit>,
}

impl JavaProject {
    pub fn open(root: &Path, options: &JavaProjectOptions) -> IntrospectionResult<Self> {
        if !root.is_dir() {
            return Err(IntrospectionError::Enumeration(format!(
                "not a directory: {}",
                root.display()
            )));
        }
        let name = root
            .canonicalize()
            .unwrap_or_else(|_| root.to_path_buf())
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string();

        let parser = JavaSourceParser::new(options.include_constructors);
        let units = Self::source_roots(root, &options.source_roots)
            .iter()
            .flat_map(|source_root| collect_java_files(source_root))
            .map(|path| read_unit(&parser, &path))
            .collect::<Vec<_>>();

        info!("Opened project {} with {} compilation units", name, units.len());
        Ok(Self {
            name,
            root: root.to_path_buf(),
            units,
        })
    }

    /// Existing configured roots, without roots nested inside another one.
    fn source_roots(root: &Path, configured: &[PathBuf]) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = configured
            .iter()
            .map(|r| root.join(r))
            .filter(|r| r.is_dir())
            .collect();
        roots.sort();
        roots.dedup();
        let nested: Vec<PathBuf> = roots
            .iter()
            .filter(|r| roots.iter().any(|other| other != *r && r.starts_with(other)))
            .cloned()
            .collect();
        roots.retain(|r| !nested.contains(r));

        if roots.is_empty() {
            debug!("No source roots under {}, scanning it whole", root.display());
            roots.push(root.to_path_buf());
        }
        roots
    }
}

fn collect_java_files(source_root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkBuilder::new(source_root)
        .build()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            let is_java = path.extension().and_then(|e| e.to_str()) == Some("java");
            (path.is_file() && is_java).then(|| path.to_path_buf())
        })
        .collect();
    paths.sort();
    paths
}

/// Reads and parses one source file. Bytes that are not UTF-8 (legacy
/// ISO-8859-1 or Cp1252 sources) are replaced rather than failing the unit.
fn read_unit(parser: &JavaSourceParser, path: &Path) -> JavaCompilationUnit {
    match fs::read(path) {
        Ok(bytes) => {
            let source = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = source {
                debug!("{} is not valid UTF-8, decoded lossily", path.display());
            }
            parser.parse_unit(path, &source)
        }
        Err(e) => {
            let reason = e.to_string();
            debug!("Cannot read {}: {}", path.display(), reason);
            JavaCompilationUnit {
                path: path.to_path_buf(),
                element_name: path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string(),
                first_type: Err(IntrospectionError::Unreadable {
                    path: path.to_path_buf(),
                    reason,
                }),
            }
        }
    }
}

impl ProjectModel for JavaProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn compilation_units(&self) -> IntrospectionResult<Vec<&dyn CompilationUnit>> {
        Ok(self
            .units
            .iter()
            .map(|u| u as &dyn CompilationUnit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beansec_api::annotation::Marker;
    use beansec_api::host::AnnotatedElement;

    #[test]
    fn missing_file_becomes_unreadable_unit() {
        let dir = tempfile::tempdir().unwrap();
        let unit = read_unit(&JavaSourceParser::default(), &dir.path().join("Gone.java"));
        assert_eq!(unit.element_name, "Gone.java");
        assert!(matches!(
            unit.first_type(),
            Err(IntrospectionError::Unreadable { .. })
        ));
    }

    #[test]
    fn latin1_source_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cafe.java");
        let mut bytes = b"// Caf".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"\n@Stateless public class Cafe { void m() {} }");
        fs::write(&path, bytes).unwrap();

        let unit = read_unit(&JavaSourceParser::default(), &path);
        let ty = unit.first_type().unwrap();
        assert_eq!(ty.element_name(), "Cafe");
        assert!(ty.marker(Marker::Stateless).unwrap().is_some());
    }
}
