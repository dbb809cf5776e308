use beansec_core::config::GeneratorConfig;
use beansec_core::writer::JsonDocumentWriter;
use beansec_core::{Generation, GenerationOutcome, ModelGenerator};
use beansec_java::{JavaProject, JavaProjectOptions};
use std::path::Path;

pub use beansec_core::Result;

/// Opens the Java project at `path` with the source layout from `config`.
pub fn open_java_project(path: &Path, config: &GeneratorConfig) -> Result<JavaProject> {
    let options = JavaProjectOptions {
        source_roots: config.source_roots.clone(),
        include_constructors: config.include_constructors,
    };
    Ok(JavaProject::open(path, &options)?)
}

/// Generates the model of the project at `path` without persisting it.
pub fn generate_in_memory(path: &Path, config: &GeneratorConfig) -> Result<Generation> {
    let project = open_java_project(path, config)?;
    Ok(ModelGenerator::new().generate_detailed(&project))
}

/// Generates the model of the project at `path` and writes it to the
/// configured document target.
pub fn generate_project(path: &Path, config: &GeneratorConfig) -> Result<GenerationOutcome> {
    let project = open_java_project(path, config)?;
    let target = config.document_target(&project.name)?;
    tracing::info!("Document target: {}", target.uri);

    let writer = JsonDocumentWriter::new(config.pretty);
    Ok(ModelGenerator::new().generate_and_write(&project, &writer, target))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(beansec_core::logging::init_logging(component, to_stderr))
}
