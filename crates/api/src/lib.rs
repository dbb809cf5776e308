pub mod annotation;
pub mod error;
pub mod host;
pub mod models;
pub mod sink;

pub use annotation::{Annotation, AnnotationValue, Marker};
pub use error::{IntrospectionError, IntrospectionResult, WriteError};
pub use host::{AnnotatedElement, CompilationUnit, ProjectModel, SourceType};
pub use models::*;
pub use sink::{DocumentSink, DocumentTarget};
