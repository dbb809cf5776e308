//! Java host adapter: exposes `.java` sources and their annotations through
//! the `beansec-api` host interface, reading them with tree-sitter-java.

pub mod model;
pub mod parser;
pub mod project;

pub use model::{JavaAnnotation, JavaCompilationUnit, JavaMethod, JavaType};
pub use parser::JavaSourceParser;
pub use project::{JavaProject, JavaProjectOptions};
