//! The interface consumed from the host project model.
//!
//! Implemented by language adapters (see `beansec-java`) and by in-memory
//! fakes in tests. Every lookup may fail with an [`IntrospectionError`].

use crate::annotation::{Annotation, Marker};
use crate::error::IntrospectionResult;

/// A class or method whose annotations can be queried by written name.
pub trait AnnotatedElement {
    /// Declared simple name (a method name is reported verbatim).
    fn element_name(&self) -> &str;

    /// Looks up an annotation by one exact spelling.
    fn annotation(&self, name: &str) -> IntrospectionResult<Option<Annotation>>;

    /// Looks up a marker under any of its accepted spellings, in table order.
    fn marker(&self, marker: Marker) -> IntrospectionResult<Option<Annotation>> {
        for spelling in marker.spellings() {
            if let Some(found) = self.annotation(spelling)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

/// The first type declared in a compilation unit.
pub trait SourceType: AnnotatedElement {
    /// Declared methods in declaration order.
    fn methods(&self) -> IntrospectionResult<Vec<&dyn AnnotatedElement>>;
}

/// One source file.
pub trait CompilationUnit {
    /// File name including its extension, e.g. `OrderService.java`.
    fn element_name(&self) -> &str;

    fn first_type(&self) -> IntrospectionResult<&dyn SourceType>;
}

/// A project exposing its source compilation units.
pub trait ProjectModel {
    fn name(&self) -> &str;

    /// All compilation units across the project's source roots.
    fn compilation_units(&self) -> IntrospectionResult<Vec<&dyn CompilationUnit>>;
}
