use beansec_api::annotation::{Annotation, AnnotationValue};
use beansec_api::error::{IntrospectionError, IntrospectionResult};
use beansec_api::host::{AnnotatedElement, CompilationUnit, SourceType};
use std::path::PathBuf;

/// An annotation as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaAnnotation {
    /// Written spelling with whitespace removed, e.g. `javax.ejb.Stateless`.
    pub name: String,
    pub value: Option<AnnotationValue>,
    /// The annotation's syntax contains parse errors.
    pub malformed: bool,
}

fn lookup(
    element: &str,
    annotations: &[JavaAnnotation],
    name: &str,
) -> IntrospectionResult<Option<Annotation>> {
    let Some(found) = annotations.iter().find(|a| a.name == name) else {
        return Ok(None);
    };
    if found.malformed {
        return Err(IntrospectionError::MalformedAnnotation {
            element: element.to_string(),
            annotation: name.to_string(),
        });
    }
    Ok(Some(Annotation {
        name: found.name.clone(),
        value: found.value.clone(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    pub name: String,
    pub annotations: Vec<JavaAnnotation>,
    pub is_constructor: bool,
}

impl AnnotatedElement for JavaMethod {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn annotation(&self, name: &str) -> IntrospectionResult<Option<Annotation>> {
        lookup(&self.name, &self.annotations, name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    pub name: String,
    /// Tree-sitter node kind, e.g. `class_declaration`.
    pub kind: String,
    pub annotations: Vec<JavaAnnotation>,
    pub methods: Vec<JavaMethod>,
}

impl AnnotatedElement for JavaType {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn annotation(&self, name: &str) -> IntrospectionResult<Option<Annotation>> {
        lookup(&self.name, &self.annotations, name)
    }
}

impl SourceType for JavaType {
    fn methods(&self) -> IntrospectionResult<Vec<&dyn AnnotatedElement>> {
        Ok(self
            .methods
            .iter()
            .map(|m| m as &dyn AnnotatedElement)
            .collect())
    }
}

/// One `.java` file and the outcome of reading its first type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaCompilationUnit {
    pub path: PathBuf,
    /// File name, e.g. `OrderService.java`.
    pub element_name: String,
    pub first_type: Result<JavaType, IntrospectionError>,
}

impl CompilationUnit for JavaCompilationUnit {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn first_type(&self) -> IntrospectionResult<&dyn SourceType> {
        match &self.first_type {
            Ok(ty) => Ok(ty as &dyn SourceType),
            Err(e) => Err(e.clone()),
        }
    }
}
