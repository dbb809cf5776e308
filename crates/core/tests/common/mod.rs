use beansec_api::annotation::{Annotation, AnnotationValue};
use beansec_api::error::{IntrospectionError, IntrospectionResult};
use beansec_api::host::{AnnotatedElement, CompilationUnit, ProjectModel, SourceType};

#[derive(Default)]
pub struct FakeElement {
    name: String,
    annotations: Vec<Annotation>,
    failing: Vec<String>,
}

impl FakeElement {
    fn lookup(&self, name: &str) -> IntrospectionResult<Option<Annotation>> {
        if self.failing.iter().any(|f| f == name) {
            return Err(IntrospectionError::MalformedAnnotation {
                element: self.name.clone(),
                annotation: name.to_string(),
            });
        }
        Ok(self.annotations.iter().find(|a| a.name == name).cloned())
    }
}

pub struct FakeMethod(FakeElement);

#[allow(dead_code)]
impl FakeMethod {
    pub fn new(name: &str) -> Self {
        Self(FakeElement {
            name: name.to_string(),
            ..Default::default()
        })
    }

    pub fn marked(mut self, annotation: &str) -> Self {
        self.0.annotations.push(Annotation::marker(annotation));
        self
    }

    pub fn valued(mut self, annotation: &str, value: &str) -> Self {
        self.0.annotations.push(Annotation::with_value(
            annotation,
            AnnotationValue::Scalar(value.to_string()),
        ));
        self
    }

    pub fn listed(mut self, annotation: &str, values: &[&str]) -> Self {
        self.0.annotations.push(Annotation::with_value(
            annotation,
            AnnotationValue::List(values.iter().map(|v| v.to_string()).collect()),
        ));
        self
    }

    pub fn failing(mut self, annotation: &str) -> Self {
        self.0.failing.push(annotation.to_string());
        self
    }
}

impl AnnotatedElement for FakeMethod {
    fn element_name(&self) -> &str {
        &self.0.name
    }

    fn annotation(&self, name: &str) -> IntrospectionResult<Option<Annotation>> {
        self.0.lookup(name)
    }
}

pub struct FakeType {
    element: FakeElement,
    methods: Vec<FakeMethod>,
    methods_fail: bool,
}

#[allow(dead_code)]
impl FakeType {
    pub fn new(name: &str) -> Self {
        Self {
            element: FakeElement {
                name: name.to_string(),
                ..Default::default()
            },
            methods: Vec::new(),
            methods_fail: false,
        }
    }

    pub fn marked(mut self, annotation: &str) -> Self {
        self.element.annotations.push(Annotation::marker(annotation));
        self
    }

    pub fn valued(mut self, annotation: &str, value: &str) -> Self {
        self.element.annotations.push(Annotation::with_value(
            annotation,
            AnnotationValue::Scalar(value.to_string()),
        ));
        self
    }

    pub fn listed(mut self, annotation: &str, values: &[&str]) -> Self {
        self.element.annotations.push(Annotation::with_value(
            annotation,
            AnnotationValue::List(values.iter().map(|v| v.to_string()).collect()),
        ));
        self
    }

    pub fn failing(mut self, annotation: &str) -> Self {
        self.element.failing.push(annotation.to_string());
        self
    }

    pub fn method(mut self, method: FakeMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods_fail(mut self) -> Self {
        self.methods_fail = true;
        self
    }
}

impl AnnotatedElement for FakeType {
    fn element_name(&self) -> &str {
        &self.element.name
    }

    fn annotation(&self, name: &str) -> IntrospectionResult<Option<Annotation>> {
        self.element.lookup(name)
    }
}

impl SourceType for FakeType {
    fn methods(&self) -> IntrospectionResult<Vec<&dyn AnnotatedElement>> {
        if self.methods_fail {
            return Err(IntrospectionError::Other(format!(
                "members of {} unavailable",
                self.element.name
            )));
        }
        Ok(self
            .methods
            .iter()
            .map(|m| m as &dyn AnnotatedElement)
            .collect())
    }
}

pub struct FakeUnit {
    name: String,
    ty: Option<FakeType>,
}

impl CompilationUnit for FakeUnit {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn first_type(&self) -> IntrospectionResult<&dyn SourceType> {
        self.ty
            .as_ref()
            .map(|t| t as &dyn SourceType)
            .ok_or_else(|| IntrospectionError::NoTypeDeclared(self.name.clone()))
    }
}

pub struct FakeProject {
    name: String,
    units: Vec<FakeUnit>,
    enumeration_fails: bool,
}

#[allow(dead_code)]
impl FakeProject {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            units: Vec::new(),
            enumeration_fails: false,
        }
    }

    /// Adds `<Type>.java` holding `ty`.
    pub fn class(mut self, ty: FakeType) -> Self {
        self.units.push(FakeUnit {
            name: format!("{}.java", ty.element.name),
            ty: Some(ty),
        });
        self
    }

    pub fn empty_unit(mut self, name: &str) -> Self {
        self.units.push(FakeUnit {
            name: name.to_string(),
            ty: None,
        });
        self
    }

    pub fn enumeration_fails(mut self) -> Self {
        self.enumeration_fails = true;
        self
    }
}

impl ProjectModel for FakeProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn compilation_units(&self) -> IntrospectionResult<Vec<&dyn CompilationUnit>> {
        if self.enumeration_fails {
            return Err(IntrospectionError::Enumeration("no source roots".to_string()));
        }
        Ok(self
            .units
            .iter()
            .map(|u| u as &dyn CompilationUnit)
            .collect())
    }
}
