use crate::classify::classify_type;
use crate::operation::{build_operation, is_class_level_async};
use crate::registry::RoleRegistry;
use crate::security::extract_class_spec;
use beansec_api::error::{IntrospectionError, WriteError};
use beansec_api::host::{CompilationUnit, ProjectModel, SourceType};
use beansec_api::models::{Archetype, Component, SecurityModel};
use beansec_api::sink::{DocumentSink, DocumentTarget};
use tracing::{debug, info, warn};

/// File suffix stripped from a compilation unit name to name its component.
pub const SOURCE_SUFFIX: &str = ".java";

/// State owned by exactly one generation run.
#[derive(Debug, Default)]
pub struct GenerationContext {
    pub roles: RoleRegistry,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A compilation unit left out of the model because introspection failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUnit {
    pub unit: String,
    pub reason: IntrospectionError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub model: SecurityModel,
    pub skipped: Vec<SkippedUnit>,
}

/// Result of a run that ended in a write. The model survives a failed write.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub generation: Generation,
    pub target: DocumentTarget,
    pub written: Result<(), WriteError>,
}

/// Derives the component name from a compilation unit name.
pub fn component_name(unit_name: &str) -> &str {
    unit_name.strip_suffix(SOURCE_SUFFIX).unwrap_or(unit_name)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModelGenerator;

impl ModelGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, project: &dyn ProjectModel) -> SecurityModel {
        self.generate_detailed(project).model
    }

    /// Runs one generation with a fresh context. Never fails: introspection
    /// problems skip the affected unit and are reported in the result.
    pub fn generate_detailed(&self, project: &dyn ProjectModel) -> Generation {
        info!("Generating security model for project {}", project.name());

        let mut ctx = GenerationContext::new();
        let mut components = Vec::new();
        let mut skipped = Vec::new();

        let units = match project.compilation_units() {
            Ok(units) => units,
            Err(e) => {
                warn!("Cannot enumerate sources of {}: {}", project.name(), e);
                Vec::new()
            }
        };

        for unit in units {
            match self.process_unit(unit, &mut ctx) {
                Ok(Some(component)) => components.push(component),
                Ok(None) => {}
                Err(reason) => {
                    warn!("Skipping {}: {}", unit.element_name(), reason);
                    skipped.push(SkippedUnit {
                        unit: unit.element_name().to_string(),
                        reason,
                    });
                }
            }
        }

        let model = SecurityModel {
            project: project.name().to_string(),
            components,
            roles: ctx.roles.into_roles(),
        };
        info!(
            "Model for {} has {} components and {} roles ({} units skipped)",
            model.project,
            model.components.len(),
            model.roles.len(),
            skipped.len()
        );

        Generation { model, skipped }
    }

    /// Generates the full model, then hands it to `sink` in a single write.
    pub fn generate_and_write(
        &self,
        project: &dyn ProjectModel,
        sink: &dyn DocumentSink,
        target: DocumentTarget,
    ) -> GenerationOutcome {
        let generation = self.generate_detailed(project);
        let written = sink.write(&generation.model, &target);
        match &written {
            Ok(()) => info!("Model successfully created: {}", target.uri),
            Err(e) => warn!("Failed to write {}: {}", target.uri, e),
        }
        GenerationOutcome {
            generation,
            target,
            written,
        }
    }

    fn process_unit(
        &self,
        unit: &dyn CompilationUnit,
        ctx: &mut GenerationContext,
    ) -> Result<Option<Component>, IntrospectionError> {
        let ty = match unit.first_type() {
            Ok(ty) => ty,
            Err(IntrospectionError::NoTypeDeclared(_)) => {
                debug!("{} declares no type", unit.element_name());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let archetype = classify_type(ty);
        if !archetype.is_component() {
            debug!("{} is not a component", unit.element_name());
            return Ok(None);
        }
        self.build_component(component_name(unit.element_name()), ty, archetype, ctx)
            .map(Some)
    }

    fn build_component(
        &self,
        name: &str,
        ty: &dyn SourceType,
        archetype: Archetype,
        ctx: &mut GenerationContext,
    ) -> Result<Component, IntrospectionError> {
        // Member lookup first, so a failing class leaves no roles behind.
        let methods = ty.methods()?;

        let security = extract_class_spec(ty, ctx);
        let class_level_async = is_class_level_async(ty);

        let operations = methods
            .into_iter()
            .map(|method| build_operation(method, archetype, class_level_async, ctx))
            .collect();

        debug!("Built {} component {}", archetype, name);
        Ok(Component {
            name: name.to_string(),
            archetype,
            security,
            operations,
        })
    }
}
