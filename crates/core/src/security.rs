use crate::generator::GenerationContext;
use crate::marker::{find_marker, has_marker, marker_values};
use beansec_api::annotation::{AnnotationValue, Marker};
use beansec_api::host::AnnotatedElement;
use beansec_api::models::{RoleRef, SecuritySpec};
use tracing::warn;

/// Level at which a security spec is read. Declared roles and run-as are
/// component-level only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Component,
    Operation,
}

pub fn extract_class_spec<T: AnnotatedElement + ?Sized>(
    ty: &T,
    ctx: &mut GenerationContext,
) -> SecuritySpec {
    extract(ty, Granularity::Component, ctx)
}

pub fn extract_operation_spec<M: AnnotatedElement + ?Sized>(
    method: &M,
    ctx: &mut GenerationContext,
) -> SecuritySpec {
    extract(method, Granularity::Operation, ctx)
}

pub fn extract<E: AnnotatedElement + ?Sized>(
    element: &E,
    granularity: Granularity,
    ctx: &mut GenerationContext,
) -> SecuritySpec {
    let mut spec = SecuritySpec {
        permit_all: has_marker(element, Marker::PermitAll),
        deny_all: has_marker(element, Marker::DenyAll),
        ..SecuritySpec::default()
    };

    if granularity == Granularity::Component {
        spec.roles_declared = resolve_roles(element, Marker::DeclareRoles, ctx);
    }

    spec.roles_allowed = resolve_roles(element, Marker::RolesAllowed, ctx);

    if granularity == Granularity::Component {
        spec.run_as = resolve_run_as(element, ctx);
    }

    spec
}

fn resolve_roles<E: AnnotatedElement + ?Sized>(
    element: &E,
    marker: Marker,
    ctx: &mut GenerationContext,
) -> Vec<RoleRef> {
    marker_values(element, marker)
        .unwrap_or_default()
        .iter()
        .map(|name| ctx.roles.resolve(name))
        .collect()
}

fn resolve_run_as<E: AnnotatedElement + ?Sized>(
    element: &E,
    ctx: &mut GenerationContext,
) -> Option<RoleRef> {
    let annotation = find_marker(element, Marker::RunAs)?;
    let value = annotation.value.as_ref()?;
    let name = value.first()?;
    match value {
        AnnotationValue::List(values) if values.len() > 1 => warn!(
            "@RunAs on {} names {} roles; using {:?}",
            element.element_name(),
            values.len(),
            name
        ),
        _ => {}
    }
    Some(ctx.roles.resolve(name))
}
