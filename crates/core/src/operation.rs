use crate::generator::GenerationContext;
use crate::marker::has_marker;
use crate::security::extract_operation_spec;
use beansec_api::annotation::Marker;
use beansec_api::host::AnnotatedElement;
use beansec_api::models::{Archetype, InvocationMode, Operation, OperationSignature};

/// Whether the class itself marks every operation asynchronous.
pub fn is_class_level_async<T: AnnotatedElement + ?Sized>(ty: &T) -> bool {
    has_marker(ty, Marker::Asynchronous)
}

pub fn invocation_mode<M: AnnotatedElement + ?Sized>(
    method: &M,
    archetype: Archetype,
    class_level_async: bool,
) -> InvocationMode {
    match archetype {
        Archetype::MessageTriggeredComponent => InvocationMode::MessageTriggered,
        Archetype::StatelessComponent
        | Archetype::StatefulComponent
        | Archetype::SingletonComponent
        | Archetype::NotAComponent => {
            if class_level_async || has_marker(method, Marker::Asynchronous) {
                InvocationMode::Asynchronous
            } else {
                InvocationMode::Synchronous
            }
        }
    }
}

pub fn build_operation<M: AnnotatedElement + ?Sized>(
    method: &M,
    archetype: Archetype,
    class_level_async: bool,
    ctx: &mut GenerationContext,
) -> Operation {
    Operation {
        signature: OperationSignature {
            name: method.element_name().to_string(),
        },
        invocation_mode: invocation_mode(method, archetype, class_level_async),
        security: extract_operation_spec(method, ctx),
    }
}
