use crate::marker::has_marker;
use beansec_api::annotation::Marker;
use beansec_api::host::{AnnotatedElement, CompilationUnit};
use beansec_api::models::Archetype;
use tracing::debug;

/// Marker checks in precedence order. A class carrying several markers takes
/// the first match.
pub const ARCHETYPE_PRECEDENCE: [(Marker, Archetype); 4] = [
    (Marker::Stateless, Archetype::StatelessComponent),
    (Marker::Stateful, Archetype::StatefulComponent),
    (Marker::Singleton, Archetype::SingletonComponent),
    (Marker::MessageDriven, Archetype::MessageTriggeredComponent),
];

/// Classifies the first type declared in `unit`.
pub fn classify(unit: &dyn CompilationUnit) -> Archetype {
    match unit.first_type() {
        Ok(ty) => classify_type(ty),
        Err(e) => {
            debug!("Cannot classify {}: {}", unit.element_name(), e);
            Archetype::NotAComponent
        }
    }
}

pub fn classify_type<T: AnnotatedElement + ?Sized>(ty: &T) -> Archetype {
    ARCHETYPE_PRECEDENCE
        .iter()
        .find(|(marker, _)| has_marker(ty, *marker))
        .map(|(_, archetype)| *archetype)
        .unwrap_or(Archetype::NotAComponent)
}
