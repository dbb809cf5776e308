//! Marker lookups that degrade introspection failures to "not present".

use beansec_api::annotation::{Annotation, Marker};
use beansec_api::host::AnnotatedElement;
use tracing::debug;

pub fn find_marker<E: AnnotatedElement + ?Sized>(
    element: &E,
    marker: Marker,
) -> Option<Annotation> {
    match element.marker(marker) {
        Ok(found) => found,
        Err(e) => {
            debug!(
                "Treating {:?} on {} as absent: {}",
                marker,
                element.element_name(),
                e
            );
            None
        }
    }
}

pub fn has_marker<E: AnnotatedElement + ?Sized>(element: &E, marker: Marker) -> bool {
    find_marker(element, marker).is_some()
}

/// Values of a present marker; `None` when the marker is absent.
pub fn marker_values<E: AnnotatedElement + ?Sized>(
    element: &E,
    marker: Marker,
) -> Option<Vec<String>> {
    find_marker(element, marker).map(|annotation| annotation.values())
}
