mod common;

use beansec_api::host::ProjectModel;
use beansec_api::models::Archetype;
use beansec_core::classify::{classify, classify_type};
use common::{FakeProject, FakeType};

#[test]
fn each_marker_maps_to_its_archetype() {
    let cases = [
        ("Stateless", Archetype::StatelessComponent),
        ("javax.ejb.Stateful", Archetype::StatefulComponent),
        ("Singleton", Archetype::SingletonComponent),
        ("javax.ejb.MessageDriven", Archetype::MessageTriggeredComponent),
    ];
    for (marker, expected) in cases {
        let ty = FakeType::new("Bean").marked(marker);
        assert_eq!(classify_type(&ty), expected, "marker {}", marker);
    }
}

#[test]
fn stateless_wins_over_singleton() {
    let ty = FakeType::new("Bean")
        .marked("Singleton")
        .marked("javax.ejb.Stateless");
    assert_eq!(classify_type(&ty), Archetype::StatelessComponent);
}

#[test]
fn stateful_wins_over_message_driven() {
    let ty = FakeType::new("Bean").marked("MessageDriven").marked("Stateful");
    assert_eq!(classify_type(&ty), Archetype::StatefulComponent);
}

#[test]
fn unmarked_class_is_not_a_component() {
    let ty = FakeType::new("Helper").marked("Deprecated");
    assert_eq!(classify_type(&ty), Archetype::NotAComponent);
}

#[test]
fn failing_lookup_counts_as_absent() {
    let ty = FakeType::new("Bean")
        .failing("Stateless")
        .marked("Singleton");
    assert_eq!(classify_type(&ty), Archetype::SingletonComponent);

    let only_failing = FakeType::new("Bean").failing("Stateless");
    assert_eq!(classify_type(&only_failing), Archetype::NotAComponent);
}

#[test]
fn unit_without_type_is_not_a_component() {
    let project = FakeProject::new("shop").empty_unit("package-info.java");
    let units = project.compilation_units().unwrap();
    assert_eq!(classify(units[0]), Archetype::NotAComponent);
}
