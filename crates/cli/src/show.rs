use crate::SourceArgs;
use beansec_api::models::{Component, SecuritySpec};
use beansec_core::config::GeneratorConfig;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    name: String,
    #[tabled(rename = "Kind")]
    archetype: String,
    #[tabled(rename = "Ops")]
    operations: usize,
    #[tabled(rename = "Security")]
    security: String,
}

#[derive(Tabled)]
struct OperationRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Operation")]
    name: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Security")]
    security: String,
}

pub fn run(path: PathBuf, source: SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GeneratorConfig::load_for_project(&path)?;
    source.apply(&mut config);

    let generation = beansec_runtime::generate_in_memory(&path, &config)?;
    let model = &generation.model;

    println!("Project: {}", model.project);
    if model.components.is_empty() {
        println!("No components found.");
        return Ok(());
    }

    let components: Vec<ComponentRow> = model.components.iter().map(component_row).collect();
    println!("{}", Table::new(components));

    let operations: Vec<OperationRow> = model
        .components
        .iter()
        .flat_map(|c| {
            c.operations.iter().map(|op| OperationRow {
                component: c.name.clone(),
                name: op.name().to_string(),
                mode: op.invocation_mode.to_string(),
                security: describe(&op.security),
            })
        })
        .collect();
    if !operations.is_empty() {
        println!("{}", Table::new(operations));
    }

    let roles: Vec<&str> = model.roles.iter().map(|r| r.name.as_str()).collect();
    println!("Roles: {}", roles.join(", "));

    for skipped in &generation.skipped {
        println!("Skipped {}: {}", skipped.unit, skipped.reason);
    }
    Ok(())
}

fn component_row(component: &Component) -> ComponentRow {
    ComponentRow {
        name: component.name.clone(),
        archetype: component.archetype.to_string(),
        operations: component.operations.len(),
        security: describe(&component.security),
    }
}

fn describe(spec: &SecuritySpec) -> String {
    if spec.is_unrestricted() {
        return "-".to_string();
    }
    let names = |roles: &[beansec_api::models::RoleRef]| {
        roles
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut parts = Vec::new();
    if spec.permit_all {
        parts.push("permit-all".to_string());
    }
    if spec.deny_all {
        parts.push("deny-all".to_string());
    }
    if !spec.roles_declared.is_empty() {
        parts.push(format!("declares[{}]", names(&spec.roles_declared)));
    }
    if !spec.roles_allowed.is_empty() {
        parts.push(format!("allows[{}]", names(&spec.roles_allowed)));
    }
    if let Some(run_as) = &spec.run_as {
        parts.push(format!("run-as[{}]", run_as.name));
    }
    parts.join(" ")
}
