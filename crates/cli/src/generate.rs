use crate::SourceArgs;
use beansec_core::config::GeneratorConfig;
use beansec_core::Generation;
use std::path::PathBuf;
use tracing::info;

pub fn run(
    path: PathBuf,
    output_root: Option<PathBuf>,
    source: SourceArgs,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GeneratorConfig::load_for_project(&path)?;
    source.apply(&mut config);
    if let Some(root) = output_root {
        config.output_root = root;
    }

    info!("Model generation for project at: {}...", path.display());

    if dry_run {
        let generation = beansec_runtime::generate_in_memory(&path, &config)?;
        report(&generation);
        println!("Dry run: no document written.");
        return Ok(());
    }

    let outcome = beansec_runtime::generate_project(&path, &config)?;
    report(&outcome.generation);
    outcome.written?;
    println!("Model successfully created: {}", outcome.target.uri);
    Ok(())
}

fn report(generation: &Generation) {
    let model = &generation.model;
    println!("Project:    {}", model.project);
    println!("Components: {}", model.components.len());
    println!("Roles:      {}", model.roles.len());
    for skipped in &generation.skipped {
        println!("Skipped {}: {}", skipped.unit, skipped.reason);
    }
}
