mod generate;
mod schema;
mod show;

use beansec_core::config::GeneratorConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "beansec",
    version,
    about = "Derives a security model from annotated enterprise bean sources",
    long_about = "Beansec classifies the session and message-driven beans of a Java project, \
                  reads their declarative security annotations and persists the resulting \
                  security model (components, operations and a deduplicated role set)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Source layout options shared by commands that read a project.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Source root relative to the project directory (repeatable)
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_roots: Vec<PathBuf>,

    /// Do not treat constructors as bean operations
    #[arg(long)]
    pub no_constructors: bool,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if !self.source_roots.is_empty() {
            config.source_roots = self.source_roots.clone();
        }
        if self.no_constructors {
            config.include_constructors = false;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and persist the security model of a project
    #[command(
        long_about = "Analyzes every bean of the project and writes the security model to \
                            ~/<OUTPUT_ROOT>/<project>/SecurityModel.json. Settings are read from \
                            beansec.json in the project directory when present."
    )]
    Generate {
        /// Path to the project root directory
        #[arg(value_name = "PROJECT_PATH")]
        path: PathBuf,

        /// Output root relative to the home directory
        #[arg(long, value_name = "DIR")]
        output_root: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,

        /// Build the model without writing the document
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the security model of a project as tables
    Show {
        /// Path to the project root directory
        #[arg(value_name = "PROJECT_PATH")]
        path: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the JSON schema of the persisted document
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = beansec_runtime::init_logging("cli", true);

    match cli.command {
        Commands::Generate {
            path,
            output_root,
            source,
            dry_run,
        } => generate::run(path, output_root, source, dry_run),
        Commands::Show { path, source } => show::run(path, source),
        Commands::Schema => schema::run(),
    }
}
