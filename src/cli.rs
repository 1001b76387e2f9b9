use crate::generator::{check_source, generate_bindings, GenerateOptions};
use crate::source::{SchemaSource, Target};
use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the restbind generator.
#[derive(Parser)]
#[command(name = "restbind-gen")]
#[command(about = "restbind binding compiler CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the Java client library from an introspection dump
    Generate {
        /// Path to the schema-introspection dump (JSON)
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory for the generated sources
        #[arg(short, long, default_value = "build")]
        output: PathBuf,

        /// Root Java package for the emitted library
        #[arg(long, default_value = "water.bindings")]
        package: String,

        /// Name of the emitted facade class
        #[arg(long, default_value = "H2oApi")]
        facade_class: String,

        /// Overwrite existing files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Validate an introspection dump without writing any files
    ///
    /// Runs every emitter in memory and reports the per-record failures a
    /// generation run would hit: unresolvable type tokens, required-field
    /// count violations, and broken discriminator naming contracts.
    Check {
        /// Path to the schema-introspection dump (JSON)
        #[arg(short, long)]
        source: PathBuf,
    },
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the dump cannot be loaded, or if the run finished
/// with per-record failures (after reporting each one).
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            source,
            output,
            package,
            facade_class,
            force,
        } => {
            let source = SchemaSource::load(source, Target::java())?;
            let opts = GenerateOptions {
                package: package.clone(),
                facade_class: facade_class.clone(),
                force: *force,
            };
            let report = generate_bindings(&source, output, &opts)?;
            println!("✅ Wrote {} files to {output:?}", report.written.len());
            if !report.is_clean() {
                for failure in &report.failures {
                    tracing::error!(record = %failure.record, error = %format!("{:#}", failure.error), "record failed");
                }
                bail!("generation finished with {} failed records", report.failures.len());
            }
            Ok(())
        }
        Commands::Check { source } => {
            let source = SchemaSource::load(source, Target::java())?;
            let failures = check_source(&source, &GenerateOptions::default())?;
            if failures.is_empty() {
                println!("✅ Introspection dump is clean");
                Ok(())
            } else {
                for failure in &failures {
                    eprintln!("❌ {failure}");
                }
                bail!("{} record(s) would fail generation", failures.len());
            }
        }
    }
}
