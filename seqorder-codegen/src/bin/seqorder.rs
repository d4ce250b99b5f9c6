//! Command line generator for XSD field-order tables.
//!
//! Run with: `cargo run -p seqorder-codegen -- --schemas schemas --out generators`

use anyhow::Context;
use clap::Parser;
use seqorder_codegen::{Generator, GeneratorConfig, OutputFormat};
use seqorder_schema::{CyclePolicy, ResolverConfig};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "seqorder")]
#[command(about = "Generate field-order tables from XSD schemas")]
#[command(version)]
struct Cli {
    /// Directory scanned for *.xsd files
    #[arg(short, long, default_value = "schemas")]
    schemas: PathBuf,
    /// Output root; each schema is written to <out>/<name>/schema_ordering.<ext>
    #[arg(short, long, default_value = "generators")]
    out: PathBuf,
    /// Output format: rust or json
    #[arg(short, long, default_value_t = OutputFormat::Rust, value_parser = OutputFormat::from_str)]
    format: OutputFormat,
    /// Handling of recursive type references: reject or truncate
    #[arg(long, default_value_t = CyclePolicy::Reject, value_parser = CyclePolicy::from_str)]
    on_cycle: CyclePolicy,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_schema_dir(&self.schemas)
            .with_out_dir(&self.out)
            .with_format(self.format)
            .with_resolver(ResolverConfig::new().with_cycle_policy(self.on_cycle))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let written = Generator::new(cli.config())
        .run()
        .with_context(|| format!("generating order tables from {}", cli.schemas.display()))?;

    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}
