//! Schematic Code Generator
//!
//! Generates a typed Rust client from a schema registry and API definition.

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use schematic_define::{RestApi, SchemaRef};
use schematic_gen::errors::GeneratorError;
use schematic_gen::output::{generate_and_write, output_path};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Schematic code generator - transforms API definitions into typed Rust clients
#[derive(Parser, Debug)]
#[command(name = "schematic-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API definition to generate code for (e.g., "hcloud")
    #[arg(short, long)]
    api: String,

    /// Output directory for generated code
    #[arg(short, long, default_value = "hcloud/generated")]
    output: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn lookup(name: &str) -> Result<(RestApi, Vec<(&'static str, SchemaRef)>), GeneratorError> {
    match name {
        "hcloud" => Ok((
            schematic_definitions::hcloud::define_hcloud_api(),
            schematic_definitions::hcloud::registry(),
        )),
        other => Err(GeneratorError::ConfigError(format!(
            "Unknown API: '{}'. Available APIs: hcloud",
            other
        ))),
    }
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (api, registry) = lookup(&cli.api)?;
    debug!(
        api = %api.name,
        endpoints = api.endpoints.len(),
        schemas = registry.len(),
        "loaded definition"
    );
    for endpoint in &api.endpoints {
        debug!(id = %endpoint.id, method = %endpoint.method, path = %endpoint.path, "endpoint");
    }

    let output_dir = Path::new(&cli.output);
    let code = generate_and_write(&api, &registry, output_dir, cli.dry_run)?;

    if cli.dry_run {
        println!("{code}");
    } else {
        eprintln!(
            "{} {}",
            "generated".green().bold(),
            output_path(&api, output_dir).display()
        );
    }

    Ok(())
}
