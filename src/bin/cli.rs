use anyhow::{Context, Result};
use clap::Parser;
use code_verifier_gen as lib;
use lib::generator::StdRandomSource;
use lib::verifier::{generate_code_verifier, write_report, GeneratorSettings};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Print a random 32-character string and the SHA-256 hex digest of it.
#[derive(Parser)]
#[command(name = "code-verifier-gen", version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // stdout carries only the report, so diagnostics go to stderr.
    // Honor RUST_LOG if set, otherwise default to warn.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);
    let subscriber = tracing_subscriber::registry().with(env_filter).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")?;

    let mut rng = StdRandomSource::from_os_entropy()?;
    let verifier = generate_code_verifier(&mut rng, &GeneratorSettings::default());
    info!(len = verifier.random_string.len(), "generated code verifier");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &verifier)?;
    Ok(())
}
