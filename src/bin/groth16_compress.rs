use clap::Parser;
use rust_groth16_compress_bls12_381::{config::CompressionConfig, groth16::compress_artifact_json};
use std::{error::Error, fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compresses the points of a snarkjs Groth16 proof or verification key.
#[derive(Parser)]
#[command(name = "groth16-compress")]
#[command(version)]
struct Cli {
    /// proof.json or verification_key.json written by snarkjs
    path: Option<PathBuf>,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(path) = cli.path else {
        println!("Just one path argument is needed!");
        return Ok(());
    };

    let config = CompressionConfig::from_env();
    info!(path = %path.display(), curve = %config.curve, "compressing");

    let input = fs::read_to_string(&path)?;
    let output = compress_artifact_json(&input, &config)?;
    println!("{}", output);
    Ok(())
}
