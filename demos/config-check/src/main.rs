//! Loads the AI system configuration from the environment and validates it.

use std::path::PathBuf;

use ai_system::config::loader::debug_enabled;
use ai_system::config::{AppConfig, ProcessEnv, load_app_config, validate_config};
use ai_system::telemetry::{TracingConfig, init_tracing};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "config-check", about = "Validate AI system configuration")]
struct Args {
    /// Dotenv file to load before reading the environment.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Print the validated configuration as JSON (the API key is omitted).
    #[arg(long)]
    json: bool,

    /// Enable debug logging (also enabled by AI_DEBUG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Loaded before logging so AI_DEBUG and RUST_LOG from the file apply.
    let dotenv = dotenvy::from_path(&args.env_file);

    let verbose = args.verbose || debug_enabled(&ProcessEnv);
    init_tracing(&TracingConfig::verbose(verbose))?;

    match dotenv {
        Ok(()) => info!(path = %args.env_file.display(), "loaded env file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(path = %args.env_file.display(), %err, "failed to load env file"),
    }

    let config = load_app_config(&ProcessEnv);
    let config = validate_config(&config).context("invalid AI system configuration")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        summarize(config);
    }
    Ok(())
}

fn summarize(config: &AppConfig) {
    info!(
        model = %config.model.model,
        base_url = %config.model.api_base_url,
        max_tokens = config.model.max_tokens,
        temperature = config.model.temperature,
        "model"
    );
    info!(
        vector_dimensions = config.memory.vector_dimensions,
        max_memories = config.memory.max_memories,
        similarity_threshold = config.memory.similarity_threshold,
        short_term_capacity = config.memory.short_term_capacity,
        "memory"
    );
    info!(
        confidence_threshold = config.decision.confidence_threshold,
        max_retries = config.decision.max_retries,
        max_reasoning_steps = config.decision.max_reasoning_steps,
        "decision"
    );
    info!("configuration valid");
}
