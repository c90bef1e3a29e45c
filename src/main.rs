use clap::Parser;
use zaalschema::utils::{logger, validation::Validate};
use zaalschema::{CliConfig, LocalCache, ReportEngine, SchedulePipeline};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zaalschema");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let output = config.output.clone();
    let cache = LocalCache::new();
    let pipeline = match SchedulePipeline::new(cache, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let engine = ReportEngine::new(pipeline);
    match engine.run().await {
        Ok(report) => {
            if let Some(path) = output {
                if let Err(e) = std::fs::write(&path, &report) {
                    tracing::error!("could not write {}: {}", path, e);
                    std::process::exit(1);
                }
                tracing::info!("report written to {}", path);
            } else {
                print!("{}", report);
            }
        }
        Err(e) => {
            tracing::error!("schedule run failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
