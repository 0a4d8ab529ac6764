use clap::Parser;
use resource_availability::cli::commands::{summary, validate};
use resource_availability::cli::{handle_error, Cli, Commands};
use resource_availability::infrastructure::config::ConfigLoader;
use resource_availability::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = config.unwrap_or_else(|err| handle_error(err, cli.json));

    // Held until exit so the file writer flushes
    let _logger = LoggerImpl::init(&config.logging).unwrap_or_else(|err| handle_error(err, cli.json));

    let result = match &cli.command {
        Commands::Summary { file, now } => summary::execute(file, *now, &config, cli.json),
        Commands::Validate { file } => validate::execute(file, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
