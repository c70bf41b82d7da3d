use nodepack::cli::commands::{CliArgs, Commands};
use nodepack::cli::handlers::{handle_analyze, handle_serve};
use nodepack::util::logging::{init_logging, LoggingConfig};
use nodepack::{NodepackConfig, VERSION};

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_args(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("nodepack v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match NodepackConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!("{}", config);

    let exit_code = match &args.command {
        Commands::Analyze(analyze_args) => handle_analyze(analyze_args, &config),
        Commands::Serve(serve_args) => handle_serve(serve_args, config).await,
    };

    std::process::exit(exit_code);
}
