// ABOUTME: Main application orchestration for the zpodgen CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands::{self, GenerateOptions};
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create application from parsed command line arguments
    pub fn new_from(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting zpodgen v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        let host = args
            .host
            .clone()
            .or_else(|| self.config.api.host.clone())
            .ok_or_else(|| anyhow!("No zpodapi host configured. Use --host or ZPODFACTORY_HOST"))?;
        let token = args
            .token
            .clone()
            .or_else(|| self.config.api.token.clone())
            .ok_or_else(|| {
                anyhow!("No zpodapi token configured. Use --token or ZPODFACTORY_TOKEN")
            })?;

        match args.command {
            Commands::Generate {
                zpod_name,
                template,
                extra_vars,
                output,
                require_network,
                strict_overrides,
            } => {
                let options = GenerateOptions {
                    zpod_name,
                    template,
                    extra_vars,
                    output,
                    require_network,
                    strict_overrides,
                };
                commands::generate(options, &host, &token, &self.config).await
            }

            Commands::List => commands::list_zpods(&host, &token).await,
        }
    }
}
