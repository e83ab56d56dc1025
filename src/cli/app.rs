// ABOUTME: Main application orchestration for the acta CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::{anyhow, Context as _, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Install the tracing subscriber; `--verbose` forces debug and RUST_LOG wins over both
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let level = if verbose {
            "debug"
        } else {
            self.config.logging.level.as_str()
        };

        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .with_context(|| format!("Invalid log level '{}'", level))?;

        // stdout carries the rendered act
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(!no_color)
            .with_target(false)
            .with_writer(std::io::stderr);

        let installed = if self.config.logging.format == "compact" {
            builder.compact().try_init()
        } else {
            builder.try_init()
        };
        installed.map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

        debug!("Logging initialized with level: {}", level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting acta v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        if let Some(vars) = args.command.variables() {
            self.config.merge_variables(Args::parse_variables(vars)?);
        }

        match args.command {
            Commands::Render {
                template,
                case,
                template_id,
                output,
                format,
                ..
            } => {
                commands::render_act(template, case, template_id, output, format, &self.config)
                    .await
            }

            Commands::Variables {
                template,
                template_id,
            } => commands::list_variables(template, template_id).await,

            Commands::Catalog { role } => commands::show_catalog(role).await,

            Commands::Check {
                template,
                case,
                template_id,
                strict,
                format,
                ..
            } => {
                commands::check(template, case, template_id, strict, format, &self.config).await
            }

            Commands::Context { case, .. } => commands::show_context(case, &self.config).await,
        }
    }

    /// Create application from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}
