use clap::Parser;
use phone_store::utils::{logger, validation::Validate};
use phone_store::{AppError, Application, CatalogConfig, CliConfig, StdConsole};

fn exit_with(e: &AppError) -> ! {
    tracing::error!("❌ Startup failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn load_catalog(config: &CliConfig) -> phone_store::Result<CatalogConfig> {
    let catalog = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path.display());
            CatalogConfig::from_file(path)?
        }
        None => CatalogConfig::default(),
    };
    catalog.validate()?;
    Ok(catalog)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => exit_with(&e),
    };

    let mut app = Application::new(catalog.into_stores());
    let mut console = StdConsole::stdio();
    app.run(&mut console)?;

    Ok(())
}
