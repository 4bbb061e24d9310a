use clap::Parser;
use client_sheet::config::toml_config::TomlConfig;
use client_sheet::config::USAGE;
use client_sheet::utils::{logger, validation::Validate};
use client_sheet::{CliConfig, LocalStorage, ReportEngine, ReportPipeline, ReportSettings, SheetError};

fn fail(e: &SheetError) -> ! {
    tracing::error!(
        "❌ Client sheet failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn load_settings(cli: &CliConfig, input: std::path::PathBuf) -> Result<ReportSettings, SheetError> {
    let mut settings = ReportSettings::new(input);

    if let Some(path) = &cli.config {
        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        settings = settings.with_file(&file);
    }

    let settings = settings
        .with_output_dir(cli.output_dir.clone())
        .with_escape_flag(cli.escape_html);
    settings.validate()?;
    Ok(settings)
}

fn main() {
    let cli = CliConfig::parse();

    let Some(input) = cli.input.clone() else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    let settings = match load_settings(&cli, input) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref(), settings.log_format);
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(settings.output_dir.clone());
    let pipeline = ReportPipeline::new(storage, settings);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => println!("Created: {}", output_path),
        Err(e) => fail(&e),
    }
}
