use clap::Parser;
use prop_convention::utils::logger;
use prop_convention::{
    CliConfig, OutputFormat, PropertyError, Scenario, ScenarioConfig, ScenarioReport,
    ScenarioRunner,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Scenario failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), PropertyError> {
    let scenario = match &config.config {
        Some(path) => {
            tracing::info!("📄 Loading scenario from {}", path);
            ScenarioConfig::from_file(path)?.into_scenario()?
        }
        None => Scenario::documented(),
    };

    let report = ScenarioRunner::new(scenario).run()?;
    print_report(&report, config.format)
}

fn print_report(report: &ScenarioReport, format: OutputFormat) -> Result<(), PropertyError> {
    match format {
        OutputFormat::Text => {
            for line in &report.lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
