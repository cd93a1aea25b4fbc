mod cli;
mod config;

use anyhow::bail;
use cli::Args;
use config::ConfigFile;
use std::path::PathBuf;
use std::process;
use tco_compare::adapters::outbound::console::StderrProgressReporter;
use tco_compare::adapters::outbound::filesystem::FileSystemReader;
use tco_compare::application::dto::{ComparisonRequest, OutputFormat};
use tco_compare::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use tco_compare::application::use_cases::CompareVendorsUseCase;
use tco_compare::application::{ComparisonEngine, EngineSettings};
use tco_compare::ports::outbound::BuyerProfileReader;
use tco_compare::shared::error::ExitCode;
use tco_compare::shared::Result;
use tco_compare::tco::domain::RawTcoConfig;
use tco_compare::tco::policies::RankingOrder;
use tco_compare::tco::services::DEFAULT_LABOR_RATE;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging the config file and the command line
#[derive(Debug, Clone, PartialEq)]
struct RunSettings {
    catalog: PathBuf,
    format: OutputFormat,
    ranking: RankingOrder,
    labor_rate: f64,
    strict: bool,
    output: Option<PathBuf>,
}

async fn run(args: Args) -> Result<ExitCode> {
    // Load the config file, explicit or discovered
    let config_file = match args.config.as_deref() {
        Some(path) => {
            let loaded = config::load_config_from_path(path)?;
            eprintln!("📋 Loaded config from: {}", path.display());
            Some(loaded)
        }
        None => {
            let discovered = config::discover_config(&std::env::current_dir()?)?;
            if discovered.is_some() {
                eprintln!("📋 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    let settings = resolve_settings(&args, config_file)?;

    // Assemble the buyer configuration: profile file first, then flags
    let reader = FileSystemReader::new();
    let base = match args.profile.as_deref() {
        Some(path) => reader.read_buyer_profile(path)?,
        None => RawTcoConfig::default(),
    };
    let buyer = apply_overrides(base, &args);

    // Create adapters and engine (Dependency Injection)
    let engine = ComparisonEngine::new(EngineSettings {
        labor_rate_per_hour: settings.labor_rate,
    });
    let use_case = CompareVendorsUseCase::new(reader, StderrProgressReporter::new(), engine);

    let request = ComparisonRequest::new(settings.catalog.clone(), buyer, settings.ranking);
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&response.results)?;

    PresenterFactory::create(PresenterType::from_output(settings.output.clone()))
        .present(&formatted_output)?;

    if settings.strict && response.has_vendor_failures() {
        eprintln!(
            "❌ {} vendor(s) could not be evaluated (--strict).",
            response.results.failures().len()
        );
        return Ok(ExitCode::VendorFailures);
    }
    Ok(ExitCode::Success)
}

/// Command-line values win over the config file, which wins over defaults.
fn resolve_settings(args: &Args, config_file: Option<ConfigFile>) -> Result<RunSettings> {
    let config_file = config_file.unwrap_or_default();

    let Some(catalog) = args.catalog.clone().or_else(|| config_file.catalog.clone()) else {
        bail!(
            "No vendor catalog specified.\n\n\
             💡 Hint: Pass --catalog <FILE> or set 'catalog' in {}.",
            config::CONFIG_FILENAME
        );
    };

    Ok(RunSettings {
        catalog,
        format: args
            .format
            .or_else(|| config_file.output_format())
            .unwrap_or_default(),
        ranking: args
            .rank
            .or_else(|| config_file.ranking_order())
            .unwrap_or_default(),
        labor_rate: args
            .labor_rate
            .or(config_file.labor_rate)
            .unwrap_or(DEFAULT_LABOR_RATE),
        strict: args.strict || config_file.strict.unwrap_or(false),
        output: args.output.clone(),
    })
}

/// Flags replace the matching profile values; requirement flags replace the whole list.
fn apply_overrides(mut buyer: RawTcoConfig, args: &Args) -> RawTcoConfig {
    if let Some(ref industry) = args.industry {
        buyer.industry = industry.clone();
    }
    if let Some(users) = args.users {
        buyer.users = users;
    }
    if let Some(devices) = args.devices {
        buyer.devices = devices;
    }
    if let Some(timeframe) = args.timeframe {
        buyer.timeframe = timeframe;
    }
    if let Some(ref current) = args.current_vendor {
        buyer.current_vendor = Some(current.clone());
    }
    if !args.require.is_empty() {
        buyer.requirements = Some(args.require.clone());
    }
    buyer
}
