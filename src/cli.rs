use clap::Parser;
use std::path::PathBuf;

use tco_compare::application::dto::OutputFormat;
use tco_compare::tco::policies::RankingOrder;

/// Compare the total cost of ownership of competing vendors
#[derive(Parser, Debug)]
#[command(name = "tco-compare")]
#[command(version)]
#[command(
    about = "Compare the total cost of ownership of competing vendors for one deployment",
    long_about = None
)]
pub struct Args {
    /// Vendor catalog file (YAML, JSON or TOML)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Buyer profile file (YAML, JSON or TOML); flags below override its values
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Industry vertical, e.g. healthcare, finance, education
    #[arg(long)]
    pub industry: Option<String>,

    /// Number of users
    #[arg(long, allow_negative_numbers = true)]
    pub users: Option<f64>,

    /// Number of managed devices
    #[arg(long, allow_negative_numbers = true)]
    pub devices: Option<f64>,

    /// Planning horizon in months
    #[arg(long, allow_negative_numbers = true)]
    pub timeframe: Option<f64>,

    /// Catalog id of the vendor in use today; its cost becomes the ROI baseline
    #[arg(long, value_name = "VENDOR_ID")]
    pub current_vendor: Option<String>,

    /// Required capability tag. Can be specified multiple times: -r mfa -r encryption
    #[arg(short, long = "require", value_name = "TAG")]
    pub require: Vec<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Result order: catalog, total-cost or composite
    #[arg(long)]
    pub rank: Option<RankingOrder>,

    /// Internal cost of one administrator hour
    #[arg(long, allow_negative_numbers = true)]
    pub labor_rate: Option<f64>,

    /// Config file (defaults to tco-compare.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any vendor could not be evaluated
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
