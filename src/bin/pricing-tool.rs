//! Pricing command line tool
//!
//! Quotes mailbox counts and inspects the pricing table without running the
//! HTTP server.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use mailbox_quote::config::{Config, DEFAULT_CONFIG_PATH, ServiceConfig};
use mailbox_quote::core::pricing::{
    CustomerStatus, PricingEngine, QuoteRequest, TierSelector, check_package_consistency,
    format_money,
};
use mailbox_quote::utils::logging::init_logging;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(name = "pricing-tool")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, env = "QUOTE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a quote
    Quote {
        /// Number of mailboxes (optional for named packages)
        #[arg(short, long)]
        mailboxes: Option<u32>,
        /// `custom` or a package name
        #[arg(short, long, default_value = "custom")]
        package: String,
        /// `new` or `existing`
        #[arg(short, long)]
        customer: CustomerStatus,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the tier table
    Tiers,
    /// Print the package catalogue
    Packages,
    /// Compare every package against the tier formula
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            mailboxes,
            package,
            customer,
            json,
        } => {
            let engine = load_engine(&cli.config).await?;
            let request = QuoteRequest {
                mailbox_count: mailboxes,
                package: TierSelector::from(package),
                customer_status: customer,
            };
            let quote = engine.compute_quote(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                let display = quote.display();
                println!("Tier:              {}", quote.tier_name);
                println!("Mailboxes:         {}", quote.mailbox_count);
                println!("Price per mailbox: {}", display.price_per_mailbox);
                println!("Monthly cost:      {}", display.monthly_cost);
                println!("Setup fee:         {}", display.setup_fee);
                println!("Total due today:   {}", display.total_due);
                println!("Annual cost:       {}", display.annual_cost);
            }
        }
        Commands::Tiers => {
            let engine = load_engine(&cli.config).await?;
            let tiers = engine.tiers();
            println!("{:<12} {:>10} {:>10} {:>10}", "Tier", "From", "To", "Rate");
            for (index, tier) in tiers.iter().enumerate() {
                let to = tiers
                    .get(index + 1)
                    .map(|next| next.min_mailboxes.saturating_sub(1).to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<12} {:>10} {:>10} {:>10}",
                    tier.name,
                    tier.min_mailboxes,
                    to,
                    format_money(tier.price_per_mailbox)
                );
            }
            println!(
                "Setup fee (new customers): {}",
                format_money(engine.config().setup_fee)
            );
        }
        Commands::Packages => {
            let engine = load_engine(&cli.config).await?;
            println!("{:<12} {:>8} {:>10} {:>10}", "Package", "Inboxes", "Monthly", "Per box");
            for package in engine.packages() {
                println!(
                    "{:<12} {:>8} {:>10} {:>10}",
                    package.name,
                    package.inbox_count,
                    format_money(package.monthly_price),
                    format_money(package.price_per_mailbox())
                );
            }
        }
        Commands::Check => {
            // Drift is reported here rather than rejected by validation
            let service = read_unvalidated(&cli.config).await?;
            let drifts = check_package_consistency(&service.pricing);
            if drifts.is_empty() {
                println!(
                    "All {} packages match the tier formula",
                    service.pricing.packages.len()
                );
            } else {
                for drift in &drifts {
                    println!("{}", drift);
                }
                if !service.pricing.allow_package_discounts {
                    bail!("{} package(s) disagree with the tier formula", drifts.len());
                }
            }
        }
    }

    Ok(())
}

async fn load_engine(path: &Path) -> anyhow::Result<PricingEngine> {
    let config = Config::load(path)
        .await
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    init_logging(config.logging())?;
    Ok(PricingEngine::new(config.pricing().clone())?)
}

async fn read_unvalidated(path: &Path) -> anyhow::Result<ServiceConfig> {
    let mut service = if tokio::fs::try_exists(path).await.unwrap_or(false) {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_yaml::from_str::<ServiceConfig>(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?
    } else {
        ServiceConfig::default()
    };
    service.apply_env_overrides()?;
    Ok(service)
}
