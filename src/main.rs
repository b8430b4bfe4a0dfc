use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use garment_quote::pricing::{calculate_quote_with, QuoteRequest, QuoteResponse};
use garment_quote::scenarios::{run_scenarios, write_quote};
use garment_quote::{init_tracing, RateCard};

#[derive(Debug, Parser)]
#[command(name = "garment-quote", version, about = "Price custom garment printing orders")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read rate overrides from the environment (QUOTE_* variables, .env)
    #[arg(long, global = true)]
    env_rates: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Commands {
    /// Quote the built-in sample orders
    Scenarios,
    /// Quote a single order
    Quote {
        /// Number of garments
        #[arg(short, long)]
        qty: u32,
        /// Color description, e.g. "2 colors"
        #[arg(short, long)]
        colors: Option<String>,
        /// "Yes" adds the underbase surcharge
        #[arg(long)]
        light_on_dark: Option<String>,
        /// Print location (repeatable)
        #[arg(short, long = "location", required = true)]
        locations: Vec<String>,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run; the sample report when none is given
    fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Scenarios)
    }

    fn rate_card(&self) -> Result<RateCard> {
        if self.env_rates {
            RateCard::from_env().context("Failed to load rate card from environment")
        } else {
            Ok(RateCard::default())
        }
    }
}

/// Execute a command against the given rates, writing to `out`.
fn execute<W: Write>(command: Commands, rates: &RateCard, out: &mut W) -> Result<()> {
    match command {
        Commands::Scenarios => {
            run_scenarios(out, rates).context("Failed to write scenario report")?;
        }
        Commands::Quote {
            qty,
            colors,
            light_on_dark,
            locations,
            json,
        } => {
            let request = QuoteRequest {
                quantity: qty,
                color_spec: colors,
                light_on_dark,
                locations: locations.iter().map(|l| l.as_str().into()).collect(),
            };
            let result = calculate_quote_with(&request, rates);

            if json {
                serde_json::to_writer_pretty(&mut *out, &QuoteResponse::from(&result))
                    .context("Failed to serialize quote")?;
                writeln!(out)?;
            } else {
                write_quote(out, "Quote", &request, &result).context("Failed to write quote")?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rates = cli.rate_card()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    execute(cli.command(), &rates, &mut out)
}
