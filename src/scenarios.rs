//! Sample orders and the plain-text quote report.

use std::io::Write;

use tracing::info;

use crate::config::RateCard;
use crate::error::Result;
use crate::pricing::{calculate_quote_with, PrintLocation, QuoteRequest, QuoteResult};

/// A named sample order
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub request: QuoteRequest,
}

/// The sample orders, in report order.
pub fn sample_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Small single color front",
            request: QuoteRequest::new(24, vec!["Front Center".into()])
                .with_color_spec("1 color")
                .with_light_on_dark("No"),
        },
        Scenario {
            name: "Medium two color outside loc",
            request: QuoteRequest::new(120, vec!["Left Chest".into(), "Back Center".into()])
                .with_color_spec("2 colors")
                .with_light_on_dark("Yes"),
        },
        Scenario {
            name: "Large multi color many locs",
            request: QuoteRequest::new(
                350,
                vec!["Front Center".into(), "Back Center".into(), "Sleeve".into()],
            )
            .with_color_spec("4 colors")
            .with_light_on_dark("No"),
        },
        Scenario {
            name: "7 colors small qty",
            request: QuoteRequest::new(12, vec!["Front Center".into()])
                .with_color_spec("7 colors")
                .with_light_on_dark("Not sure"),
        },
        Scenario {
            name: "Front 5, Back 1 example",
            request: QuoteRequest::new(
                24,
                vec![
                    PrintLocation::Detailed {
                        name: "Front Center".to_string(),
                        color_spec: Some("5 colors".to_string()),
                    },
                    PrintLocation::Detailed {
                        name: "Back Center".to_string(),
                        color_spec: Some("1 color".to_string()),
                    },
                ],
            )
            .with_light_on_dark("No"),
        },
    ]
}

/// Write one quote block: header, inputs, six result lines, blank separator.
pub fn write_quote<W: Write>(
    out: &mut W,
    name: &str,
    request: &QuoteRequest,
    result: &QuoteResult,
) -> Result<()> {
    let locations: Vec<&str> = request.locations.iter().map(PrintLocation::name).collect();

    writeln!(out, "--- {} ---", name)?;
    writeln!(
        out,
        "Qty: {} Colors: {} LightOnDark: {} Locations: {}",
        request.quantity,
        request.color_spec.as_deref().unwrap_or("null"),
        request.light_on_dark.as_deref().unwrap_or("null"),
        locations.join(", ")
    )?;
    writeln!(out, "Price per garment: {}", result.price_per_garment.normalize())?;
    writeln!(out, "Garments cost: {}", result.garments_cost.normalize())?;
    writeln!(out, "Setup fee: {}", result.setup_fee.normalize())?;
    writeln!(out, "Discount %: {}", result.discount_percent.normalize())?;
    writeln!(out, "Discount amount: {}", result.discount_amount.normalize())?;
    writeln!(out, "Total: {}", result.total.normalize())?;
    writeln!(out)?;

    Ok(())
}

/// Quote every sample order in sequence and write the report.
pub fn run_scenarios<W: Write>(out: &mut W, rates: &RateCard) -> Result<()> {
    let scenarios = sample_scenarios();
    info!("Running {} sample scenarios", scenarios.len());

    for scenario in &scenarios {
        let result = calculate_quote_with(&scenario.request, rates);
        write_quote(out, scenario.name, &scenario.request, &result)?;
    }

    Ok(())
}
