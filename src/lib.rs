//! Quote calculator for custom garment printing.
//!
//! The pricing formula lives in [`pricing`]; [`config`] holds the rate card and
//! [`scenarios`] the sample orders used by the command line report.

pub mod config;
pub mod error;
pub mod pricing;
pub mod scenarios;

pub use config::RateCard;
pub use error::{AppError, Result};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "garment_quote=debug,info"
    } else {
        "garment_quote=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }
}
