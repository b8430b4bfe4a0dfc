//! Quote pricing module.
//!
//! Turns an order (quantity, colors, underbase, print locations) into a priced
//! quote. Everything here is pure calculation.

pub mod calculators;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use calculators::{
    calculate_quote, calculate_quote_with, discount_rate, parse_color_count, quote_breakdown,
    round_money, QuoteBreakdown, QuoteResult, DEFAULT_COLOR_COUNT,
};
pub use requests::{PrintLocation, QuoteRequest};
pub use responses::QuoteResponse;
