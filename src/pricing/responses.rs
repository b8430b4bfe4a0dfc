//! Response DTOs for quote output.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::QuoteResult;

/// Quote as serialized for JSON consumers. Amounts are decimal strings.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_garment: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub garments_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub setup_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl From<&QuoteResult> for QuoteResponse {
    fn from(result: &QuoteResult) -> Self {
        Self {
            price_per_garment: result.price_per_garment,
            garments_cost: result.garments_cost,
            setup_fee: result.setup_fee,
            discount_percent: result.discount_percent,
            discount_amount: result.discount_amount,
            total: result.total,
        }
    }
}
