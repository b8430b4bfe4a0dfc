//! Core quote calculation functions.
//!
//! Pure functions for print pricing math - no I/O. Malformed input degrades to
//! defaults instead of failing, so nothing here returns a `Result`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateCard;
use crate::pricing::requests::QuoteRequest;

/// Color count assumed when a color spec is missing or unreadable.
pub const DEFAULT_COLOR_COUNT: u32 = 5;

/// Round to specified decimal places, halves rounding up (away from zero).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use garment_quote::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(159.845), 2), dec!(159.85));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Read the number of colors out of a free-form description.
///
/// Takes the leading integer ("2 colors" -> 2). Anything that doesn't yield a
/// positive number, including a missing spec, falls back to
/// [`DEFAULT_COLOR_COUNT`].
pub fn parse_color_count(raw: Option<&str>) -> u32 {
    parse_color_count_or(raw, DEFAULT_COLOR_COUNT)
}

/// Same as [`parse_color_count`] with an explicit fallback.
pub fn parse_color_count_or(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(leading_integer) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => default,
    }
}

/// Leading signed integer of a string, ignoring leading whitespace and
/// anything after the digits. Saturates instead of overflowing.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Discount fraction for an order size. Exactly one tier applies.
pub fn discount_rate(quantity: u32, rates: &RateCard) -> Decimal {
    rates
        .discount_tiers
        .iter()
        .filter(|tier| quantity >= tier.min_quantity)
        .max_by_key(|tier| tier.min_quantity)
        .map(|tier| tier.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Multiply, pinning to `Decimal::MAX` instead of overflowing.
fn mul_money(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

/// Add, pinning to `Decimal::MAX` instead of overflowing.
fn add_money(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

/// Full-precision intermediate values of a quote
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub num_colors: u32,
    pub extra_colors: u32,
    pub underbase: bool,
    pub outside_location: bool,
    pub difficulty_factor: Decimal,
    pub number_of_locations: usize,
    pub price_per_garment: Decimal,
    pub garments_cost: Decimal,
    pub setup_fee: Decimal,
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

impl QuoteBreakdown {
    /// Round the money amounts for presentation. `discount_percent` stays raw.
    pub fn rounded(&self) -> QuoteResult {
        QuoteResult {
            price_per_garment: round_money(self.price_per_garment, 2),
            garments_cost: round_money(self.garments_cost, 2),
            setup_fee: round_money(self.setup_fee, 2),
            discount_percent: self.discount_percent,
            discount_amount: round_money(self.discount_amount, 2),
            total: round_money(self.total, 2),
        }
    }
}

/// Priced quote as shown to the customer
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteResult {
    pub price_per_garment: Decimal,
    pub garments_cost: Decimal,
    pub setup_fee: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// Quote an order at the standard rates.
pub fn calculate_quote(request: &QuoteRequest) -> QuoteResult {
    calculate_quote_with(request, &RateCard::default())
}

/// Quote an order against a specific rate card.
pub fn calculate_quote_with(request: &QuoteRequest, rates: &RateCard) -> QuoteResult {
    quote_breakdown(request, rates).rounded()
}

/// Work out every step of the quote without rounding.
///
/// The top-level color spec drives both the per-garment price and the setup
/// fee; per-location color specs are not consulted.
pub fn quote_breakdown(request: &QuoteRequest, rates: &RateCard) -> QuoteBreakdown {
    let num_colors = parse_color_count_or(request.color_spec.as_deref(), rates.default_color_count);
    let extra_colors = num_colors.saturating_sub(1);

    let mut price_per_garment = add_money(
        rates.base_per_garment,
        mul_money(Decimal::from(extra_colors), rates.extra_color_surcharge),
    );
    let underbase = request.needs_underbase();
    if underbase {
        price_per_garment = add_money(price_per_garment, rates.underbase_surcharge);
    }

    let outside_location = request
        .locations
        .iter()
        .any(|location| !rates.is_easy_location(location.name()));
    let difficulty_factor = if outside_location {
        rates.difficulty_factor
    } else {
        Decimal::ONE
    };

    let number_of_locations = request.locations.len();
    let setup_fee = mul_money(
        mul_money(rates.setup_fee_per_color_per_location, Decimal::from(num_colors)),
        Decimal::from(number_of_locations),
    );
    let garments_cost = mul_money(
        mul_money(price_per_garment, Decimal::from(request.quantity)),
        difficulty_factor,
    );
    let subtotal = add_money(garments_cost, setup_fee);

    let discount_percent = discount_rate(request.quantity, rates);
    let discount_amount = mul_money(subtotal, discount_percent);
    let total = subtotal.checked_sub(discount_amount).unwrap_or(Decimal::MIN);

    debug!(
        quantity = request.quantity,
        num_colors,
        underbase,
        outside_location,
        number_of_locations,
        %subtotal,
        %discount_percent,
        "Quote calculated"
    );

    QuoteBreakdown {
        num_colors,
        extra_colors,
        underbase,
        outside_location,
        difficulty_factor,
        number_of_locations,
        price_per_garment,
        garments_cost,
        setup_fee,
        subtotal,
        discount_percent,
        discount_amount,
        total,
    }
}
