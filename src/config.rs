//! Rate card configuration.
//!
//! Every constant the quote formula uses lives here. The defaults are the
//! shop's published rates; `from_env` lets an operator override the money
//! rates without a rebuild.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use crate::error::{AppError, Result};
use crate::pricing::calculators::DEFAULT_COLOR_COUNT;

pub const ENV_BASE_PER_GARMENT: &str = "QUOTE_BASE_PER_GARMENT";
pub const ENV_EXTRA_COLOR_SURCHARGE: &str = "QUOTE_EXTRA_COLOR_SURCHARGE";
pub const ENV_UNDERBASE_SURCHARGE: &str = "QUOTE_UNDERBASE_SURCHARGE";
pub const ENV_SETUP_FEE: &str = "QUOTE_SETUP_FEE";
pub const ENV_DIFFICULTY_FACTOR: &str = "QUOTE_DIFFICULTY_FACTOR";

/// Upper bound for any per-garment or setup rate override.
pub const MAX_MONEY_RATE: Decimal = dec!(100000);
/// Upper bound for the difficulty multiplier override.
pub const MAX_DIFFICULTY_FACTOR: Decimal = dec!(10);

/// A quantity threshold and the discount it unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    pub min_quantity: u32,
    pub rate: Decimal,
}

/// Pricing constants for a quote
#[derive(Debug, Clone, PartialEq)]
pub struct RateCard {
    /// Price of a one-color print on a single garment
    pub base_per_garment: Decimal,
    /// Added per garment for each color beyond the first
    pub extra_color_surcharge: Decimal,
    /// Added per garment when printing light ink on dark fabric
    pub underbase_surcharge: Decimal,
    /// One-time fee per color per print location
    pub setup_fee_per_color_per_location: Decimal,
    /// Multiplier on garment cost when any location is not an easy one
    pub difficulty_factor: Decimal,
    /// Color count used when the color spec can't be parsed
    pub default_color_count: u32,
    /// Locations that don't trigger the difficulty factor
    pub easy_locations: Vec<String>,
    /// Any order; the highest threshold an order meets wins
    pub discount_tiers: Vec<DiscountTier>,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base_per_garment: dec!(8.00),
            extra_color_surcharge: dec!(1.50),
            underbase_surcharge: dec!(1.50),
            setup_fee_per_color_per_location: dec!(30.00),
            difficulty_factor: dec!(1.12),
            default_color_count: DEFAULT_COLOR_COUNT,
            easy_locations: vec!["Front Center".to_string(), "Back Center".to_string()],
            discount_tiers: vec![
                DiscountTier { min_quantity: 500, rate: dec!(0.25) },
                DiscountTier { min_quantity: 250, rate: dec!(0.20) },
                DiscountTier { min_quantity: 100, rate: dec!(0.10) },
                DiscountTier { min_quantity: 50, rate: dec!(0.05) },
            ],
        }
    }
}

impl RateCard {
    /// Load the rate card from the environment (and `.env`, if present).
    ///
    /// Unset variables keep their default; set but unparseable ones are an error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a rate card from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut card = Self::default();

        let overrides: [(&str, &mut Decimal, Decimal); 5] = [
            (ENV_BASE_PER_GARMENT, &mut card.base_per_garment, MAX_MONEY_RATE),
            (ENV_EXTRA_COLOR_SURCHARGE, &mut card.extra_color_surcharge, MAX_MONEY_RATE),
            (ENV_UNDERBASE_SURCHARGE, &mut card.underbase_surcharge, MAX_MONEY_RATE),
            (ENV_SETUP_FEE, &mut card.setup_fee_per_color_per_location, MAX_MONEY_RATE),
            (ENV_DIFFICULTY_FACTOR, &mut card.difficulty_factor, MAX_DIFFICULTY_FACTOR),
        ];

        for (key, slot, max) in overrides {
            if let Some(raw) = lookup(key) {
                *slot = parse_rate(key, &raw, max)?;
                info!("Rate override {} = {}", key, slot);
            }
        }

        Ok(card)
    }

    /// True when the location is one of the easy standard placements
    pub fn is_easy_location(&self, name: &str) -> bool {
        self.easy_locations.iter().any(|easy| easy == name)
    }
}

fn parse_rate(key: &str, raw: &str, max: Decimal) -> Result<Decimal> {
    match raw.trim().parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO && value <= max => Ok(value),
        _ => Err(AppError::InvalidRate {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_rates() {
        let card = RateCard::default();
        assert_eq!(card.base_per_garment, dec!(8.00));
        assert_eq!(card.extra_color_surcharge, dec!(1.50));
        assert_eq!(card.underbase_surcharge, dec!(1.50));
        assert_eq!(card.setup_fee_per_color_per_location, dec!(30.00));
        assert_eq!(card.difficulty_factor, dec!(1.12));
        assert_eq!(card.default_color_count, 5);
        assert_eq!(card.default_color_count, DEFAULT_COLOR_COUNT);
    }

    #[test]
    fn test_default_tiers_sorted_descending() {
        let card = RateCard::default();
        let mins: Vec<u32> = card.discount_tiers.iter().map(|t| t.min_quantity).collect();
        assert_eq!(mins, vec![500, 250, 100, 50]);
    }

    #[test]
    fn test_easy_locations() {
        let card = RateCard::default();
        assert!(card.is_easy_location("Front Center"));
        assert!(card.is_easy_location("Back Center"));
        assert!(!card.is_easy_location("Left Chest"));
        assert!(!card.is_easy_location("front center")); // exact match only
    }

    #[test]
    fn test_lookup_without_overrides_is_default() {
        let card = RateCard::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(card, RateCard::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let card = RateCard::from_lookup(lookup_from(&[
            (ENV_BASE_PER_GARMENT, "9.25"),
            (ENV_SETUP_FEE, " 25 "),
        ]))
        .unwrap();
        assert_eq!(card.base_per_garment, dec!(9.25));
        assert_eq!(card.setup_fee_per_color_per_location, dec!(25));
        assert_eq!(card.extra_color_surcharge, dec!(1.50));
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = RateCard::from_lookup(lookup_from(&[(ENV_DIFFICULTY_FACTOR, "lots")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRate { ref key, .. } if key == ENV_DIFFICULTY_FACTOR));
    }

    #[test]
    fn test_lookup_rejects_negative() {
        let result = RateCard::from_lookup(lookup_from(&[(ENV_UNDERBASE_SURCHARGE, "-1.50")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_rejects_oversized_rates() {
        let err = RateCard::from_lookup(lookup_from(&[(
            ENV_SETUP_FEE,
            "79228162514264337593543950335",
        )]))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRate { ref key, .. } if key == ENV_SETUP_FEE));

        assert!(RateCard::from_lookup(lookup_from(&[(ENV_DIFFICULTY_FACTOR, "10.01")])).is_err());
        assert!(RateCard::from_lookup(lookup_from(&[(ENV_DIFFICULTY_FACTOR, "10")])).is_ok());
        assert!(RateCard::from_lookup(lookup_from(&[(ENV_BASE_PER_GARMENT, "100000")])).is_ok());
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Only this test touches QUOTE_EXTRA_COLOR_SURCHARGE.
        std::env::set_var(ENV_EXTRA_COLOR_SURCHARGE, "2.25");
        let card = RateCard::from_env();
        std::env::remove_var(ENV_EXTRA_COLOR_SURCHARGE);

        let card = card.unwrap();
        assert_eq!(card.extra_color_surcharge, dec!(2.25));
        assert_eq!(card.base_per_garment, dec!(8.00));
    }
}
