//! Configuración de multiplicadores de precio por clase de asiento
//!
//! Los multiplicadores se cargan una vez al arranque y se pasan
//! explícitamente al calculador de precios; no hay estado global.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::airplane::SeatClass;

/// Multiplicadores de precio por clase de asiento
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub economy_multiplier: Decimal,
    pub business_multiplier: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            economy_multiplier: read_multiplier("ECONOMY_SEAT_CLASS_MULTIPLIER", "1.0"),
            business_multiplier: read_multiplier("BUSINESS_SEAT_CLASS_MULTIPLIER", "1.5"),
        }
    }
}

impl PricingConfig {
    /// Obtener el multiplicador configurado para una clase de asiento
    pub fn multiplier(&self, seat_class: SeatClass) -> Decimal {
        match seat_class {
            SeatClass::Economy => self.economy_multiplier,
            SeatClass::Business => self.business_multiplier,
        }
    }
}

fn read_multiplier(var: &str, default: &str) -> Decimal {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    Decimal::from_str(&raw)
        .unwrap_or_else(|_| panic!("{} must be a valid decimal number", var))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_per_seat_class() {
        let config = PricingConfig {
            economy_multiplier: Decimal::from_str("1.0").unwrap(),
            business_multiplier: Decimal::from_str("1.5").unwrap(),
        };

        assert_eq!(config.multiplier(SeatClass::Economy), Decimal::from_str("1.0").unwrap());
        assert_eq!(config.multiplier(SeatClass::Business), Decimal::from_str("1.5").unwrap());
    }
}
