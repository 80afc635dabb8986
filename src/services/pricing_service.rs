//! Calculador de precios de tickets
//!
//! `price = round(base_price × distance × multiplier, 2)`. El precio nunca
//! se almacena: se recalcula siempre a partir del estado actual del vuelo
//! y su ruta, por lo que un cambio posterior de base_price o distancia
//! cambia el total de órdenes históricas.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::models::airplane::SeatClass;

/// Precio de un ticket para un vuelo y una clase de asiento
pub fn calculate_ticket_price(
    base_price: Decimal,
    distance: i32,
    seat_class: SeatClass,
    pricing: &PricingConfig,
) -> Decimal {
    let multiplier = pricing.multiplier(seat_class);
    (base_price * Decimal::from(distance) * multiplier).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config() -> PricingConfig {
        PricingConfig {
            economy_multiplier: Decimal::from_str("1.0").unwrap(),
            business_multiplier: Decimal::from_str("1.5").unwrap(),
        }
    }

    #[test]
    fn test_jfk_lax_economy_example() {
        // base_price=0.10, distance=1000, economy 1.0 -> 100.00
        let price = calculate_ticket_price(
            Decimal::from_str("0.10").unwrap(),
            1000,
            SeatClass::Economy,
            &config(),
        );
        assert_eq!(price, Decimal::from_str("100.00").unwrap());
    }

    #[test]
    fn test_business_multiplier_applied() {
        let price = calculate_ticket_price(
            Decimal::from_str("0.10").unwrap(),
            1000,
            SeatClass::Business,
            &config(),
        );
        assert_eq!(price, Decimal::from_str("150.00").unwrap());
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let price = calculate_ticket_price(
            Decimal::from_str("0.333").unwrap(),
            7,
            SeatClass::Economy,
            &config(),
        );
        assert_eq!(price, Decimal::from_str("2.33").unwrap());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let base = Decimal::from_str("12.34").unwrap();
        let first = calculate_ticket_price(base, 250, SeatClass::Business, &config());
        let second = calculate_ticket_price(base, 250, SeatClass::Business, &config());
        assert_eq!(first, second);
    }
}
