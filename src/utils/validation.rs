//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y parsing de los query params de búsqueda.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;
use validator::ValidationError;

use crate::utils::errors::{field_error, AppError};

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Convertir un día `YYYY-MM-DD` al intervalo semiabierto `[00:00, +24h)`
/// que usan los filtros `departure-day` y `order-day`.
pub fn day_bounds(day: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let date = validate_date(day)
        .map_err(|_| field_error("day", format!("'{}' is not a valid YYYY-MM-DD date", day)))?;

    let start = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::Internal("invalid midnight timestamp".to_string()))?
        .and_utc();
    let end = start + Duration::days(1);

    Ok((start, end))
}

/// Parsear una lista separada por comas de UUIDs (`crew-ids=a,b,c`)
pub fn params_to_ids(params: &str) -> Result<Vec<Uuid>, AppError> {
    params
        .split(',')
        .map(|part| {
            let part = part.trim();
            Uuid::parse_str(part)
                .map_err(|_| field_error("ids", format!("'{}' is not a valid id", part)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("not-a-date").is_err());
    }

    #[test]
    fn test_day_bounds_half_open_interval() {
        let (start, end) = day_bounds("2024-06-01").unwrap();
        assert_eq!(start.to_rfc3339(), "2024-06-01T00:00:00+00:00");
        assert_eq!(end - start, Duration::days(1));
    }

    #[test]
    fn test_day_bounds_rejects_garbage() {
        assert!(day_bounds("01-06-2024").is_err());
    }

    #[test]
    fn test_params_to_ids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let parsed = params_to_ids(&format!("{}, {}", a, b)).unwrap();
        assert_eq!(parsed, vec![a, b]);

        assert!(params_to_ids("not-an-id").is_err());
    }

}
