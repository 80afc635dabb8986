//! Validación de asignación de asientos
//!
//! Un ticket reserva una coordenada (row, seat, seat_class) de un vuelo.
//! La coordenada debe existir en la configuración de asientos del avión
//! y no puede estar ya ocupada por otro ticket del mismo vuelo. No se
//! mantiene un mapa de asientos: cada chequeo reescanea los tickets
//! existentes del vuelo.

use uuid::Uuid;

use crate::models::airplane::{AirplaneSeatConfiguration, SeatClass};
use crate::utils::errors::{field_error, AppError};

/// Asiento ya reservado en un vuelo
#[derive(Debug, Clone)]
pub struct SeatAssignment {
    pub ticket_id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub seat_class: SeatClass,
}

/// Verificar que (row, seat) existe dentro de la configuración del avión
pub fn check_seat_in_configuration(
    config: &AirplaneSeatConfiguration,
    flight_id: Uuid,
    row: i32,
    seat: i32,
) -> Result<(), AppError> {
    if row > config.rows {
        return Err(field_error(
            "row",
            format!(
                "Airplane of this flight(id:{}) does not have row '{}' (rows: {}).",
                flight_id, row, config.rows
            ),
        ));
    }
    if seat > config.seats_in_row {
        return Err(field_error(
            "seat",
            format!(
                "Airplane of this flight(id:{}) does not have seat '{}' (seats_in_row: {}).",
                flight_id, seat, config.seats_in_row
            ),
        ));
    }
    Ok(())
}

/// Buscar un ticket existente que ya ocupe la misma coordenada.
///
/// `exclude` quita al propio ticket cuando se trata de un update.
pub fn find_seat_collision(
    existing: &[SeatAssignment],
    row: i32,
    seat: i32,
    seat_class: SeatClass,
    exclude: Option<Uuid>,
) -> Option<Uuid> {
    existing
        .iter()
        .filter(|assignment| Some(assignment.ticket_id) != exclude)
        .find(|assignment| {
            assignment.row == row && assignment.seat == seat && assignment.seat_class == seat_class
        })
        .map(|assignment| assignment.ticket_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy_config(rows: i32, seats_in_row: i32) -> AirplaneSeatConfiguration {
        AirplaneSeatConfiguration {
            id: Uuid::new_v4(),
            airplane_id: Uuid::new_v4(),
            seat_class: SeatClass::Economy,
            rows,
            seats_in_row,
        }
    }

    fn assignment(row: i32, seat: i32, seat_class: SeatClass) -> SeatAssignment {
        SeatAssignment {
            ticket_id: Uuid::new_v4(),
            row,
            seat,
            seat_class,
        }
    }

    #[test]
    fn test_seat_within_configuration_passes() {
        // rows=10, seats_in_row=6: la última coordenada válida es (10, 6)
        let config = economy_config(10, 6);
        assert!(check_seat_in_configuration(&config, Uuid::new_v4(), 10, 6).is_ok());
    }

    #[test]
    fn test_row_beyond_configuration_rejected() {
        let config = economy_config(10, 6);
        let err = check_seat_in_configuration(&config, Uuid::new_v4(), 11, 1).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("row"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_seat_beyond_configuration_rejected() {
        let config = economy_config(10, 6);
        let err = check_seat_in_configuration(&config, Uuid::new_v4(), 1, 7).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("seat"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_tuple_collides() {
        let taken = assignment(10, 6, SeatClass::Economy);
        let id = taken.ticket_id;
        let existing = vec![taken];

        assert_eq!(
            find_seat_collision(&existing, 10, 6, SeatClass::Economy, None),
            Some(id)
        );
    }

    #[test]
    fn test_same_coordinates_other_class_is_free() {
        let existing = vec![assignment(1, 1, SeatClass::Economy)];

        assert_eq!(find_seat_collision(&existing, 1, 1, SeatClass::Business, None), None);
    }

    #[test]
    fn test_update_excludes_own_ticket() {
        let own = assignment(2, 3, SeatClass::Economy);
        let own_id = own.ticket_id;
        let existing = vec![own];

        assert_eq!(
            find_seat_collision(&existing, 2, 3, SeatClass::Economy, Some(own_id)),
            None
        );
    }
}
