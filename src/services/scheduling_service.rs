//! Detección de conflictos de programación de vuelos
//!
//! Un avión no puede tener dos vuelos con el mismo departure_time, y un
//! tripulante no puede aparecer en dos vuelos con el mismo departure_time.
//!
//! La comparación es por igualdad exacta de timestamp, NO por solapamiento
//! de intervalos: dos vuelos del mismo avión a horas distintas nunca se
//! marcan aunque sus duraciones se solapen.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Salida programada existente contra la que se valida un vuelo nuevo
#[derive(Debug, Clone)]
pub struct ScheduledDeparture {
    pub flight_id: Uuid,
    pub departure_time: DateTime<Utc>,
}

/// Buscar un vuelo existente con exactamente el mismo departure_time.
///
/// `exclude` quita de la búsqueda al propio vuelo cuando se trata de
/// un update. Devuelve el id del vuelo en conflicto para poder nombrarlo
/// en el mensaje de error.
pub fn find_departure_collision(
    existing: &[ScheduledDeparture],
    departure_time: DateTime<Utc>,
    exclude: Option<Uuid>,
) -> Option<Uuid> {
    existing
        .iter()
        .filter(|scheduled| Some(scheduled.flight_id) != exclude)
        .find(|scheduled| scheduled.departure_time == departure_time)
        .map(|scheduled| scheduled.flight_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn departure(flight_id: Uuid, time: DateTime<Utc>) -> ScheduledDeparture {
        ScheduledDeparture {
            flight_id,
            departure_time: time,
        }
    }

    #[test]
    fn test_identical_departure_time_collides() {
        let time = Utc::now();
        let other = Uuid::new_v4();
        let existing = vec![departure(other, time)];

        assert_eq!(find_departure_collision(&existing, time, None), Some(other));
    }

    #[test]
    fn test_different_departure_times_never_collide() {
        // Comportamiento documentado: no hay chequeo de solapamiento de
        // intervalos. Un vuelo una hora después pasa aunque el anterior
        // siga en el aire.
        let time = Utc::now();
        let existing = vec![departure(Uuid::new_v4(), time)];

        let an_hour_later = time + Duration::hours(1);
        assert_eq!(find_departure_collision(&existing, an_hour_later, None), None);
    }

    #[test]
    fn test_update_excludes_own_flight() {
        let time = Utc::now();
        let own = Uuid::new_v4();
        let existing = vec![departure(own, time)];

        assert_eq!(find_departure_collision(&existing, time, Some(own)), None);
    }

    #[test]
    fn test_update_still_collides_with_other_flights() {
        let time = Utc::now();
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();
        let existing = vec![departure(own, time), departure(other, time)];

        assert_eq!(find_departure_collision(&existing, time, Some(own)), Some(other));
    }
}
