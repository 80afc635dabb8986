//! Detección de rutas duplicadas
//!
//! Las rutas son pares ordenados: A -> B y B -> A son rutas distintas y
//! pueden coexistir, pero el mismo par ordenado no puede repetirse.

use uuid::Uuid;

/// Extremos de una ruta existente contra la que se valida una ruta nueva
#[derive(Debug, Clone)]
pub struct RouteEndpoints {
    pub route_id: Uuid,
    pub source_id: Uuid,
    pub destination_id: Uuid,
}

/// Buscar una ruta existente con exactamente el mismo par ordenado.
///
/// `exclude` quita de la búsqueda a la propia ruta cuando se trata de
/// un update. Devuelve el id de la ruta en conflicto.
pub fn find_route_collision(
    existing: &[RouteEndpoints],
    source_id: Uuid,
    destination_id: Uuid,
    exclude: Option<Uuid>,
) -> Option<Uuid> {
    existing
        .iter()
        .filter(|route| Some(route.route_id) != exclude)
        .find(|route| route.source_id == source_id && route.destination_id == destination_id)
        .map(|route| route.route_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(route_id: Uuid, source_id: Uuid, destination_id: Uuid) -> RouteEndpoints {
        RouteEndpoints {
            route_id,
            source_id,
            destination_id,
        }
    }

    #[test]
    fn test_duplicate_ordered_pair_collides() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let other = Uuid::new_v4();
        let existing = vec![endpoints(other, a, b)];

        assert_eq!(find_route_collision(&existing, a, b, None), Some(other));
    }

    #[test]
    fn test_reversed_pair_does_not_collide() {
        // A -> B existente no bloquea B -> A: el par es ordenado
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let existing = vec![endpoints(Uuid::new_v4(), a, b)];

        assert_eq!(find_route_collision(&existing, b, a, None), None);
    }

    #[test]
    fn test_update_excludes_own_route() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let own = Uuid::new_v4();
        let existing = vec![endpoints(own, a, b)];

        assert_eq!(find_route_collision(&existing, a, b, Some(own)), None);
    }

    #[test]
    fn test_update_still_collides_with_other_routes() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();
        let existing = vec![endpoints(own, a, b), endpoints(other, a, b)];

        assert_eq!(find_route_collision(&existing, a, b, Some(own)), Some(other));
    }
}
