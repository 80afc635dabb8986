//! Controller de Route
//!
//! Las rutas son pares ordenados (source, destination): A -> B y B -> A
//! son rutas distintas y ambas pueden existir, pero el mismo par ordenado
//! no puede repetirse y un aeropuerto no puede rutear contra sí mismo.

use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::airport_dto::{
    AirportListResponse, CreateRouteRequest, RouteListResponse, RouteRetrieveResponse,
    UpdateRouteRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::repositories::{AirportRepository, RouteRepository};
use crate::services::routing_service::find_route_collision;
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError};

pub struct RouteController {
    repository: RouteRepository,
    airports: AirportRepository,
}

impl RouteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: RouteRepository::new(state.pool.clone()),
            airports: AirportRepository::new(state.pool.clone()),
        }
    }

    pub async fn create(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateRouteRequest,
    ) -> Result<RouteListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        self.check_endpoints(request.source_id, request.destination_id, None)
            .await?;

        let route = self
            .repository
            .create(request.source_id, request.destination_id, request.distance)
            .await?;

        self.to_list_response(route.id).await
    }

    pub async fn list(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<RouteListResponse>, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let routes = self.repository.list().await?;

        Ok(routes
            .into_iter()
            .map(|r| RouteListResponse {
                id: r.id,
                source: r.source_city,
                destination: r.destination_city,
                distance: r.distance,
                source_id: r.source_id,
                destination_id: r.destination_id,
            })
            .collect())
    }

    pub async fn get_by_id(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<RouteRetrieveResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let route = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        Ok(RouteRetrieveResponse {
            id: route.id,
            source: self.airport_response(route.source_id).await?,
            destination: self.airport_response(route.destination_id).await?,
            distance: route.distance,
        })
    }

    pub async fn update(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateRouteRequest,
    ) -> Result<RouteListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        let source_id = request.source_id.unwrap_or(current.source_id);
        let destination_id = request.destination_id.unwrap_or(current.destination_id);

        self.check_endpoints(source_id, destination_id, Some(id))
            .await?;

        let route = self
            .repository
            .update(id, request.source_id, request.destination_id, request.distance)
            .await?;

        self.to_list_response(route.id).await
    }

    pub async fn delete(&self, user: Option<&AuthenticatedUser>, id: Uuid) -> Result<(), AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        self.repository.delete(id).await
    }

    /// Pre-chequeos de extremos: existencia de ambos aeropuertos,
    /// source != destination y par ordenado no repetido.
    async fn check_endpoints(
        &self,
        source_id: Uuid,
        destination_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<(), AppError> {
        if source_id == destination_id {
            return Err(same_endpoints_error());
        }

        self.airports
            .find_by_id(source_id)
            .await?
            .ok_or_else(|| field_error("source_id", "Airport does not exist."))?;
        self.airports
            .find_by_id(destination_id)
            .await?
            .ok_or_else(|| field_error("destination_id", "Airport does not exist."))?;

        let existing = self.repository.endpoints_for_source(source_id).await?;
        if find_route_collision(&existing, source_id, destination_id, exclude).is_some() {
            return Err(field_error("route", "This route already exists."));
        }

        Ok(())
    }

    async fn airport_response(&self, id: Uuid) -> Result<AirportListResponse, AppError> {
        let airport = self
            .airports
            .find_with_counts(id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id.to_string()))?;

        Ok(AirportListResponse {
            id: airport.id,
            name: airport.name,
            image: airport.image_url,
            closest_big_city: airport.closest_big_city,
            source_routes_total: airport.source_routes_total,
            destination_routes_total: airport.destination_routes_total,
        })
    }

    async fn to_list_response(&self, id: Uuid) -> Result<RouteListResponse, AppError> {
        let route = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        let source = self
            .airports
            .find_by_id(route.source_id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &route.source_id.to_string()))?;
        let destination = self
            .airports
            .find_by_id(route.destination_id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &route.destination_id.to_string()))?;

        Ok(RouteListResponse {
            id: route.id,
            source: source.closest_big_city,
            destination: destination.closest_big_city,
            distance: route.distance,
            source_id: route.source_id,
            destination_id: route.destination_id,
        })
    }
}

/// Error con clave en ambos extremos cuando source == destination
fn same_endpoints_error() -> AppError {
    let mut errors = ValidationErrors::new();

    let mut source = ValidationError::new("invalid");
    source.message = Some("Must be different from destination_id.".into());
    errors.add("source_id", source);

    let mut destination = ValidationError::new("invalid");
    destination.message = Some("Must be different from source_id.".into());
    errors.add("destination_id", destination);

    AppError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_endpoints_error_keys_both_fields() {
        match same_endpoints_error() {
            AppError::Validation(errors) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("source_id"));
                assert!(fields.contains_key("destination_id"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
