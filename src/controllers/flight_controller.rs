//! Controller de Flight
//!
//! Los vuelos atan ruta, avión y tripulación. Antes de escribir se
//! escanean las salidas programadas: el mismo avión o cualquier
//! tripulante pedido no pueden tener otro vuelo con exactamente el
//! mismo departure_time. El escaneo es advisory; la constraint
//! unique_airplane_departure_time respalda el caso del avión.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::{AirplaneListResponse, SeatConfigurationResponse};
use crate::dto::crew_dto::CrewMemberResponse;
use crate::dto::flight_dto::{
    CreateFlightRequest, FlightFilters, FlightListResponse, FlightRetrieveResponse,
    UpdateFlightRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::repositories::{AirplaneRepository, CrewRepository, FlightRepository, RouteRepository};
use crate::services::scheduling_service::find_departure_collision;
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError};
use crate::utils::validation::{day_bounds, params_to_ids};

pub struct FlightController {
    repository: FlightRepository,
    airplanes: AirplaneRepository,
    routes: RouteRepository,
    crew: CrewRepository,
}

impl FlightController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: FlightRepository::new(state.pool.clone()),
            airplanes: AirplaneRepository::new(state.pool.clone()),
            routes: RouteRepository::new(state.pool.clone()),
            crew: CrewRepository::new(state.pool.clone()),
        }
    }

    pub async fn create(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateFlightRequest,
    ) -> Result<FlightListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        check_base_price(request.base_price)?;

        self.routes
            .find_by_id(request.route_id)
            .await?
            .ok_or_else(|| field_error("route_id", "Route does not exist."))?;
        self.airplanes
            .find_by_id(request.airplane_id)
            .await?
            .ok_or_else(|| field_error("airplane_id", "Airplane does not exist."))?;
        self.check_crew_exists(&request.crew_ids).await?;

        self.check_conflicts(
            request.airplane_id,
            &request.crew_ids,
            request.departure_time,
            None,
        )
        .await?;

        let flight = self
            .repository
            .create(
                request.route_id,
                request.airplane_id,
                request.base_price,
                request.departure_time,
                request.arrival_time,
                &request.crew_ids,
            )
            .await?;

        self.to_list_response(flight.id).await
    }

    pub async fn list(
        &self,
        user: Option<&AuthenticatedUser>,
        filters: FlightFilters,
    ) -> Result<Vec<FlightListResponse>, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let crew_ids = filters
            .crew_ids
            .as_deref()
            .map(params_to_ids)
            .transpose()?;
        let departure_bounds = filters
            .departure_day
            .as_deref()
            .map(day_bounds)
            .transpose()?;

        let flights = self
            .repository
            .list(
                filters.airplane_id,
                filters.route_id,
                crew_ids.as_deref(),
                departure_bounds,
            )
            .await?;

        Ok(flights
            .into_iter()
            .map(|f| {
                let route = f.route_display();
                FlightListResponse {
                    id: f.id,
                    route_id: f.route_id,
                    airplane_id: f.airplane_id,
                    base_price: f.base_price,
                    departure_time: f.departure_time,
                    arrival_time: f.arrival_time,
                    route,
                }
            })
            .collect())
    }

    pub async fn get_by_id(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<FlightRetrieveResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let flight = self
            .repository
            .find_with_route(id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &id.to_string()))?;

        let airplane = self.airplane_response(flight.airplane_id).await?;

        let crew_ids = self.repository.crew_ids_for(id).await?;
        let mut crew = Vec::with_capacity(crew_ids.len());
        for crew_member_id in crew_ids {
            let member = self
                .crew
                .find_member_by_id(crew_member_id)
                .await?
                .ok_or_else(|| not_found_error("Crew member", &crew_member_id.to_string()))?;
            crew.push(CrewMemberResponse {
                id: member.id,
                photo: member.photo_url,
                first_name: member.first_name,
                last_name: member.last_name,
                position_name: member.position_name,
                position_id: member.position_id,
            });
        }

        Ok(FlightRetrieveResponse {
            id: flight.id,
            base_price: flight.base_price,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            route_id: flight.route_id,
            route: flight.route_display(),
            airplane,
            crew,
        })
    }

    pub async fn update(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateFlightRequest,
    ) -> Result<FlightListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &id.to_string()))?;

        if let Some(base_price) = request.base_price {
            check_base_price(base_price)?;
        }

        if let Some(route_id) = request.route_id {
            self.routes
                .find_by_id(route_id)
                .await?
                .ok_or_else(|| field_error("route_id", "Route does not exist."))?;
        }
        if let Some(airplane_id) = request.airplane_id {
            self.airplanes
                .find_by_id(airplane_id)
                .await?
                .ok_or_else(|| field_error("airplane_id", "Airplane does not exist."))?;
        }
        if let Some(crew_ids) = &request.crew_ids {
            self.check_crew_exists(crew_ids).await?;
        }

        // Valores efectivos post-update para el escaneo de conflictos;
        // el propio vuelo queda excluido.
        let airplane_id = request.airplane_id.unwrap_or(current.airplane_id);
        let departure_time = request.departure_time.unwrap_or(current.departure_time);
        let crew_ids = match &request.crew_ids {
            Some(ids) => ids.clone(),
            None => self.repository.crew_ids_for(id).await?,
        };

        self.check_conflicts(airplane_id, &crew_ids, departure_time, Some(id))
            .await?;

        let flight = self
            .repository
            .update(
                id,
                request.route_id,
                request.airplane_id,
                request.base_price,
                request.departure_time,
                request.arrival_time,
                request.crew_ids.as_deref(),
            )
            .await?;

        self.to_list_response(flight.id).await
    }

    pub async fn delete(&self, user: Option<&AuthenticatedUser>, id: Uuid) -> Result<(), AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &id.to_string()))?;

        self.repository.delete(id).await
    }

    async fn check_crew_exists(&self, crew_ids: &[Uuid]) -> Result<(), AppError> {
        if crew_ids.is_empty() {
            return Ok(());
        }

        let missing = self.repository.missing_crew_ids(crew_ids).await?;
        if let Some(missing_id) = missing.first() {
            return Err(field_error(
                "crew_ids",
                format!("Crew member '{}' does not exist.", missing_id),
            ));
        }

        Ok(())
    }

    /// Escaneo de salidas con el mismo departure_time exacto, para el
    /// avión y para cada tripulante pedido.
    async fn check_conflicts(
        &self,
        airplane_id: Uuid,
        crew_ids: &[Uuid],
        departure_time: DateTime<Utc>,
        exclude: Option<Uuid>,
    ) -> Result<(), AppError> {
        let airplane_departures = self.repository.departures_by_airplane(airplane_id).await?;
        if let Some(conflict) =
            find_departure_collision(&airplane_departures, departure_time, exclude)
        {
            return Err(field_error(
                "departure_time",
                format!(
                    "This airplane is already scheduled for another flight(id:{}) at this time.",
                    conflict
                ),
            ));
        }

        if !crew_ids.is_empty() {
            let crew_departures = self.repository.departures_by_crew(crew_ids).await?;
            if let Some(conflict) =
                find_departure_collision(&crew_departures, departure_time, exclude)
            {
                return Err(field_error(
                    "crew_ids",
                    format!(
                        "One or more crew members are already assigned to another flight(id:{}) at this time.",
                        conflict
                    ),
                ));
            }
        }

        Ok(())
    }

    async fn airplane_response(&self, id: Uuid) -> Result<AirplaneListResponse, AppError> {
        let airplane = self
            .airplanes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane", &id.to_string()))?;

        let airplane_type = self
            .airplanes
            .find_type_by_id(airplane.airplane_type_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Airplane type", &airplane.airplane_type_id.to_string())
            })?;

        let configs = self.airplanes.list_configurations_for(airplane.id).await?;
        let total_seats = configs.iter().map(|c| c.capacity()).sum();

        Ok(AirplaneListResponse {
            id: airplane.id,
            name: airplane.name,
            image: airplane.image_url,
            airplane_type_id: airplane.airplane_type_id,
            airplane_type_name: airplane_type.name,
            total_seats,
            seat_configurations: configs
                .into_iter()
                .map(SeatConfigurationResponse::from)
                .collect(),
        })
    }

    async fn to_list_response(&self, id: Uuid) -> Result<FlightListResponse, AppError> {
        let flight = self
            .repository
            .find_with_route(id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &id.to_string()))?;

        let route = flight.route_display();

        Ok(FlightListResponse {
            id: flight.id,
            route_id: flight.route_id,
            airplane_id: flight.airplane_id,
            base_price: flight.base_price,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            route,
        })
    }
}

/// base_price tiene un mínimo duro de 0.01
fn check_base_price(base_price: Decimal) -> Result<(), AppError> {
    if base_price < Decimal::new(1, 2) {
        return Err(field_error(
            "base_price",
            "Ensure this value is greater than or equal to 0.01.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_minimum_base_price_accepted() {
        assert!(check_base_price(Decimal::from_str("0.01").unwrap()).is_ok());
    }

    #[test]
    fn test_zero_base_price_rejected() {
        assert!(check_base_price(Decimal::ZERO).is_err());
        assert!(check_base_price(Decimal::from_str("0.009").unwrap()).is_err());
    }
}
