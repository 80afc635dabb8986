//! Controller de Ticket
//!
//! Recurso de administración (solo staff). La validación de asiento
//! exige que la coordenada exista en la configuración del avión del
//! vuelo y que la tupla (flight, row, seat, seat_class) esté libre.

use uuid::Uuid;
use validator::Validate;

use crate::config::PricingConfig;
use crate::dto::flight_dto::FlightListResponse;
use crate::dto::order_dto::{
    CreateTicketRequest, OrderResponse, TicketListResponse, TicketResponse,
    TicketRetrieveResponse, UpdateTicketRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::models::airplane::SeatClass;
use crate::repositories::ticket_repository::TicketWithContext;
use crate::repositories::{
    AirplaneRepository, FlightRepository, OrderRepository, TicketRepository,
};
use crate::services::pricing_service::calculate_ticket_price;
use crate::services::seating_service::{check_seat_in_configuration, find_seat_collision};
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError};

pub struct TicketController {
    repository: TicketRepository,
    orders: OrderRepository,
    flights: FlightRepository,
    airplanes: AirplaneRepository,
    pricing: PricingConfig,
}

impl TicketController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: TicketRepository::new(state.pool.clone()),
            orders: OrderRepository::new(state.pool.clone()),
            flights: FlightRepository::new(state.pool.clone()),
            airplanes: AirplaneRepository::new(state.pool.clone()),
            pricing: state.pricing.clone(),
        }
    }

    pub async fn create(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateTicketRequest,
    ) -> Result<TicketResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        self.orders
            .find_by_id(request.order_id)
            .await?
            .ok_or_else(|| field_error("order_id", "Order does not exist."))?;

        self.check_seat(
            request.flight_id,
            request.row,
            request.seat,
            request.seat_class,
            None,
        )
        .await?;

        let ticket = self
            .repository
            .create(
                request.row,
                request.seat,
                request.seat_class,
                request.flight_id,
                request.order_id,
            )
            .await?;

        self.to_response(ticket.id).await
    }

    pub async fn list(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<TicketListResponse>, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let tickets = self.repository.list(None).await?;

        Ok(tickets
            .into_iter()
            .map(|t| {
                let price =
                    calculate_ticket_price(t.base_price, t.distance, t.seat_class, &self.pricing);
                let route_string = t.route_display();
                TicketListResponse {
                    id: t.id,
                    row: t.row,
                    seat: t.seat,
                    seat_class: t.seat_class,
                    owner_email: t.owner_email,
                    route_string,
                    price,
                }
            })
            .collect())
    }

    pub async fn get_by_id(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<TicketRetrieveResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let ticket = self
            .repository
            .find_with_context(id)
            .await?
            .ok_or_else(|| not_found_error("Ticket", &id.to_string()))?;

        let price = calculate_ticket_price(
            ticket.base_price,
            ticket.distance,
            ticket.seat_class,
            &self.pricing,
        );

        let order = self.order_response(ticket.order_id).await?;

        let flight = self
            .flights
            .find_with_route(ticket.flight_id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &ticket.flight_id.to_string()))?;
        let route = flight.route_display();

        Ok(TicketRetrieveResponse {
            id: ticket.id,
            row: ticket.row,
            seat: ticket.seat,
            seat_class: ticket.seat_class,
            price,
            order,
            flight: FlightListResponse {
                id: flight.id,
                route_id: flight.route_id,
                airplane_id: flight.airplane_id,
                base_price: flight.base_price,
                departure_time: flight.departure_time,
                arrival_time: flight.arrival_time,
                route,
            },
        })
    }

    pub async fn update(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateTicketRequest,
    ) -> Result<TicketResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ticket", &id.to_string()))?;

        // La coordenada efectiva post-update se valida completa,
        // excluyendo al propio ticket del escaneo de colisiones
        let flight_id = request.flight_id.unwrap_or(current.flight_id);
        let row = request.row.unwrap_or(current.row);
        let seat = request.seat.unwrap_or(current.seat);
        let seat_class = request.seat_class.unwrap_or(current.seat_class);

        self.check_seat(flight_id, row, seat, seat_class, Some(id))
            .await?;

        let ticket = self
            .repository
            .update(id, request.row, request.seat, request.seat_class, request.flight_id)
            .await?;

        self.to_response(ticket.id).await
    }

    pub async fn delete(&self, user: Option<&AuthenticatedUser>, id: Uuid) -> Result<(), AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ticket", &id.to_string()))?;

        self.repository.delete(id).await
    }

    /// Validación completa de asiento contra el vuelo: clase disponible,
    /// coordenada dentro de la configuración y tupla libre.
    async fn check_seat(
        &self,
        flight_id: Uuid,
        row: i32,
        seat: i32,
        seat_class: SeatClass,
        exclude: Option<Uuid>,
    ) -> Result<(), AppError> {
        let flight = self
            .flights
            .find_by_id(flight_id)
            .await?
            .ok_or_else(|| field_error("flight_id", "Flight does not exist."))?;

        let config = self
            .airplanes
            .find_configuration(flight.airplane_id, seat_class)
            .await?
            .ok_or_else(|| {
                field_error(
                    "seat_class",
                    format!(
                        "Airplane of this flight(id:{}) does not have seat class '{}'.",
                        flight_id, seat_class
                    ),
                )
            })?;

        check_seat_in_configuration(&config, flight_id, row, seat)?;

        let existing = self.repository.list_seats_for_flight(flight_id).await?;
        if find_seat_collision(&existing, row, seat, seat_class, exclude).is_some() {
            return Err(field_error("seat", "This seat is already taken."));
        }

        Ok(())
    }

    async fn to_response(&self, id: Uuid) -> Result<TicketResponse, AppError> {
        let ticket = self
            .repository
            .find_with_context(id)
            .await?
            .ok_or_else(|| not_found_error("Ticket", &id.to_string()))?;

        Ok(ticket_response(&ticket, &self.pricing))
    }

    async fn order_response(&self, order_id: Uuid) -> Result<OrderResponse, AppError> {
        let order = self
            .orders
            .find_with_email(order_id)
            .await?
            .ok_or_else(|| not_found_error("Order", &order_id.to_string()))?;

        let tickets = self.orders.tickets_for_order(order_id).await?;
        let ticket_responses: Vec<TicketResponse> = tickets
            .iter()
            .map(|t| ticket_response(t, &self.pricing))
            .collect();
        let order_price = ticket_responses.iter().map(|t| t.price).sum();

        Ok(OrderResponse {
            id: order.id,
            is_paid: order.is_paid,
            created_at: order.created_at,
            email: order.email,
            order_price,
            tickets: ticket_responses,
        })
    }
}

/// Proyección de un ticket con su precio recalculado
pub(crate) fn ticket_response(
    ticket: &TicketWithContext,
    pricing: &PricingConfig,
) -> TicketResponse {
    TicketResponse {
        id: ticket.id,
        row: ticket.row,
        seat: ticket.seat,
        seat_class: ticket.seat_class,
        flight_id: ticket.flight_id,
        route_string: ticket.route_display(),
        price: calculate_ticket_price(
            ticket.base_price,
            ticket.distance,
            ticket.seat_class,
            pricing,
        ),
    }
}
