//! Controller de Order
//!
//! Una orden se crea con su lista de tickets embebida y todo persiste
//! en una transacción. El acceso es a nivel de objeto: el staff ve todo,
//! los usuarios comunes solo sus propias órdenes. La acción pay es
//! estrictamente del dueño, incluso el staff queda fuera.

use uuid::Uuid;
use validator::Validate;

use crate::config::PricingConfig;
use crate::controllers::ticket_controller::ticket_response;
use crate::dto::order_dto::{
    CreateOrderRequest, OrderFilters, OrderPayResponse, OrderResponse, TicketPayload,
    TicketResponse, UpdateOrderRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::repositories::order_repository::OrderWithEmail;
use crate::repositories::{
    AirplaneRepository, FlightRepository, OrderRepository, TicketRepository,
};
use crate::services::seating_service::{
    check_seat_in_configuration, find_seat_collision, SeatAssignment,
};
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError};
use crate::utils::validation::day_bounds;

fn require_user(
    user: Option<&AuthenticatedUser>,
) -> Result<&AuthenticatedUser, AppError> {
    user.ok_or_else(|| {
        AppError::Unauthorized("Authentication credentials were not provided.".to_string())
    })
}

pub struct OrderController {
    repository: OrderRepository,
    tickets: TicketRepository,
    flights: FlightRepository,
    airplanes: AirplaneRepository,
    pricing: PricingConfig,
}

impl OrderController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: OrderRepository::new(state.pool.clone()),
            tickets: TicketRepository::new(state.pool.clone()),
            flights: FlightRepository::new(state.pool.clone()),
            airplanes: AirplaneRepository::new(state.pool.clone()),
            pricing: state.pricing.clone(),
        }
    }

    pub async fn create(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateOrderRequest,
    ) -> Result<OrderResponse, AppError> {
        let user = require_user(user)?;
        request.validate()?;

        if request.tickets.is_empty() {
            return Err(field_error("tickets", "This field can not be empty."));
        }

        self.check_ticket_payload(&request.tickets).await?;

        let order = self
            .repository
            .create_with_tickets(user.user_id, &request.tickets)
            .await?;

        self.to_response_by_id(order.id).await
    }

    pub async fn list(
        &self,
        user: Option<&AuthenticatedUser>,
        filters: OrderFilters,
    ) -> Result<Vec<OrderResponse>, AppError> {
        let user = require_user(user)?;

        // El staff lista todas las órdenes; los demás solo las suyas
        let owner = if user.is_staff {
            None
        } else {
            Some(user.user_id)
        };

        let created_bounds = filters.order_day.as_deref().map(day_bounds).transpose()?;

        let orders = self.repository.list(owner, created_bounds).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.to_response(order).await?);
        }

        Ok(responses)
    }

    pub async fn get_by_id(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<OrderResponse, AppError> {
        let user = require_user(user)?;
        let order = self
            .repository
            .find_with_email(id)
            .await?
            .ok_or_else(|| not_found_error("Order", &id.to_string()))?;

        authorize(
            AccessPolicy::OwnerOrStaff,
            AccessKind::Read,
            Some(user),
            Some(order.user_id),
        )?;

        self.to_response(order).await
    }

    pub async fn update(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateOrderRequest,
    ) -> Result<OrderResponse, AppError> {
        let user = require_user(user)?;
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Order", &id.to_string()))?;

        authorize(
            AccessPolicy::OwnerOrStaff,
            AccessKind::Write,
            Some(user),
            Some(order.user_id),
        )?;

        let is_paid = request.is_paid.unwrap_or(order.is_paid);
        let order = self.repository.set_paid(id, is_paid).await?;

        self.to_response_by_id(order.id).await
    }

    pub async fn delete(&self, user: Option<&AuthenticatedUser>, id: Uuid) -> Result<(), AppError> {
        let user = require_user(user)?;
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Order", &id.to_string()))?;

        authorize(
            AccessPolicy::OwnerOrStaff,
            AccessKind::Write,
            Some(user),
            Some(order.user_id),
        )?;

        self.repository.delete(id).await
    }

    /// Acción pay: marca la orden como pagada. Solo el dueño, el staff
    /// recibe 403.
    pub async fn pay(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<OrderPayResponse, AppError> {
        let user = require_user(user)?;
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Order", &id.to_string()))?;

        authorize(
            AccessPolicy::OwnerOnly,
            AccessKind::Write,
            Some(user),
            Some(order.user_id),
        )?;

        let order = self.repository.set_paid(id, true).await?;

        Ok(OrderPayResponse {
            id: order.id,
            is_paid: order.is_paid,
        })
    }

    /// Validar cada ticket del payload contra la configuración del avión
    /// de su vuelo y contra los asientos ya tomados, incluyendo los
    /// tickets anteriores del mismo payload.
    async fn check_ticket_payload(&self, tickets: &[TicketPayload]) -> Result<(), AppError> {
        for (index, ticket) in tickets.iter().enumerate() {
            let flight = self
                .flights
                .find_by_id(ticket.flight_id)
                .await?
                .ok_or_else(|| field_error("flight_id", "Flight does not exist."))?;

            let config = self
                .airplanes
                .find_configuration(flight.airplane_id, ticket.seat_class)
                .await?
                .ok_or_else(|| {
                    field_error(
                        "seat_class",
                        format!(
                            "Airplane of this flight(id:{}) does not have seat class '{}'.",
                            ticket.flight_id, ticket.seat_class
                        ),
                    )
                })?;

            check_seat_in_configuration(&config, ticket.flight_id, ticket.row, ticket.seat)?;

            let mut existing = self
                .tickets
                .list_seats_for_flight(ticket.flight_id)
                .await?;
            existing.extend(tickets[..index].iter().filter_map(|earlier| {
                (earlier.flight_id == ticket.flight_id).then(|| SeatAssignment {
                    ticket_id: Uuid::new_v4(),
                    row: earlier.row,
                    seat: earlier.seat,
                    seat_class: earlier.seat_class,
                })
            }));

            if find_seat_collision(&existing, ticket.row, ticket.seat, ticket.seat_class, None)
                .is_some()
            {
                return Err(field_error("seat", "This seat is already taken."));
            }
        }

        Ok(())
    }

    async fn to_response_by_id(&self, id: Uuid) -> Result<OrderResponse, AppError> {
        let order = self
            .repository
            .find_with_email(id)
            .await?
            .ok_or_else(|| not_found_error("Order", &id.to_string()))?;

        self.to_response(order).await
    }

    /// Proyección completa de la orden; order_price es la suma de los
    /// precios recalculados de sus tickets.
    async fn to_response(&self, order: OrderWithEmail) -> Result<OrderResponse, AppError> {
        let tickets = self.repository.tickets_for_order(order.id).await?;
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
