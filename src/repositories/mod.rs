//! Capa de acceso a datos
//!
//! Cada repositorio encapsula las queries de una entidad sobre el pool
//! de PostgreSQL. Las pre-validaciones de los controllers son advisory;
//! las constraints de la base de datos son el árbitro final y sus
//! violaciones de unicidad se traducen a errores de validación.

pub mod airplane_repository;
pub mod airport_repository;
pub mod crew_repository;
pub mod flight_repository;
pub mod order_repository;
pub mod route_repository;
pub mod ticket_repository;
pub mod user_repository;

pub use airplane_repository::AirplaneRepository;
pub use airport_repository::AirportRepository;
pub use crew_repository::CrewRepository;
pub use flight_repository::FlightRepository;
pub use order_repository::OrderRepository;
pub use route_repository::RouteRepository;
pub use ticket_repository::TicketRepository;
pub use user_repository::UserRepository;
