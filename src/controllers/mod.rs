//! Controllers de la API
//!
//! Cada controller recibe el estado compartido, instancia sus
//! repositorios y aplica la política de acceso del recurso antes de
//! tocar datos.

pub mod airplane_controller;
pub mod airport_controller;
pub mod auth_controller;
pub mod crew_controller;
pub mod flight_controller;
pub mod order_controller;
pub mod route_controller;
pub mod ticket_controller;
