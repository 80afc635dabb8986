//! Lógica de negocio: precios, conflictos de programación y asientos

pub mod media_storage_service;
pub mod pricing_service;
pub mod routing_service;
pub mod scheduling_service;
pub mod seating_service;
