//! Modelos de dominio que mapean a las tablas de PostgreSQL

pub mod airplane;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod order;
pub mod user;
