//! API de administración de reservas aéreas
//!
//! Backend REST sobre axum + sqlx/PostgreSQL: catálogo de aviones,
//! aeropuertos, rutas, vuelos y tripulación, más órdenes y tickets con
//! precios derivados y control de acceso por política de recurso.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
