//! Middleware de la aplicación

pub mod auth;
pub mod cors;
pub mod permissions;

pub use auth::{optional_auth_middleware, AuthenticatedUser};
pub use cors::cors_middleware;
pub use permissions::{authorize, AccessKind, AccessPolicy};
