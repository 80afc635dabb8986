//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens
//! y verificación de usuarios autenticados.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    repositories::UserRepository,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_staff: bool,
}

/// Middleware opcional de autenticación.
///
/// Si llega un bearer token válido inyecta el usuario como extension;
/// un token inválido o ausente deja pasar la request anónima y las
/// políticas de acceso deciden después. El flag de staff se lee de la
/// base de datos, no del token.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
    {
        if let Ok(token) = extract_token_from_header(auth_header) {
            if let Ok(claims) = verify_token(token, &state.config) {
                if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
                    if let Some(user) = UserRepository::new(state.pool.clone())
                        .find_by_id(user_id)
                        .await?
                    {
                        request.extensions_mut().insert(AuthenticatedUser {
                            user_id: user.id,
                            email: user.email,
                            is_staff: user.is_staff,
                        });
                    }
                }
            }
        }
    }

    Ok(next.run(request).await)
}
