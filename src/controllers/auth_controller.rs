//! Controller de autenticación
//!
//! Registro de usuarios y emisión de tokens JWT. El registro siempre
//! crea usuarios comunes; el flag de staff se administra fuera de la API.

use sqlx::PgPool;
use validator::Validate;

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::repositories::UserRepository;
use crate::utils::errors::{field_error, AppError};
use crate::utils::jwt::generate_token;

pub struct AuthController {
    repository: UserRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        // Pre-chequeo advisory; la constraint UNIQUE de email decide
        // si dos registros concurrentes chocan
        if self.repository.email_exists(&request.email).await? {
            return Err(field_error("email", "This email is already registered."));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self.repository.create(&request.email, &password_hash).await?;

        let token = generate_token(user.id, &user.email, user.is_staff, &self.config)?;

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        let token = generate_token(user.id, &user.email, user.is_staff, &self.config)?;

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}
