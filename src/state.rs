//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;

use crate::config::{EnvironmentConfig, PricingConfig};
use crate::services::media_storage_service::MediaStorageClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub pricing: PricingConfig,
    pub media: MediaStorageClient,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, pricing: PricingConfig) -> Self {
        let media = MediaStorageClient::new(Client::new(), config.media_upload_url.clone());
        Self {
            pool,
            config,
            pricing,
            media,
        }
    }
}
