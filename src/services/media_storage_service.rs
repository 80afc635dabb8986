//! Cliente del host de medios externo
//!
//! Las imágenes de aviones, aeropuertos y tripulantes no se almacenan
//! localmente: se delegan a un host de medios externo que devuelve la
//! URL pública. Aquí solo guardamos esa URL.

use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::utils::errors::AppError;

/// Respuesta del host de medios
#[derive(Debug, Deserialize)]
struct MediaUploadResponse {
    secure_url: String,
}

/// Cliente para subir imágenes al host de medios
#[derive(Clone)]
pub struct MediaStorageClient {
    client: Client,
    upload_url: Option<String>,
}

impl MediaStorageClient {
    pub fn new(client: Client, upload_url: Option<String>) -> Self {
        Self { client, upload_url }
    }

    /// Subir una imagen codificada en base64 y devolver su URL pública
    pub async fn upload_image(&self, image_base64: &str, filename: &str) -> Result<String, AppError> {
        let upload_url = self
            .upload_url
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("MEDIA_UPLOAD_URL is not configured".to_string()))?;

        // Validar que el payload sea base64 antes de delegarlo
        base64::engine::general_purpose::STANDARD
            .decode(image_base64)
            .map_err(|_| {
                crate::utils::errors::field_error("image", "Image must be base64 encoded")
            })?;

        let response = self
            .client
            .post(upload_url)
            .json(&json!({
                "file": format!("data:image/png;base64,{}", image_base64),
                "filename": filename,
            }))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error uploading image: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Media host responded with status {}",
                response.status()
            )));
        }

        let body: MediaUploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid media host response: {}", e)))?;

        Ok(body.secure_url)
    }
}
