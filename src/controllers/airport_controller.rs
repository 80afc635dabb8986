//! Controller de Airport

use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::{ImageResponse, UploadImageRequest};
use crate::dto::airport_dto::{
    AirportListResponse, AirportRetrieveResponse, CreateAirportRequest, UpdateAirportRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::repositories::AirportRepository;
use crate::services::media_storage_service::MediaStorageClient;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub struct AirportController {
    repository: AirportRepository,
    media: MediaStorageClient,
}

impl AirportController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: AirportRepository::new(state.pool.clone()),
            media: state.media.clone(),
        }
    }

    pub async fn create(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateAirportRequest,
    ) -> Result<AirportListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        let airport = self
            .repository
            .create(&request.name, &request.closest_big_city)
            .await?;

        Ok(AirportListResponse {
            id: airport.id,
            name: airport.name,
            image: airport.image_url,
            closest_big_city: airport.closest_big_city,
            source_routes_total: 0,
            destination_routes_total: 0,
        })
    }

    pub async fn list(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<AirportListResponse>, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let airports = self.repository.list().await?;

        Ok(airports
            .into_iter()
            .map(|a| AirportListResponse {
                id: a.id,
                name: a.name,
                image: a.image_url,
                closest_big_city: a.closest_big_city,
                source_routes_total: a.source_routes_total,
                destination_routes_total: a.destination_routes_total,
            })
            .collect())
    }

    pub async fn get_by_id(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<AirportRetrieveResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let airport = self
            .repository
            .find_with_counts(id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id.to_string()))?;

        let source_route_ids = self.repository.source_route_ids(id).await?;
        let destination_route_ids = self.repository.destination_route_ids(id).await?;

        Ok(AirportRetrieveResponse {
            id: airport.id,
            name: airport.name,
            image: airport.image_url,
            closest_big_city: airport.closest_big_city,
            source_routes_total: airport.source_routes_total,
            source_route_ids,
            destination_routes_total: airport.destination_routes_total,
            destination_route_ids,
        })
    }

    pub async fn update(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateAirportRequest,
    ) -> Result<AirportListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        let airport = self
            .repository
            .update(id, request.name.as_deref(), request.closest_big_city.as_deref())
            .await?;

        let with_counts = self
            .repository
            .find_with_counts(airport.id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id.to_string()))?;

        Ok(AirportListResponse {
            id: with_counts.id,
            name: with_counts.name,
            image: with_counts.image_url,
            closest_big_city: with_counts.closest_big_city,
            source_routes_total: with_counts.source_routes_total,
            destination_routes_total: with_counts.destination_routes_total,
        })
    }

    pub async fn delete(&self, user: Option<&AuthenticatedUser>, id: Uuid) -> Result<(), AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id.to_string()))?;

        self.repository.delete(id).await
    }

    pub async fn upload_image(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UploadImageRequest,
    ) -> Result<ImageResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        let airport = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id.to_string()))?;

        let filename = request
            .filename
            .unwrap_or_else(|| format!("airport-{}", airport.id));
        let image_url = self.media.upload_image(&request.image, &filename).await?;

        let airport = self.repository.set_image(id, &image_url).await?;

        Ok(ImageResponse {
            id: airport.id,
            image: airport.image_url,
        })
    }
}
