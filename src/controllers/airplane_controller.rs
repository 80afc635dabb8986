//! Controller de AirplaneType, Airplane y AirplaneSeatConfiguration
//!
//! El catálogo de aviones es de lectura pública; todas las escrituras y
//! los tipos/configuraciones completos son exclusivos del staff.

use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::{
    AirplaneListResponse, AirplaneTypeListResponse, AirplaneTypeRetrieveResponse,
    CreateAirplaneRequest, CreateAirplaneTypeRequest, CreateSeatConfigurationRequest,
    ImageResponse, SeatConfigurationListResponse, SeatConfigurationResponse,
    SeatConfigurationRetrieveResponse, SeatConfigurationPayload, UpdateAirplaneRequest,
    UpdateAirplaneTypeRequest, UpdateSeatConfigurationRequest, UploadImageRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::models::airplane::Airplane;
use crate::repositories::AirplaneRepository;
use crate::services::media_storage_service::MediaStorageClient;
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError};

pub struct AirplaneController {
    repository: AirplaneRepository,
    media: MediaStorageClient,
}

impl AirplaneController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: AirplaneRepository::new(state.pool.clone()),
            media: state.media.clone(),
        }
    }

    // ----------- AirplaneType (solo staff) -----------

    pub async fn create_type(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateAirplaneTypeRequest,
    ) -> Result<AirplaneTypeListResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        let airplane_type = self.repository.create_type(&request.name).await?;

        Ok(AirplaneTypeListResponse {
            id: airplane_type.id,
            name: airplane_type.name,
            airplanes_total: 0,
        })
    }

    pub async fn list_types(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<AirplaneTypeListResponse>, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let types = self.repository.list_types().await?;

        Ok(types
            .into_iter()
            .map(|t| AirplaneTypeListResponse {
                id: t.id,
                name: t.name,
                airplanes_total: t.airplanes_total,
            })
            .collect())
    }

    pub async fn get_type(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<AirplaneTypeRetrieveResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let airplane_type = self
            .repository
            .find_type_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane type", &id.to_string()))?;

        let airplane_ids = self.repository.airplane_ids_for_type(id).await?;

        Ok(AirplaneTypeRetrieveResponse {
            id: airplane_type.id,
            name: airplane_type.name,
            airplanes_total: airplane_ids.len() as i64,
            airplane_ids,
        })
    }

    pub async fn update_type(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateAirplaneTypeRequest,
    ) -> Result<AirplaneTypeListResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        let current = self
            .repository
            .find_type_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane type", &id.to_string()))?;

        let name = request.name.unwrap_or(current.name);
        let airplane_type = self.repository.update_type(id, &name).await?;
        let airplanes_total = self.repository.airplane_ids_for_type(id).await?.len() as i64;

        Ok(AirplaneTypeListResponse {
            id: airplane_type.id,
            name: airplane_type.name,
            airplanes_total,
        })
    }

    pub async fn delete_type(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<(), AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;

        self.repository
            .find_type_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane type", &id.to_string()))?;

        self.repository.delete_type(id).await
    }

    // ----------- Airplane (lectura pública, escritura staff) -----------

    pub async fn create(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateAirplaneRequest,
    ) -> Result<AirplaneListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        check_seat_configuration_payload(&request.seat_configurations)?;

        self.repository
            .find_type_by_id(request.airplane_type_id)
            .await?
            .ok_or_else(|| field_error("airplane_type_id", "Airplane type does not exist."))?;

        let airplane = self
            .repository
            .create(&request.name, request.airplane_type_id, &request.seat_configurations)
            .await?;

        self.to_response(airplane).await
    }

    pub async fn list(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<AirplaneListResponse>, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let airplanes = self.repository.list().await?;

        let mut responses = Vec::with_capacity(airplanes.len());
        for airplane in airplanes {
            responses.push(self.to_response(airplane).await?);
        }

        Ok(responses)
    }

    pub async fn get_by_id(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<AirplaneListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let airplane = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane", &id.to_string()))?;

        self.to_response(airplane).await
    }

    pub async fn update(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateAirplaneRequest,
    ) -> Result<AirplaneListResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        if let Some(configs) = &request.seat_configurations {
            check_seat_configuration_payload(configs)?;
        }

        if let Some(type_id) = request.airplane_type_id {
            self.repository
                .find_type_by_id(type_id)
                .await?
                .ok_or_else(|| field_error("airplane_type_id", "Airplane type does not exist."))?;
        }

        let airplane = self
            .repository
            .update(
                id,
                request.name.as_deref(),
                request.airplane_type_id,
                request.seat_configurations.as_deref(),
            )
            .await?;

        self.to_response(airplane).await
    }

    pub async fn delete(&self, user: Option<&AuthenticatedUser>, id: Uuid) -> Result<(), AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane", &id.to_string()))?;

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

        let airplane = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane", &id.to_string()))?;

        let filename = request
            .filename
            .unwrap_or_else(|| format!("airplane-{}", airplane.id));
        let image_url = self.media.upload_image(&request.image, &filename).await?;

        let airplane = self.repository.set_image(id, &image_url).await?;

        Ok(ImageResponse {
            id: airplane.id,
            image: airplane.image_url,
        })
    }

    // ----------- AirplaneSeatConfiguration (solo staff) -----------

    pub async fn create_configuration(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateSeatConfigurationRequest,
    ) -> Result<SeatConfigurationListResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        self.repository
            .find_by_id(request.airplane_id)
            .await?
            .ok_or_else(|| field_error("airplane_id", "Airplane does not exist."))?;

        let config = self
            .repository
            .create_configuration(
                request.airplane_id,
                request.seat_class,
                request.rows,
                request.seats_in_row,
            )
            .await?;

        Ok(SeatConfigurationListResponse {
            id: config.id,
            airplane_id: config.airplane_id,
            seat_class: config.seat_class,
            rows: config.rows,
            seats_in_row: config.seats_in_row,
            capacity: config.capacity(),
        })
    }

    pub async fn list_configurations(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<SeatConfigurationListResponse>, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let configs = self.repository.list_configurations().await?;

        Ok(configs
            .into_iter()
            .map(|config| SeatConfigurationListResponse {
                id: config.id,
                airplane_id: config.airplane_id,
                seat_class: config.seat_class,
                rows: config.rows,
                seats_in_row: config.seats_in_row,
                capacity: config.capacity(),
            })
            .collect())
    }

    pub async fn get_configuration(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<SeatConfigurationRetrieveResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let config = self
            .repository
            .find_configuration_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Seat configuration", &id.to_string()))?;

        let airplane = self
            .repository
            .find_by_id(config.airplane_id)
            .await?
            .ok_or_else(|| not_found_error("Airplane", &config.airplane_id.to_string()))?;

        Ok(SeatConfigurationRetrieveResponse {
            id: config.id,
            airplane: self.to_response(airplane).await?,
            seat_class: config.seat_class,
            rows: config.rows,
            seats_in_row: config.seats_in_row,
            capacity: config.capacity(),
        })
    }

    pub async fn update_configuration(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateSeatConfigurationRequest,
    ) -> Result<SeatConfigurationListResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        let config = self
            .repository
            .update_configuration(id, request.rows, request.seats_in_row)
            .await?;

        Ok(SeatConfigurationListResponse {
            id: config.id,
            airplane_id: config.airplane_id,
            seat_class: config.seat_class,
            rows: config.rows,
            seats_in_row: config.seats_in_row,
            capacity: config.capacity(),
        })
    }

    pub async fn delete_configuration(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<(), AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;

        self.repository
            .find_configuration_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Seat configuration", &id.to_string()))?;

        self.repository.delete_configuration(id).await
    }

    /// Proyección completa de un avión: tipo, configuraciones y
    /// total de asientos.
    async fn to_response(&self, airplane: Airplane) -> Result<AirplaneListResponse, AppError> {
        let airplane_type = self
            .repository
            .find_type_by_id(airplane.airplane_type_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Airplane type", &airplane.airplane_type_id.to_string())
            })?;

        let configs = self.repository.list_configurations_for(airplane.id).await?;
        let total_seats = configs.iter().map(|c| c.capacity()).sum();

        Ok(AirplaneListResponse {
            id: airplane.id,
            name: airplane.name,
            image: airplane.image_url,
            airplane_type_id: airplane.airplane_type_id,
            airplane_type_name: airplane_type.name,
            total_seats,
            seat_configurations: configs
                .into_iter()
                .map(SeatConfigurationResponse::from)
                .collect(),
        })
    }
}

/// Un avión se crea con al menos una configuración y sin clases repetidas
fn check_seat_configuration_payload(
    configs: &[SeatConfigurationPayload],
) -> Result<(), AppError> {
    if configs.is_empty() {
        return Err(field_error(
            "seat_configurations",
            "Seat configuration must be provided.",
        ));
    }

    for (index, config) in configs.iter().enumerate() {
        if configs[..index]
            .iter()
            .any(|earlier| earlier.seat_class == config.seat_class)
        {
            return Err(field_error(
                "seat_configurations",
                "Duplicate seat_class for this airplane.",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::airplane::SeatClass;

    fn payload(seat_class: SeatClass) -> SeatConfigurationPayload {
        SeatConfigurationPayload {
            seat_class,
            rows: 10,
            seats_in_row: 6,
        }
    }

    #[test]
    fn test_empty_configuration_rejected() {
        assert!(check_seat_configuration_payload(&[]).is_err());
    }

    #[test]
    fn test_duplicate_seat_class_rejected() {
        let configs = vec![payload(SeatClass::Economy), payload(SeatClass::Economy)];
        assert!(check_seat_configuration_payload(&configs).is_err());
    }

    #[test]
    fn test_one_config_per_class_accepted() {
        let configs = vec![payload(SeatClass::Economy), payload(SeatClass::Business)];
        assert!(check_seat_configuration_payload(&configs).is_ok());
    }
}
