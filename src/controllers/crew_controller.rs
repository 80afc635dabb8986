//! Controller de CrewMemberPosition y CrewMember
//!
//! Las posiciones son administración pura (solo staff); los tripulantes
//! se leen públicamente y se escriben con permisos de staff.

use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::{ImageResponse, UploadImageRequest};
use crate::dto::crew_dto::{
    CreateCrewMemberRequest, CreateCrewPositionRequest, CrewMemberResponse,
    CrewPositionListResponse, CrewPositionRetrieveResponse, UpdateCrewMemberRequest,
    UpdateCrewPositionRequest,
};
use crate::middleware::{authorize, AccessKind, AccessPolicy, AuthenticatedUser};
use crate::repositories::crew_repository::CrewMemberWithPosition;
use crate::repositories::CrewRepository;
use crate::services::media_storage_service::MediaStorageClient;
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError};

pub struct CrewController {
    repository: CrewRepository,
    media: MediaStorageClient,
}

impl CrewController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: CrewRepository::new(state.pool.clone()),
            media: state.media.clone(),
        }
    }

    // ----------- CrewMemberPosition (solo staff) -----------

    pub async fn create_position(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateCrewPositionRequest,
    ) -> Result<CrewPositionListResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        let position = self.repository.create_position(&request.name).await?;

        Ok(CrewPositionListResponse {
            id: position.id,
            name: position.name,
            crew_members_total: 0,
        })
    }

    pub async fn list_positions(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<CrewPositionListResponse>, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let positions = self.repository.list_positions().await?;

        Ok(positions
            .into_iter()
            .map(|p| CrewPositionListResponse {
                id: p.id,
                name: p.name,
                crew_members_total: p.crew_members_total,
            })
            .collect())
    }

    pub async fn get_position(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<CrewPositionRetrieveResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Read, user, None)?;

        let position = self
            .repository
            .find_position_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew member position", &id.to_string()))?;

        let crew_member_ids = self.repository.crew_member_ids_for_position(id).await?;

        Ok(CrewPositionRetrieveResponse {
            id: position.id,
            name: position.name,
            crew_members_total: crew_member_ids.len() as i64,
            crew_member_ids,
        })
    }

    pub async fn update_position(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateCrewPositionRequest,
    ) -> Result<CrewPositionListResponse, AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;
        request.validate()?;

        let current = self
            .repository
            .find_position_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew member position", &id.to_string()))?;

        let name = request.name.unwrap_or(current.name);
        let position = self.repository.update_position(id, &name).await?;
        let crew_members_total =
            self.repository.crew_member_ids_for_position(id).await?.len() as i64;

        Ok(CrewPositionListResponse {
            id: position.id,
            name: position.name,
            crew_members_total,
        })
    }

    pub async fn delete_position(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<(), AppError> {
        authorize(AccessPolicy::StaffOnly, AccessKind::Write, user, None)?;

        self.repository
            .find_position_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew member position", &id.to_string()))?;

        self.repository.delete_position(id).await
    }

    // ----------- CrewMember (lectura pública, escritura staff) -----------

    pub async fn create_member(
        &self,
        user: Option<&AuthenticatedUser>,
        request: CreateCrewMemberRequest,
    ) -> Result<CrewMemberResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        self.repository
            .find_position_by_id(request.position_id)
            .await?
            .ok_or_else(|| field_error("position_id", "Position does not exist."))?;

        let member = self
            .repository
            .create_member(&request.first_name, &request.last_name, request.position_id)
            .await?;

        Ok(member_response(member))
    }

    pub async fn list_members(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<CrewMemberResponse>, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let members = self.repository.list_members().await?;

        Ok(members.into_iter().map(member_response).collect())
    }

    pub async fn get_member(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<CrewMemberResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, user, None)?;

        let member = self
            .repository
            .find_member_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew member", &id.to_string()))?;

        Ok(member_response(member))
    }

    pub async fn update_member(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UpdateCrewMemberRequest,
    ) -> Result<CrewMemberResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        if let Some(position_id) = request.position_id {
            self.repository
                .find_position_by_id(position_id)
                .await?
                .ok_or_else(|| field_error("position_id", "Position does not exist."))?;
        }

        let member = self
            .repository
            .update_member(
                id,
                request.first_name.as_deref(),
                request.last_name.as_deref(),
                request.position_id,
            )
            .await?;

        Ok(member_response(member))
    }

    pub async fn delete_member(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> Result<(), AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;

        self.repository
            .find_member_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew member", &id.to_string()))?;

        self.repository.delete_member(id).await
    }

    pub async fn upload_member_image(
        &self,
        user: Option<&AuthenticatedUser>,
        id: Uuid,
        request: UploadImageRequest,
    ) -> Result<ImageResponse, AppError> {
        authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, user, None)?;
        request.validate()?;

        let member = self
            .repository
            .find_member_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew member", &id.to_string()))?;

        let filename = request
            .filename
            .unwrap_or_else(|| format!("crew-member-{}", member.id));
        let photo_url = self.media.upload_image(&request.image, &filename).await?;

        let member = self.repository.set_member_photo(id, &photo_url).await?;

        Ok(ImageResponse {
            id: member.id,
            image: member.photo_url,
        })
    }
}

fn member_response(member: CrewMemberWithPosition) -> CrewMemberResponse {
    CrewMemberResponse {
        id: member.id,
        photo: member.photo_url,
        first_name: member.first_name,
        last_name: member.last_name,
        position_name: member.position_name,
        position_id: member.position_id,
    }
}
