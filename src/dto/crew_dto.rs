//! DTOs de CrewMemberPosition y CrewMember

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ----------- CrewMemberPosition -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCrewPositionRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCrewPositionRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CrewPositionListResponse {
    pub id: Uuid,
    pub name: String,
    pub crew_members_total: i64,
}

#[derive(Debug, Serialize)]
pub struct CrewPositionRetrieveResponse {
    pub id: Uuid,
    pub name: String,
    pub crew_members_total: i64,
    pub crew_member_ids: Vec<Uuid>,
}

// ----------- CrewMember -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCrewMemberRequest {
    #[validate(length(min = 1, max = 63))]
    pub first_name: String,

    #[validate(length(min = 1, max = 63))]
    pub last_name: String,

    pub position_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCrewMemberRequest {
    #[validate(length(min = 1, max = 63))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 63))]
    pub last_name: Option<String>,

    pub position_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CrewMemberResponse {
    pub id: Uuid,
    pub photo: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position_name: String,
    pub position_id: Uuid,
}
