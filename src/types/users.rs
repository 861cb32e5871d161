//! User resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAttributes {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub email_verified_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Relationship>,
}

pub type UserResource = ApiResource<UserAttributes, UserRelationships>;
pub type UserResponse = SingleResponse<UserResource>;
pub type UserListResponse = PaginatedResponse<UserResource>;

/// Request body for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<u64>,
}

/// Request body for updating a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<u64>,
}

/// Query parameters for listing users
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "filter[first_name]", skip_serializing_if = "Option::is_none")]
    pub filter_first_name: Option<String>,
    #[serde(rename = "filter[last_name]", skip_serializing_if = "Option::is_none")]
    pub filter_last_name: Option<String>,
    #[serde(rename = "filter[email]", skip_serializing_if = "Option::is_none")]
    pub filter_email: Option<String>,
}
