use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ========== RECORDS ==========

/// User record as the identity backend returns it. The backend owns the
/// record; fields this gateway does not interpret (timestamps, audience, ...)
/// ride along in `extra` so create/update responses mirror the backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Listing projection of a record. Metadata defaults to an empty map when
/// the backend has none for the account.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub raw_user_meta_data: Map<String, Value>,
}

impl From<AdminUser> for UserSummary {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            phone: user.phone,
            raw_user_meta_data: user.user_metadata,
        }
    }
}

// ========== GATEWAY REQUESTS ==========

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub name: Option<String>,
}

// Full-replace update; `id` is the only required field
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct DeactivateUserRequest {
    pub id: String,
}

// ========== BACKEND PAYLOADS ==========

/// Attributes forwarded to create-user and update-user-by-id. Absent options
/// are omitted from the JSON entirely, never sent as null.
#[derive(Debug, Serialize)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub user_metadata: Map<String, Value>,
}

/// Shape of the backend's list-users response.
#[derive(Debug, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<AdminUser>,
}
