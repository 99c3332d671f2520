use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::admin::AdminClient;
use crate::error::AdminError;
use crate::responses;
use crate::types::{
    CreateUserRequest, DeactivateUserRequest, UpdateUserRequest, UserAttributes, UserSummary,
};

/// List every account, projected down to the fields the admin UI shows.
pub async fn list_users(client: &AdminClient) -> Result<Response<Body>, Error> {
    let users = match client.list_users().await {
        Ok(users) => users,
        Err(err) => return backend_error(err),
    };

    let users: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();
    responses::json(StatusCode::OK, &json!({ "users": users }))
}

/// Create an account. New accounts always start active, whatever the caller
/// put in the body; everything else is validated by the backend.
pub async fn create_user(client: &AdminClient, body: &[u8]) -> Result<Response<Body>, Error> {
    let req: CreateUserRequest = match parse_body(body) {
        Ok(req) => req,
        Err(message) => return responses::error(StatusCode::BAD_REQUEST, &message),
    };

    let attributes = UserAttributes {
        email: req.email,
        password: req.password,
        user_metadata: metadata(req.role, req.name, Some(true)),
    };

    match client.create_user(&attributes).await {
        Ok(user) => responses::json(StatusCode::OK, &json!({ "user": user })),
        Err(err) => backend_error(err),
    }
}

/// Full-replace update. Fields the caller omits are forwarded as absent and
/// overwrite per the backend's replace semantics; nothing is merged here.
pub async fn update_user(client: &AdminClient, body: &[u8]) -> Result<Response<Body>, Error> {
    let req: UpdateUserRequest = match parse_body(body) {
        Ok(req) => req,
        Err(message) => return responses::error(StatusCode::BAD_REQUEST, &message),
    };

    let attributes = UserAttributes {
        email: req.email,
        password: req.password,
        user_metadata: metadata(req.role, req.name, req.is_active),
    };

    match client.update_user_by_id(&req.id, &attributes).await {
        Ok(user) => responses::json(StatusCode::OK, &json!({ "user": user })),
        Err(err) => backend_error(err),
    }
}

/// Soft delete: flip the metadata flag, never remove the record. The
/// response confirms the deactivation without echoing the record.
pub async fn deactivate_user(client: &AdminClient, body: &[u8]) -> Result<Response<Body>, Error> {
    let req: DeactivateUserRequest = match parse_body(body) {
        Ok(req) => req,
        Err(message) => return responses::error(StatusCode::BAD_REQUEST, &message),
    };

    let attributes = UserAttributes {
        email: None,
        password: None,
        user_metadata: metadata(None, None, Some(false)),
    };

    match client.update_user_by_id(&req.id, &attributes).await {
        Ok(_) => responses::json(
            StatusCode::OK,
            &json!({ "message": format!("User {} deactivated", req.id) }),
        ),
        Err(err) => backend_error(err),
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|err| format!("invalid request body: {err}"))
}

/// Metadata map forwarded to the backend. Fields the caller left out are
/// omitted, not sent as null.
fn metadata(role: Option<String>, name: Option<String>, is_active: Option<bool>) -> Map<String, Value> {
    let mut meta = Map::new();
    if let Some(role) = role {
        meta.insert("role".to_string(), Value::String(role));
    }
    if let Some(name) = name {
        meta.insert("name".to_string(), Value::String(name));
    }
    if let Some(is_active) = is_active {
        meta.insert("is_active".to_string(), Value::Bool(is_active));
    }
    meta
}

fn backend_error(err: AdminError) -> Result<Response<Body>, Error> {
    tracing::error!("identity admin call failed: {err}");
    responses::error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}
