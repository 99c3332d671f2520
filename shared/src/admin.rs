use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::AdminError;
use crate::types::{AdminUser, UserAttributes, UserList};

/// Client for the identity provider's admin API. Every call is fire-once:
/// no retries and no request timeout (the platform bounds invocation time).
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: String,
    service_key: String,
}

impl AdminClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::builder()
                .user_agent("manage-users-gateway")
                .build()
                .expect("failed to build admin API client"),
            base_url: config.identity_api_url.clone(),
            service_key: config.service_role_key.clone(),
        }
    }

    // The backend expects the service role key both as bearer token and as
    // an apikey header
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    /// List every account. The backend does not paginate this listing.
    pub async fn list_users(&self) -> Result<Vec<AdminUser>, AdminError> {
        let url = format!("{}/admin/users", self.base_url);
        let response = self.authed(self.http.get(&url)).send().await?;
        let page: UserList = Self::parse(response).await?;
        Ok(page.users)
    }

    pub async fn create_user(&self, attributes: &UserAttributes) -> Result<AdminUser, AdminError> {
        let url = format!("{}/admin/users", self.base_url);
        let response = self
            .authed(self.http.post(&url))
            .json(attributes)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Full-replace update of one account; attributes absent from the
    /// payload are forwarded as absent, not merged in by the gateway.
    pub async fn update_user_by_id(
        &self,
        id: &str,
        attributes: &UserAttributes,
    ) -> Result<AdminUser, AdminError> {
        let url = format!("{}/admin/users/{}", self.base_url, id);
        let response = self
            .authed(self.http.put(&url))
            .json(attributes)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, AdminError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        Err(AdminError::Api {
            status: status.as_u16(),
            message: Self::error_message(status, response).await,
        })
    }

    /// Pull a readable message out of a failed response. The backend varies
    /// between `msg`, `message`, `error` and `error_description` depending
    /// on which layer rejected the call.
    async fn error_message(status: StatusCode, response: Response) -> String {
        let text = response.text().await.unwrap_or_default();
        if let Ok(body) = serde_json::from_str::<Value>(&text) {
            for key in ["msg", "message", "error", "error_description"] {
                if let Some(message) = body.get(key).and_then(Value::as_str) {
                    return message.to_string();
                }
            }
        }
        if text.trim().is_empty() {
            status.to_string()
        } else {
            text
        }
    }
}
