use std::future::Future;

use reqwest::Method;

use super::client::{api_call, api_call_discard};
use super::error::ApiError;
use crate::config::USERS_ENDPOINT;
use crate::models::{NewUser, UserRecord, UsersPage};

/// The remote users collection.
pub trait UsersApi: Send + Sync + 'static {
    /// `GET /api/users?page={page}&limit={limit}`
    fn list_users(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<UsersPage, ApiError>> + Send;

    /// `POST /api/users`, returns the record the server created.
    fn create_user(
        &self,
        draft: &NewUser,
    ) -> impl Future<Output = Result<UserRecord, ApiError>> + Send;

    /// `PATCH /api/users/{id}` with the full record. The response body is ignored.
    fn update_user(&self, user: &UserRecord) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /api/users/{id}`
    fn delete_user(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// [`UsersApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpUsersApi {
    client: reqwest::Client,
    api_base_url: String,
}

impl HttpUsersApi {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("userdeck/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, api_base_url))
    }

    pub fn with_client(client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

fn user_endpoint(id: &str) -> String {
    format!("{}/{}", USERS_ENDPOINT, urlencoding::encode(id))
}

impl UsersApi for HttpUsersApi {
    async fn list_users(&self, page: u32, limit: u32) -> Result<UsersPage, ApiError> {
        let params = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        let payload = api_call(
            &self.client,
            &self.api_base_url,
            Method::GET,
            USERS_ENDPOINT,
            None,
            Some(&params),
        )
        .await?;
        Ok(serde_json::from_value(payload)?)
    }

    async fn create_user(&self, draft: &NewUser) -> Result<UserRecord, ApiError> {
        let body = serde_json::to_value(draft)?;
        let payload = api_call(
            &self.client,
            &self.api_base_url,
            Method::POST,
            USERS_ENDPOINT,
            Some(&body),
            None,
        )
        .await?;
        Ok(serde_json::from_value(payload)?)
    }

    async fn update_user(&self, user: &UserRecord) -> Result<(), ApiError> {
        let body = serde_json::to_value(user)?;
        api_call_discard(
            &self.client,
            &self.api_base_url,
            Method::PATCH,
            &user_endpoint(&user.id),
            Some(&body),
        )
        .await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        api_call_discard(
            &self.client,
            &self.api_base_url,
            Method::DELETE,
            &user_endpoint(id),
            None,
        )
        .await
    }
}
