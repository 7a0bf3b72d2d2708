use std::sync::Arc;

use crate::api::UsersApi;
use crate::services::UsersController;

/// Shared state of the web view: the single component instance.
pub struct AppState<A> {
    pub controller: Arc<UsersController<A>>,
    pub api_base_url: String,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            api_base_url: self.api_base_url.clone(),
        }
    }
}

impl<A: UsersApi> AppState<A> {
    pub fn new(controller: UsersController<A>, api_base_url: impl Into<String>) -> Self {
        Self {
            controller: Arc::new(controller),
            api_base_url: api_base_url.into(),
        }
    }
}
