use std::sync::{Mutex, MutexGuard};

use crate::api::{ApiError, UsersApi};
use crate::config::is_valid_page_size;
use crate::models::{NewUser, UserRecord};

use super::users_state::UsersState;

/// Keeps [`UsersState`] in sync with the remote collection.
///
/// The state lock is released before any request is awaited, so concurrent
/// operations interleave freely and the last response to resolve wins.
/// Failed requests are logged and returned; state is left untouched.
pub struct UsersController<A> {
    api: A,
    state: Mutex<UsersState>,
}

impl<A: UsersApi> UsersController<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            state: Mutex::new(UsersState::new(page_size)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn state(&self) -> MutexGuard<'_, UsersState> {
        self.state.lock().expect("users state lock poisoned")
    }

    /// Copy of the current state, for rendering.
    pub fn snapshot(&self) -> UsersState {
        self.state().clone()
    }

    /// First load of the component.
    pub async fn mount(&self) -> Result<(), ApiError> {
        tracing::info!("Mounting users list");
        self.load_page().await
    }

    /// Fetch the page under the current cursor and replace the list with it.
    pub async fn load_page(&self) -> Result<(), ApiError> {
        let (page, limit) = {
            let state = self.state();
            (state.pagination.page, state.pagination.limit)
        };
        match self.api.list_users(page, limit).await {
            Ok(result) => {
                tracing::debug!(page, limit, count = result.users.len(), total_pages = result.total_pages, "Loaded users page");
                self.state().apply_page(result);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%e, page, limit, "Failed to load users");
                Err(e)
            }
        }
    }

    pub async fn create(&self, draft: NewUser) -> Result<(), ApiError> {
        match self.api.create_user(&draft).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "User created");
                self.state().apply_created(created);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%e, "Failed to create user");
                Err(e)
            }
        }
    }

    /// Submit the create-form draft.
    pub async fn submit_draft(&self) -> Result<(), ApiError> {
        let draft = self.state().draft.clone();
        self.create(draft).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        match self.api.delete_user(id).await {
            Ok(()) => {
                tracing::info!(id, "User deleted");
                self.state().apply_deleted(id);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%e, id, "Failed to delete user");
                Err(e)
            }
        }
    }

    pub async fn update(&self, edited: UserRecord) -> Result<(), ApiError> {
        match self.api.update_user(&edited).await {
            Ok(()) => {
                tracing::info!(id = %edited.id, "User updated");
                self.state().apply_updated(&edited);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%e, id = %edited.id, "Failed to update user");
                Err(e)
            }
        }
    }

    /// Submit the open edit form. Nothing is sent when no edit is open.
    pub async fn submit_edit(&self) -> Result<(), ApiError> {
        let editing = self.state().editing.clone();
        match editing {
            Some(edited) => self.update(edited).await,
            None => {
                tracing::debug!("No edit in progress");
                Ok(())
            }
        }
    }

    pub fn set_draft(&self, draft: NewUser) {
        self.state().set_draft(draft);
    }

    pub fn begin_edit(&self, id: &str) -> bool {
        self.state().begin_edit(id)
    }

    pub fn edit_fields(&self, fields: NewUser) -> bool {
        self.state().edit_fields(fields)
    }

    /// See [`UsersState::edit_fields_for`].
    pub fn edit_fields_for(&self, id: &str, fields: NewUser) -> Option<UserRecord> {
        self.state().edit_fields_for(id, fields)
    }

    pub fn cancel_edit(&self) {
        self.state().cancel_edit();
    }

    pub async fn next_page(&self) -> Result<(), ApiError> {
        let moved = {
            let mut state = self.state();
            match state.pagination.next_page() {
                Some(p) => {
                    state.pagination.page = p;
                    true
                }
                None => false,
            }
        };
        if moved {
            self.load_page().await
        } else {
            Ok(())
        }
    }

    pub async fn prev_page(&self) -> Result<(), ApiError> {
        let moved = {
            let mut state = self.state();
            match state.pagination.prev_page() {
                Some(p) => {
                    state.pagination.page = p;
                    true
                }
                None => false,
            }
        };
        if moved {
            self.load_page().await
        } else {
            Ok(())
        }
    }

    /// Jump to `page`, clamped into `[1, total_pages]`. Loads only when the page changed.
    pub async fn go_to_page(&self, page: u32) -> Result<(), ApiError> {
        let moved = {
            let mut state = self.state();
            let target = state.pagination.clamp(page);
            let changed = target != state.pagination.page;
            state.pagination.page = target;
            changed
        };
        if moved {
            self.load_page().await
        } else {
            Ok(())
        }
    }

    /// Change the page size. The current page is kept as is, even if it
    /// falls past the end until the next load reports the new page count.
    pub async fn set_page_size(&self, limit: u32) -> Result<(), ApiError> {
        if !is_valid_page_size(limit) {
            tracing::warn!(limit, "Rejected page size");
            return Err(ApiError::InvalidPageSize(limit));
        }
        self.state().pagination.limit = limit;
        self.load_page().await
    }

    /// Set the cursor without clamping and load it. Used for direct entry
    /// points such as `users list --page`, where no page count is known yet.
    pub async fn load_page_at(&self, page: u32, limit: u32) -> Result<(), ApiError> {
        if !is_valid_page_size(limit) {
            tracing::warn!(limit, "Rejected page size");
            return Err(ApiError::InvalidPageSize(limit));
        }
        {
            let mut state = self.state();
            state.pagination.page = page.max(1);
            state.pagination.limit = limit;
        }
        self.load_page().await
    }
}
