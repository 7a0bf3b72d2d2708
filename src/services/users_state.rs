use crate::models::{NewUser, Pagination, UserRecord, UsersPage};

/// Local state of the users component.
///
/// Every `apply_*` method is the success half of a remote operation; a
/// failed request never reaches them, so failures leave the state as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    pub users: Vec<UserRecord>,
    pub draft: NewUser,
    pub editing: Option<UserRecord>,
    pub pagination: Pagination,
}

impl UsersState {
    pub fn new(page_size: u32) -> Self {
        Self {
            users: Vec::new(),
            draft: NewUser::default(),
            editing: None,
            pagination: Pagination::new(page_size),
        }
    }

    /// Replace the whole list and the page count; no merging.
    pub fn apply_page(&mut self, page: UsersPage) {
        self.users = page.users;
        self.pagination.total_pages = page.total_pages;
    }

    pub fn apply_created(&mut self, created: UserRecord) {
        self.users.push(created);
        self.draft = NewUser::default();
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }

    /// Swap in the edited copy at its position and close the edit form.
    pub fn apply_updated(&mut self, updated: &UserRecord) {
        for user in self.users.iter_mut().filter(|u| u.id == updated.id) {
            *user = updated.clone();
        }
        self.editing = None;
    }

    pub fn set_draft(&mut self, draft: NewUser) {
        self.draft = draft;
    }

    /// Open the edit form on a listed record. Returns `false` for an unknown id.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.users.iter().find(|u| u.id == id) {
            Some(user) => {
                self.editing = Some(user.clone());
                true
            }
            None => false,
        }
    }

    /// Overwrite the fields of the record being edited. No-op without an open edit.
    pub fn edit_fields(&mut self, fields: NewUser) -> bool {
        match self.editing.as_mut() {
            Some(user) => {
                user.apply_fields(fields);
                true
            }
            None => false,
        }
    }

    /// Apply `fields` only when the open edit is for `id`, and return the
    /// edited record. Check and write happen under the same borrow.
    pub fn edit_fields_for(&mut self, id: &str, fields: NewUser) -> Option<UserRecord> {
        let user = self.editing.as_mut().filter(|u| u.id == id)?;
        user.apply_fields(fields);
        Some(user.clone())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|u| u.id == id)
    }
}
