use askama::Template;

use crate::config::PAGE_SIZES;
use crate::models::{SelectOption, UserRow};
use crate::services::UsersState;

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersPageTemplate {
    pub api_hostname: String,
    pub rows: Vec<UserRow>,
    pub draft_name: String,
    pub draft_email: String,
    pub draft_roles: Vec<SelectOption>,
    pub edit_name: String,
    pub edit_email: String,
    pub edit_roles: Vec<SelectOption>,
    pub page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub page_sizes: Vec<SelectOption>,
}

impl UsersPageTemplate {
    pub fn from_state(state: &UsersState, api_hostname: String) -> Self {
        let rows = state
            .users
            .iter()
            .map(|u| UserRow::from_record(u, state.is_editing(&u.id)))
            .collect();
        let (edit_name, edit_email, edit_roles) = match &state.editing {
            Some(edit) => (edit.name.clone(), edit.email.clone(), SelectOption::roles(edit.role)),
            None => (String::new(), String::new(), Vec::new()),
        };
        let pagination = &state.pagination;
        Self {
            api_hostname,
            rows,
            draft_name: state.draft.name.clone(),
            draft_email: state.draft.email.clone(),
            draft_roles: SelectOption::roles(state.draft.role),
            edit_name,
            edit_email,
            edit_roles,
            page: pagination.page,
            total_pages: pagination.last_page(),
            has_prev: pagination.has_prev(),
            has_next: pagination.has_next(),
            page_sizes: SelectOption::page_sizes(&PAGE_SIZES, pagination.limit),
        }
    }
}
