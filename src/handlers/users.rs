//! Events of the users page. Request failures are already logged by the
//! controller and never reach the page.

use axum::{
    extract::{Form, Path, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::api::UsersApi;
use crate::models::{AppState, NewUser};
use crate::templates::UsersPageTemplate;
use crate::utils::hostname_from_url;

use super::helpers::{back_to_list, render_template};

pub async fn users_page<A: UsersApi>(State(state): State<AppState<A>>) -> impl IntoResponse {
    let snapshot = state.controller.snapshot();
    render_template(UsersPageTemplate::from_state(
        &snapshot,
        hostname_from_url(&state.api_base_url),
    ))
}

pub async fn users_create<A: UsersApi>(
    State(state): State<AppState<A>>,
    Form(form): Form<NewUser>,
) -> impl IntoResponse {
    state.controller.set_draft(form);
    let _ = state.controller.submit_draft().await;
    back_to_list()
}

pub async fn user_edit<A: UsersApi>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if !state.controller.begin_edit(&id) {
        tracing::debug!(%id, "Edit requested for a user that is not listed");
    }
    back_to_list()
}

pub async fn user_update<A: UsersApi>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
    Form(form): Form<NewUser>,
) -> impl IntoResponse {
    // A stale form for another record must not overwrite the open edit
    match state.controller.edit_fields_for(&id, form) {
        Some(edited) => {
            let _ = state.controller.update(edited).await;
        }
        None => tracing::debug!(%id, "Update posted without a matching open edit"),
    }
    back_to_list()
}

pub async fn user_cancel_edit<A: UsersApi>(State(state): State<AppState<A>>) -> impl IntoResponse {
    state.controller.cancel_edit();
    back_to_list()
}

pub async fn user_delete<A: UsersApi>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let _ = state.controller.delete(&id).await;
    back_to_list()
}

pub async fn page_next<A: UsersApi>(State(state): State<AppState<A>>) -> impl IntoResponse {
    let _ = state.controller.next_page().await;
    back_to_list()
}

pub async fn page_prev<A: UsersApi>(State(state): State<AppState<A>>) -> impl IntoResponse {
    let _ = state.controller.prev_page().await;
    back_to_list()
}

#[derive(Deserialize)]
pub struct PageSizeForm {
    pub limit: u32,
}

pub async fn page_size<A: UsersApi>(
    State(state): State<AppState<A>>,
    Form(form): Form<PageSizeForm>,
) -> impl IntoResponse {
    let _ = state.controller.set_page_size(form.limit).await;
    back_to_list()
}

#[derive(Deserialize)]
pub struct GoToPageForm {
    pub page: u32,
}

pub async fn page_goto<A: UsersApi>(
    State(state): State<AppState<A>>,
    Form(form): Form<GoToPageForm>,
) -> impl IntoResponse {
    let _ = state.controller.go_to_page(form.page).await;
    back_to_list()
}
