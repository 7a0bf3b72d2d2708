pub mod helpers;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::UsersApi;
use crate::models::AppState;

pub fn build_app<A: UsersApi>(state: AppState<A>) -> Router {
    Router::new()
        .route("/", get(users::users_page::<A>))
        .route("/users", post(users::users_create::<A>))
        .route("/users/:id", post(users::user_update::<A>))
        .route("/users/:id/edit", post(users::user_edit::<A>))
        .route("/users/:id/cancel", post(users::user_cancel_edit::<A>))
        .route("/users/:id/delete", post(users::user_delete::<A>))
        .route("/page/next", post(users::page_next::<A>))
        .route("/page/prev", post(users::page_prev::<A>))
        .route("/page/size", post(users::page_size::<A>))
        .route("/page/goto", post(users::page_goto::<A>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
