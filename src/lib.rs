//! Paginated users list with create/edit/delete forms against a remote
//! `/api/users` collection.
//!
//! The crate exposes one controller ([`services::UsersController`]) and two
//! views over it: a server-rendered page (see [`handlers::build_app`]) and the
//! `userdeck` command-line tool.

pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod templates;
pub mod utils;
