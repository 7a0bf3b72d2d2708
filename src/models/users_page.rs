use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Body of `GET /api/users?page=&limit=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    pub total_pages: u32,
}
