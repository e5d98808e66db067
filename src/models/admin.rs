use serde::{Deserialize, Serialize};

use crate::models::UserResponse;

const DEFAULT_USER_PAGE_SIZE: i64 = 20;
const MAX_USER_PAGE_SIZE: i64 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    /// Case-insensitive substring of the username.
    pub username: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl UserQuery {
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_USER_PAGE_SIZE)
            .clamp(1, MAX_USER_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn username_term(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct UserSearchResponse {
    pub users: Vec<UserResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
