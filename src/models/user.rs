use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

/// User persona chosen at sign-up; drives personalized recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "character_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CharacterType {
    Tango,
    Tosim,
    WaffleBear,
    BusyDog,
}

impl CharacterType {
    pub fn display_name(self) -> &'static str {
        match self {
            CharacterType::Tango => "Tango the Adventurer",
            CharacterType::Tosim => "Tosim the Dreamer",
            CharacterType::WaffleBear => "Waffle Bear the Scientist",
            CharacterType::BusyDog => "Busy Dog",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub password_hash: String,
    pub role: UserRole,
    pub character_type: CharacterType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub nickname: String,
    pub password_hash: String,
    pub role: UserRole,
    pub character_type: CharacterType,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub character_type: Option<CharacterType>,
    #[serde(default)]
    pub terms_agreed: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub role: UserRole,
    pub character_type: CharacterType,
    pub character_name: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
            role: user.role,
            character_type: user.character_type,
            character_name: user.character_type.display_name(),
            created_at: user.created_at,
        }
    }
}
