use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{NewUser, User, UserQuery},
    queries::like_pattern,
};

pub async fn create_user(pool: &PgPool, user: &NewUser) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO memory_users (username, nickname, password_hash, role, character_type)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&user.username)
    .bind(&user.nickname)
    .bind(&user.password_hash)
    .bind(user.role)
    .bind(user.character_type)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict("Username or nickname is already taken".to_string())
        }
        other => AppError::from(other),
    })?;

    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM memory_users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM memory_users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn find_by_nickname(pool: &PgPool, nickname: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM memory_users WHERE nickname = $1")
        .bind(nickname)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn search_users(pool: &PgPool, params: &UserQuery) -> Result<(Vec<User>, i64)> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new(
        "SELECT *, COUNT(*) OVER() AS total_count FROM memory_users WHERE 1=1",
    );

    if let Some(username) = params.username_term() {
        query_builder.push(" AND username ILIKE ");
        query_builder.push_bind(like_pattern(username));
    }

    query_builder.push(" ORDER BY created_at DESC, id DESC");

    query_builder.push(" LIMIT ");
    query_builder.push_bind(params.limit());
    query_builder.push(" OFFSET ");
    query_builder.push_bind(params.offset());

    #[derive(sqlx::FromRow)]
    struct SearchResult {
        #[sqlx(flatten)]
        user: User,
        total_count: i64,
    }

    let results = query_builder
        .build_query_as::<SearchResult>()
        .fetch_all(pool)
        .await?;

    let total = results.first().map(|r| r.total_count).unwrap_or(0);
    let users = results.into_iter().map(|r| r.user).collect();

    Ok((users, total))
}
