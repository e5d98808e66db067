use crate::{
    database::UserStore,
    error::{AppError, Result},
    models::{AuthResponse, CharacterType, LoginRequest, NewUser, RegisterRequest, UserRole},
    utils::{jwt::JwtKeys, password},
};

const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 4..=20;
const NICKNAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=10;
const MIN_PASSWORD_LENGTH: usize = 6;

pub async fn register(
    users: &dyn UserStore,
    keys: &JwtKeys,
    bcrypt_cost: u32,
    payload: RegisterRequest,
) -> Result<AuthResponse> {
    let character_type = validate_registration(&payload)?;
    let username = payload.username.trim();
    let nickname = payload.nickname.trim();

    if users.find_by_username(username).await?.is_some() {
        return Err(AppError::Conflict("Username is already taken".to_string()));
    }

    if users.find_by_nickname(nickname).await?.is_some() {
        return Err(AppError::Conflict("Nickname is already taken".to_string()));
    }

    if payload.password != payload.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    let password_hash = password::hash_password(&payload.password, bcrypt_cost)?;

    let user = users
        .create_user(&NewUser {
            username: username.to_string(),
            nickname: nickname.to_string(),
            password_hash,
            role: UserRole::User,
            character_type,
        })
        .await?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    let token = keys.generate_token(&user)?;

    Ok(AuthResponse {
        token,
        user: user.into(),
    })
}

pub async fn login(users: &dyn UserStore, keys: &JwtKeys, payload: LoginRequest) -> Result<AuthResponse> {
    let user = users
        .find_by_username(payload.username.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        return Err(invalid_credentials());
    }

    let token = keys.generate_token(&user)?;

    Ok(AuthResponse {
        token,
        user: user.into(),
    })
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid username or password".to_string())
}

fn validate_registration(payload: &RegisterRequest) -> Result<CharacterType> {
    let username = payload.username.trim();
    if !USERNAME_LENGTH.contains(&username.len())
        || !username.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(AppError::BadRequest(
            "Username must be 4-20 letters or digits".to_string(),
        ));
    }

    if !NICKNAME_LENGTH.contains(&payload.nickname.trim().chars().count()) {
        return Err(AppError::BadRequest(
            "Nickname must be 2-10 characters".to_string(),
        ));
    }

    if payload.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    if !payload.terms_agreed {
        return Err(AppError::BadRequest(
            "Terms of service must be accepted".to_string(),
        ));
    }

    payload
        .character_type
        .ok_or_else(|| AppError::BadRequest("character_type is required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    const COST: u32 = 4;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret", 1)
    }

    fn request(username: &str, nickname: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            nickname: nickname.to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            character_type: Some(CharacterType::Tango),
            terms_agreed: true,
        }
    }

    #[tokio::test]
    async fn registers_and_logs_in() {
        let store = MemoryStore::new();
        let keys = keys();

        let registered = register(&store, &keys, COST, request("tango01", "Tango"))
            .await
            .unwrap();
        assert_eq!(registered.user.role, UserRole::User);
        assert_eq!(registered.user.character_type, CharacterType::Tango);

        let claims = keys.verify_token(&registered.token).unwrap();
        assert_eq!(claims.sub, registered.user.id.to_string());

        let logged_in = login(
            &store,
            &keys,
            LoginRequest {
                username: "tango01".to_string(),
                password: "secret1".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict_and_writes_nothing() {
        let store = MemoryStore::new();
        register(&store, &keys(), COST, request("tango01", "Tango"))
            .await
            .unwrap();

        let err = register(&store, &keys(), COST, request("tango01", "Other"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let err = register(&store, &keys(), COST, request("tango02", "Tango"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn uniqueness_is_checked_before_password_confirmation() {
        let store = MemoryStore::new();
        register(&store, &keys(), COST, request("tango01", "Tango"))
            .await
            .unwrap();

        let mut payload = request("tango01", "Tangoo");
        payload.confirm_password = "different".to_string();
        let err = register(&store, &keys(), COST, payload).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let mut payload = request("fresh01", "Fresh");
        payload.confirm_password = "different".to_string();
        let err = register(&store, &keys(), COST, payload).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn invalid_fields_are_rejected() {
        let store = MemoryStore::new();
        let cases = [
            request("abc", "Tango"),
            request("bad name", "Tango"),
            request("averyveryverylongusername", "Tango"),
            request("tango01", "T"),
            request("tango01", "Nicknamelong"),
            RegisterRequest {
                password: "short".to_string(),
                confirm_password: "short".to_string(),
                ..request("tango01", "Tango")
            },
            RegisterRequest {
                terms_agreed: false,
                ..request("tango01", "Tango")
            },
            RegisterRequest {
                character_type: None,
                ..request("tango01", "Tango")
            },
        ];

        for payload in cases {
            let err = register(&store, &keys(), COST, payload).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }

        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_look_the_same() {
        let store = MemoryStore::new();
        register(&store, &keys(), COST, request("tango01", "Tango"))
            .await
            .unwrap();

        let unknown = login(
            &store,
            &keys(),
            LoginRequest {
                username: "nobody".to_string(),
                password: "secret1".to_string(),
            },
        )
        .await
        .unwrap_err();

        let wrong = login(
            &store,
            &keys(),
            LoginRequest {
                username: "tango01".to_string(),
                password: "secret2".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(wrong, AppError::Unauthorized(_)));
    }
}
