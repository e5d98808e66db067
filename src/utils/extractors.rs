use crate::{
    error::{AppError, Result},
    models::UserRole,
    utils::jwt::Claims,
};

pub fn extract_user_id(claims: &Claims) -> Result<i64> {
    claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))
}

/// Lets a caller act on `user_id` only when it is their own id or they are an admin.
pub fn ensure_self_or_admin(claims: &Claims, user_id: i64) -> Result<()> {
    if claims.role == UserRole::Admin || extract_user_id(claims)? == user_id {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "Cannot access another user's recommendations".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: UserRole) -> Claims {
        Claims {
            sub: sub.to_string(),
            username: "someone".to_string(),
            role,
            exp: 0,
        }
    }

    #[test]
    fn malformed_subject_is_unauthorized() {
        let err = extract_user_id(&claims("abc", UserRole::User)).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn only_owner_or_admin_passes() {
        assert!(ensure_self_or_admin(&claims("3", UserRole::User), 3).is_ok());
        assert!(ensure_self_or_admin(&claims("9", UserRole::Admin), 3).is_ok());

        let err = ensure_self_or_admin(&claims("4", UserRole::User), 3).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
