//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Access level carried in `x-vitala-user-role`. The gateway sends the
/// numeric level; anything above the known range is treated as admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserRole {
    Participant,
    Staff,
    Admin,
}

impl UserRole {
    fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Participant,
            1 => Self::Staff,
            _ => Self::Admin,
        }
    }
}

/// User identity injected by the gateway via `x-vitala-user-id` and
/// `x-vitala-user-role` headers.
///
/// Returns 401 if either header is absent or cannot be parsed. Privileged
/// endpoints enforce the role after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl IdentityHeaders {
    /// Staff and admin identities may read cross-user data.
    pub fn is_staff(&self) -> bool {
        self.role >= UserRole::Staff
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-vitala-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let role = parts
            .headers
            .get("x-vitala-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())
            .map(UserRole::from_level);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let role = role.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id, role })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use http::Request;

    async fn extract_identity(headers: Vec<(&str, &str)>) -> Result<IdentityHeaders, StatusCode> {
        let mut builder = Request::builder().method("GET").uri("/test");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, _body) = request.into_parts();
        IdentityHeaders::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn should_extract_valid_identity_headers() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![
            ("x-vitala-user-id", &user_id.to_string()),
            ("x-vitala-user-role", "1"),
        ])
        .await;

        let identity = result.unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role, UserRole::Staff);
        assert!(identity.is_staff());
    }

    #[tokio::test]
    async fn should_not_mark_participant_as_staff() {
        let user_id = Uuid::new_v4();
        let identity = extract_identity(vec![
            ("x-vitala-user-id", &user_id.to_string()),
            ("x-vitala-user-role", "0"),
        ])
        .await
        .unwrap();
        assert_eq!(identity.role, UserRole::Participant);
        assert!(!identity.is_staff());
    }

    #[tokio::test]
    async fn should_treat_levels_above_known_range_as_admin() {
        let user_id = Uuid::new_v4();
        let identity = extract_identity(vec![
            ("x-vitala-user-id", &user_id.to_string()),
            ("x-vitala-user-role", "7"),
        ])
        .await
        .unwrap();
        assert_eq!(identity.role, UserRole::Admin);
        assert!(identity.is_staff());
    }

    #[tokio::test]
    async fn should_reject_missing_user_id() {
        let result = extract_identity(vec![("x-vitala-user-role", "0")]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_invalid_uuid() {
        let result = extract_identity(vec![
            ("x-vitala-user-id", "not-a-uuid"),
            ("x-vitala-user-role", "0"),
        ])
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_missing_user_role() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![("x-vitala-user-id", &user_id.to_string())]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_invalid_user_role() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![
            ("x-vitala-user-id", &user_id.to_string()),
            ("x-vitala-user-role", "abc"),
        ])
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
