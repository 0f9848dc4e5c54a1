use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wellness service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum WellnessServiceError {
    #[error("invalid value for {0}")]
    Validation(&'static str),
    #[error("assessment already exists")]
    AssessmentAlreadyExists,
    #[error("consent already exists")]
    ConsentAlreadyExists,
    #[error("assessment not found")]
    AssessmentNotFound,
    #[error("session not found")]
    SessionNotFound,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl WellnessServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::AssessmentAlreadyExists => "ASSESSMENT_ALREADY_EXISTS",
            Self::ConsentAlreadyExists => "CONSENT_ALREADY_EXISTS",
            Self::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for WellnessServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::AssessmentAlreadyExists | Self::ConsentAlreadyExists => StatusCode::CONFLICT,
            Self::AssessmentNotFound | Self::SessionNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — TraceLayer already records method/uri/status for all
        // requests, and 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: WellnessServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_validation_with_field_name() {
        assert_error(
            WellnessServiceError::Validation("age"),
            StatusCode::BAD_REQUEST,
            "VALIDATION",
            "invalid value for age",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_assessment_already_exists() {
        assert_error(
            WellnessServiceError::AssessmentAlreadyExists,
            StatusCode::CONFLICT,
            "ASSESSMENT_ALREADY_EXISTS",
            "assessment already exists",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_consent_already_exists() {
        assert_error(
            WellnessServiceError::ConsentAlreadyExists,
            StatusCode::CONFLICT,
            "CONSENT_ALREADY_EXISTS",
            "consent already exists",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_assessment_not_found() {
        assert_error(
            WellnessServiceError::AssessmentNotFound,
            StatusCode::NOT_FOUND,
            "ASSESSMENT_NOT_FOUND",
            "assessment not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_session_not_found() {
        assert_error(
            WellnessServiceError::SessionNotFound,
            StatusCode::NOT_FOUND,
            "SESSION_NOT_FOUND",
            "session not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_missing_data() {
        assert_error(
            WellnessServiceError::MissingData,
            StatusCode::BAD_REQUEST,
            "MISSING_DATA",
            "missing data",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            WellnessServiceError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            WellnessServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
