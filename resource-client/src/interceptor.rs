//! Error interception hook
//!
//! Status mutations hand their failures to an [`ErrorInterceptor`] before
//! returning them. The hook may log or translate an error, but always
//! returns one: a failure can't be turned into a success here.

use std::fmt;

use crate::ClientError;

/// Where an intercepted error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterceptContext<'a> {
    /// Resource endpoint (e.g. "zonas")
    pub endpoint: &'a str,
    /// Operation name (e.g. "update_status")
    pub operation: &'static str,
    /// Record id, when the call targets one
    pub id: Option<i64>,
}

/// Hook applied to failures before they reach the caller
pub trait ErrorInterceptor: Send + Sync + fmt::Debug {
    fn intercept(&self, ctx: &InterceptContext<'_>, error: ClientError) -> ClientError;
}

/// Returns the error unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Rethrow;

impl ErrorInterceptor for Rethrow {
    fn intercept(&self, _ctx: &InterceptContext<'_>, error: ClientError) -> ClientError {
        error
    }
}

/// Logs the error at warn level, then returns it unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrors;

impl ErrorInterceptor for LogErrors {
    fn intercept(&self, ctx: &InterceptContext<'_>, error: ClientError) -> ClientError {
        tracing::warn!(
            endpoint = ctx.endpoint,
            operation = ctx.operation,
            id = ?ctx.id,
            status = ?error.status(),
            error = %error,
            "Request failed"
        );
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn ctx() -> InterceptContext<'static> {
        InterceptContext {
            endpoint: "zonas",
            operation: "update_status",
            id: Some(5),
        }
    }

    #[test]
    fn test_rethrow_is_identity() {
        let err = Rethrow.intercept(
            &ctx(),
            ClientError::Status {
                status: StatusCode::BAD_REQUEST,
                body: "estatus invalido".into(),
            },
        );
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.body(), Some("estatus invalido"));
    }

    #[test]
    fn test_log_errors_passes_through() {
        let err = LogErrors.intercept(&ctx(), ClientError::Internal("boom".into()));
        assert!(matches!(err, ClientError::Internal(msg) if msg == "boom"));
    }
}
