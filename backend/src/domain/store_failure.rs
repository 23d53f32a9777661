//! Per-endpoint mapping from repository failures to client errors.
//!
//! Endpoints disagree on how store failures are reported: some surface the
//! store's message, some a fixed text; reads answer 500 while most writes
//! answer 400. Each service method declares its own [`StoreFailurePolicy`]
//! instead of sharing one mapping.

use std::future::Future;

use crate::domain::ports::RepositoryError;
use crate::domain::{Error, ErrorCode};

/// How one operation reports a [`RepositoryError`].
///
/// # Examples
/// ```
/// use weather_backend::domain::{ErrorCode, StoreFailurePolicy};
/// use weather_backend::domain::ports::RepositoryError;
///
/// const CREATE: StoreFailurePolicy =
///     StoreFailurePolicy::new("create country", ErrorCode::InvalidRequest)
///         .conflict("Country already exists");
///
/// let err = CREATE.apply(RepositoryError::constraint("duplicate key"));
/// assert_eq!(err.code(), ErrorCode::Conflict);
/// assert_eq!(err.message(), "Country already exists");
///
/// let err = CREATE.apply(RepositoryError::query("value too long"));
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "value too long");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreFailurePolicy {
    operation: &'static str,
    conflict: Option<&'static str>,
    code: ErrorCode,
    message: Option<&'static str>,
    logged: bool,
}

impl StoreFailurePolicy {
    /// Report every failure with `code` and the store's own message.
    #[must_use]
    pub const fn new(operation: &'static str, code: ErrorCode) -> Self {
        Self {
            operation,
            conflict: None,
            code,
            message: None,
            logged: false,
        }
    }

    /// Report integrity violations as [`ErrorCode::Conflict`] with `message`.
    #[must_use]
    pub const fn conflict(self, message: &'static str) -> Self {
        Self {
            conflict: Some(message),
            ..self
        }
    }

    /// Replace the store's message with fixed text for non-conflict failures.
    #[must_use]
    pub const fn message(self, message: &'static str) -> Self {
        Self {
            message: Some(message),
            ..self
        }
    }

    /// Log non-conflict failures at `error` level.
    #[must_use]
    pub const fn logged(self) -> Self {
        Self {
            logged: true,
            ..self
        }
    }

    /// Map `err` to the client-facing error.
    #[must_use]
    pub fn apply(&self, err: RepositoryError) -> Error {
        if let Some(message) = self.conflict.filter(|_| err.is_constraint()) {
            return Error::conflict(message);
        }
        if self.logged {
            tracing::error!(operation = self.operation, error = %err, "store operation failed");
        } else {
            tracing::debug!(operation = self.operation, error = %err, "store operation failed");
        }
        match self.message {
            Some(message) => Error::new(self.code, message),
            None => Error::new(self.code, err.message()),
        }
    }
}

/// Resolve a client identifier to a stored row.
///
/// `id` is `None` when the client value cannot name a row at all; that and a
/// negative `exists` answer both yield `missing` as [`ErrorCode::NotFound`].
/// Lookup failures go through `policy`.
pub(crate) async fn require_existing<Id, F, Fut>(
    id: Option<Id>,
    exists: F,
    missing: &'static str,
    policy: StoreFailurePolicy,
) -> Result<Id, Error>
where
    Id: Copy,
    F: FnOnce(Id) -> Fut,
    Fut: Future<Output = Result<bool, RepositoryError>>,
{
    let id = id.ok_or_else(|| Error::not_found(missing))?;
    if exists(id).await.map_err(|err| policy.apply(err))? {
        Ok(id)
    } else {
        Err(Error::not_found(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const UPDATE: StoreFailurePolicy =
        StoreFailurePolicy::new("update country", ErrorCode::InvalidRequest)
            .conflict("Invalid input: country name already exists")
            .message("Invalid input");

    const LIST: StoreFailurePolicy =
        StoreFailurePolicy::new("list temperatures", ErrorCode::InternalError)
            .message("An error occurred")
            .logged();

    #[rstest]
    #[case(
        RepositoryError::constraint("dup"),
        ErrorCode::Conflict,
        "Invalid input: country name already exists"
    )]
    #[case(RepositoryError::query("bad"), ErrorCode::InvalidRequest, "Invalid input")]
    #[case(RepositoryError::connection("down"), ErrorCode::InvalidRequest, "Invalid input")]
    fn fixed_message_policy(
        #[case] err: RepositoryError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let mapped = UPDATE.apply(err);
        assert_eq!(mapped.code(), code);
        assert_eq!(mapped.message(), message);
    }

    #[rstest]
    fn policies_without_conflict_text_treat_violations_as_generic() {
        let mapped = LIST.apply(RepositoryError::constraint("fk violated"));
        assert_eq!(mapped.code(), ErrorCode::InternalError);
        assert_eq!(mapped.message(), "An error occurred");
    }

    #[tokio::test]
    async fn require_existing_short_circuits_unrepresentable_ids() {
        let err = require_existing(
            None::<i32>,
            |_| std::future::ready(Ok(true)),
            "City not found",
            LIST,
        )
        .await
        .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "City not found");
    }

    #[tokio::test]
    async fn require_existing_applies_the_policy_to_lookup_failures() {
        let err = require_existing(
            Some(1),
            |_| std::future::ready(Err(RepositoryError::connection("refused"))),
            "City not found",
            LIST,
        )
        .await
        .expect_err("lookup fails");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "An error occurred");
    }

    #[rstest]
    fn default_policy_echoes_the_store_message() {
        let policy = StoreFailurePolicy::new("list countries", ErrorCode::InternalError);
        let mapped = policy.apply(RepositoryError::connection("connection refused"));
        assert_eq!(mapped.code(), ErrorCode::InternalError);
        assert_eq!(mapped.message(), "connection refused");
    }
}
