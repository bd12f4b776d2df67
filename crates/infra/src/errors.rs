//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use reservo_domain::ReservoError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ReservoError);

impl From<InfraError> for ReservoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ReservoError> for InfraError {
    fn from(value: ReservoError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ReservoError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let mapped = if err.is_timeout() {
            ReservoError::Network(format!("http request timed out: {err}"))
        } else if err.is_connect() || err.is_request() {
            ReservoError::Network(format!("http request failed: {err}"))
        } else if err.is_decode() {
            ReservoError::Internal(format!("failed to decode response body: {err}"))
        } else {
            ReservoError::Network(format!("http error: {err}"))
        };
        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ReservoError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(err: std::io::Error) -> Self {
        InfraError(ReservoError::Session(format!("session file I/O failed: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_session_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ReservoError = InfraError::from(io).into();
        assert!(matches!(err, ReservoError::Session(_)));
    }
}
