//! Helper functions for creating specific error types

use super::types::ServiceError;

/// Helper functions for creating specific errors
impl ServiceError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::Notification(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller sent something the service refuses to process
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Pricing(_) | Self::Validation(_) | Self::BadRequest(_) | Self::NotFound(_)
        )
    }
}
