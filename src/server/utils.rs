//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::ServiceError;

impl HttpServer {
    /// Format a readable error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> ServiceError {
        let error_str = error.to_string();

        if error.kind() == std::io::ErrorKind::AddrInUse
            || error_str.contains("Address already in use")
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            ServiceError::internal(format!(
                "Port {} is already in use. Stop the other process or set QUOTE_PORT={}",
                port,
                port.saturating_add(1)
            ))
        } else if error.kind() == std::io::ErrorKind::PermissionDenied
            || error_str.contains("os error 13")
        {
            ServiceError::internal(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. QUOTE_PORT=8000",
                port
            ))
        } else {
            ServiceError::internal(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
