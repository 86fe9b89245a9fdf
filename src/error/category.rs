use std::fmt;

/// Coarse bucket for a failed generation, logged as the `category` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Model service unreachable or too slow
    Network,
    /// Credentials rejected (HTTP 401/403)
    Auth,
    /// Model service failed or produced nothing usable
    Server,
    /// Model text did not follow the requested format
    Client,
    /// Local settings are missing or wrong
    Configuration,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Whether asking again unchanged has a reasonable chance of working.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::Client
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
