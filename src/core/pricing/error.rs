//! Pricing engine errors

use thiserror::Error;

/// Result type alias for pricing computations
pub type PricingResult<T> = std::result::Result<T, PricingError>;

/// Invalid input rejected before any price is computed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Custom quote without a mailbox count
    #[error("A mailbox count is required for custom quotes")]
    MissingMailboxCount,

    /// Mailbox count of zero
    #[error("Mailbox count must be at least 1, got {0}")]
    InvalidMailboxCount(u32),

    /// Mailbox count above the configured ceiling
    #[error("Mailbox count {requested} exceeds the maximum of {max}")]
    MailboxLimitExceeded { requested: u32, max: u32 },

    /// Mailbox count below every tier's lower bound
    #[error("Mailbox count {requested} is below the lowest tier minimum of {minimum}")]
    BelowMinimumTier { requested: u32, minimum: u32 },

    /// Selector names no configured package
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    /// Named package requested with a different explicit mailbox count
    #[error("Package {package} includes {expected} mailboxes, but {requested} were requested")]
    PackageMismatch {
        package: String,
        expected: u32,
        requested: u32,
    },

    /// Configured rates too large to price the requested count
    #[error("Quote amount for {mailboxes} mailboxes is out of range")]
    AmountOverflow { mailboxes: u32 },
}

impl PricingError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingMailboxCount => "MISSING_MAILBOX_COUNT",
            Self::InvalidMailboxCount(_) => "INVALID_MAILBOX_COUNT",
            Self::MailboxLimitExceeded { .. } => "MAILBOX_LIMIT_EXCEEDED",
            Self::BelowMinimumTier { .. } => "BELOW_MINIMUM_TIER",
            Self::UnknownPackage(_) => "UNKNOWN_PACKAGE",
            Self::PackageMismatch { .. } => "PACKAGE_MISMATCH",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}
