//! Error types for launch-intel.
//!
//! Both core operations are closed-form numeric computations, so the only
//! failure they report is bad input. Everything else here belongs to the
//! exporters and the presentation shell.

use thiserror::Error;

/// Result type alias for launch-intel operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A simulation input outside its physical domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in `LaunchParams`.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// Step count below one.
    #[error("invalid parameter `steps` = {0}: must be at least 1")]
    InvalidSteps(u32),

    /// Login form rejected by the shell.
    #[error("login rejected: {0}")]
    Login(#[from] LoginError),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons the login form can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("name must not be empty")]
    MissingName,
    #[error("a role must be selected")]
    MissingRole,
}

/// A mission type or vehicle name that matches no known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{input}`")]
pub struct ParseError {
    pub kind: &'static str,
    pub input: String,
}

impl LaunchError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }

    /// True for input-validation failures (as opposed to I/O).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. } | Self::InvalidSteps(_))
    }
}
