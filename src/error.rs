//! Coexistence command error types

use thiserror::Error;
use wmi_transport::error::errno;
use wmi_transport::TransportError;

/// Errors from the coexistence send path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BtcoexError {
    /// Request too short to carry the 4-byte tag
    #[error("Request too short: {len} bytes, need at least 4")]
    RequestTooShort { len: usize },

    /// Tag does not name a coexistence command
    #[error("Unknown coexistence request tag {0}")]
    UnknownCommand(u32),

    /// Outbound command buffer could not be allocated
    #[error("Out of memory allocating {0}-byte command buffer")]
    NoMemory(usize),

    /// Transport layer error, passed through unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl BtcoexError {
    /// Negative errno for the legacy integer status contract
    ///
    /// Unknown tags and allocation failures share `-ENOMEM`; callers written
    /// against the old interface expect exactly that.
    pub fn errno(&self) -> i32 {
        match self {
            Self::RequestTooShort { .. } => -errno::EINVAL,
            Self::UnknownCommand(_) | Self::NoMemory(_) => -errno::ENOMEM,
            Self::Transport(e) => e.errno(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_oom_share_errno() {
        assert_eq!(BtcoexError::UnknownCommand(99).errno(), -12);
        assert_eq!(BtcoexError::NoMemory(64).errno(), -12);
    }

    #[test]
    fn test_transport_errno_passthrough() {
        let err: BtcoexError = TransportError::Status(-110).into();
        assert_eq!(err.errno(), -110);
    }
}
