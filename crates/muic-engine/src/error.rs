//! Error types for the detection engine

use muic_protocol::DeviceKind;
use thiserror::Error;

/// Errors that can occur during detection and transition handling
#[derive(Error, Debug)]
pub enum MuicError {
    /// The classifier resolved an identity the transition engine has no
    /// attach configuration for
    #[error("no attach configuration for device kind: {0:?}")]
    UnsupportedDevice(DeviceKind),

    /// I/O error from the hardware seam
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
