//! Error types.
//!
//! Loading and execution fail in distinct ways and each has its own type, so that
//! callers and tests can match on exactly what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched opcode has no defined behavior.
    #[error("Unknown opcode 0x{opcode:02X} at address 0x{address:04X}")]
    IllegalOpcode {
        /// Opcode byte that was fetched.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}

/// Errors raised while reading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read program image {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure the [`Emulator`](crate::Emulator) can report.
#[derive(Debug, Error)]
pub enum EmulatorError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_opcode_message() {
        let err = ExecutionError::IllegalOpcode {
            opcode: 0x02,
            address: 0x1234,
        };
        assert_eq!(err.to_string(), "Unknown opcode 0x02 at address 0x1234");
    }

    #[test]
    fn test_emulator_error_keeps_kind() {
        let err: EmulatorError = ExecutionError::IllegalOpcode {
            opcode: 0xFF,
            address: 0x0000,
        }
        .into();
        assert!(matches!(
            err,
            EmulatorError::Execution(ExecutionError::IllegalOpcode { opcode: 0xFF, .. })
        ));
    }
}
