// src/exit.rs
//! Standardized process exit codes for `lineage`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::LineageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LineageExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, formatting).
    Error = 1,
    /// Input validation failed (malformed dataset, bad config, unknown dataset).
    InvalidInput = 2,
    /// The requested node is not part of the active graph.
    NotFound = 3,
    /// A dataset contains a cycle and the policy rejects it.
    CycleDetected = 4,
}

impl LineageExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed command to the exit code scripts should observe.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LineageError>() {
            Some(LineageError::NotFound { .. }) => Self::NotFound,
            Some(LineageError::CycleDetected { .. }) => Self::CycleDetected,
            Some(
                LineageError::MalformedInput { .. }
                | LineageError::UnknownDataset { .. }
                | LineageError::Config(_),
            ) => Self::InvalidInput,
            Some(LineageError::Io { .. }) | None => Self::Error,
        }
    }
}

impl Termination for LineageExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
