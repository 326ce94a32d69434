//! Process exit codes.
//!
//! `0` is success, everything else is application-defined.

use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AppExit {
    Success = 0,
    /// Invalid command-line arguments or usage.
    InvalidArguments = 1,
    /// Event loop or window failed to initialize.
    InitializationFailed = 2,
    /// GPU adapter, device, or surface failed to initialize.
    GpuBackendError = 3,
    /// File not found, permission denied, or I/O failure.
    FileAccessError = 4,
    UserCancelled = 5,
    PluginLoadError = 6,
    /// Rendering hit an unrecoverable error.
    RenderFailure = 7,
}

impl AppExit {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<AppExit> for ExitCode {
    fn from(exit: AppExit) -> Self {
        ExitCode::from(exit.code())
    }
}
