/// Configuration errors surfaced before any window is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `row_height` must be a positive number of pixels.
    #[error("invalid row_height: {0} (must be > 0)")]
    InvalidRowHeight(u32),

    /// `child_row_height`, when set, must be a positive number of pixels.
    #[error("invalid child_row_height: {0} (must be > 0)")]
    InvalidChildRowHeight(u32),
}

pub type Result<T> = core::result::Result<T, ConfigError>;
