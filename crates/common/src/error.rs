//! Error types shared across Airmouse crates.

use std::path::PathBuf;

/// Top-level error type for Airmouse operations.
#[derive(Debug, thiserror::Error)]
pub enum AirmouseError {
    /// The camera device could not be opened at startup. Fatal: the
    /// process exits without processing any frames.
    #[error("Capture init error: {message}")]
    CaptureInit { message: String },

    /// A frame read failed mid-run. Fatal: the control loop terminates
    /// and releases its resources.
    #[error("Capture frame error: {message}")]
    CaptureFrame { message: String },

    #[error("Hand detection error: {message}")]
    Detection { message: String },

    #[error("Pointer injection error: {message}")]
    Pointer { message: String },

    #[error("Preview error: {message}")]
    Preview { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using AirmouseError.
pub type AirmouseResult<T> = Result<T, AirmouseError>;

impl AirmouseError {
    pub fn capture_init(msg: impl Into<String>) -> Self {
        Self::CaptureInit {
            message: msg.into(),
        }
    }

    pub fn capture_frame(msg: impl Into<String>) -> Self {
        Self::CaptureFrame {
            message: msg.into(),
        }
    }

    pub fn detection(msg: impl Into<String>) -> Self {
        Self::Detection {
            message: msg.into(),
        }
    }

    pub fn pointer(msg: impl Into<String>) -> Self {
        Self::Pointer {
            message: msg.into(),
        }
    }

    pub fn preview(msg: impl Into<String>) -> Self {
        Self::Preview {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }

    /// Whether this error must terminate the control loop.
    ///
    /// Both capture error kinds are fatal; the detector reporting no hand
    /// is not an error at all and never reaches this type.
    pub fn is_fatal_capture(&self) -> bool {
        matches!(
            self,
            Self::CaptureInit { .. } | Self::CaptureFrame { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_errors_are_fatal() {
        assert!(AirmouseError::capture_init("no device").is_fatal_capture());
        assert!(AirmouseError::capture_frame("read failed").is_fatal_capture());
        assert!(!AirmouseError::detection("helper died").is_fatal_capture());
    }

    #[test]
    fn test_error_display_includes_message() {
        let err = AirmouseError::capture_init("could not open /dev/video0");
        assert!(err.to_string().contains("/dev/video0"));
    }
}
