use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocmatchError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("page rendering failed: {0}")]
    Render(String),

    #[error("{tool} not found. Install {package} and make sure {tool} is on PATH")]
    ToolNotFound {
        tool: &'static str,
        package: &'static str,
    },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
