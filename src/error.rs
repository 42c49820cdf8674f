use thiserror::Error;

use crate::content::ContentError;
use crate::settings::SettingsError;

/// Top-level application error reported by `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("ui error: {0}")]
    Ui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
