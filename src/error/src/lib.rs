//! 游戏错误处理模块
//!
//! Errors only exist at the edges of the game: loading configuration,
//! decoding raw input and exporting snapshots. Gameplay itself never fails,
//! rejected actions are silently dropped by the turn controller.

use thiserror::Error;

/// Errors surfaced by configuration, input decoding and snapshot export.
#[derive(Debug, Error)]
pub enum GameError {
    /// A configuration value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A raw movement delta that is not a single cardinal step
    #[error("Invalid move intent: ({dx}, {dy})")]
    InvalidIntent { dx: i32, dy: i32 },

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for `GameConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Shorthand used across the workspace crates.
pub type GameResult<T> = Result<T, GameError>;

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InvalidConfig(reason) => format!("Configuration rejected: {}", reason),
        GameError::ConfigParse(_) => "Configuration file could not be parsed".to_string(),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Configuration file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to read the configuration file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}
