//! Novel Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("无效的角色: {0}")]
    InvalidCharacter(String),
}
