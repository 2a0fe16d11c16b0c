//! 存储层错误类型

use eval_weighting::SchemeCodecError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Codec(#[from] SchemeCodecError),
    #[error("scheme not found: {0}")]
    NotFound(String),
    #[error("lock failed")]
    Lock,
}
