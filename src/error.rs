//! 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

/// 颜色映射错误类型
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("调色板解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("调色板文件未找到: {}", .0.display())]
    PaletteNotFound(PathBuf),

    #[error("expected {expected} xterm colours, found {found}")]
    PaletteSize { expected: usize, found: usize },

    #[error("unrecognized input {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, MapperError>;
