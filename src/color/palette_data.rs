//! 内置的 xterm 256 色调色板数据
//! 数据格式与 data/colour_data.json 相同：每条记录含 colorId / hexString / rgb / hsl

use std::path::{Path, PathBuf};

use crate::error::{MapperError, Result};

/// 调色板数据文件名，与可执行文件放在同一目录
pub const PALETTE_FILE_NAME: &str = "colour_data.json";

/// 编译进二进制的调色板数据，只在显式要求时使用
pub const BUNDLED_PALETTE_JSON: &str = include_str!("../../data/colour_data.json");

/// 指定目录下的调色板文件路径
pub fn palette_path_in(dir: &Path) -> PathBuf {
    dir.join(PALETTE_FILE_NAME)
}

/// 可执行文件所在目录下的调色板文件路径
pub fn installed_palette_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| MapperError::PaletteNotFound(exe.clone()))?;
    Ok(palette_path_in(dir))
}
