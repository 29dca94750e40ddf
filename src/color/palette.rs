//! 调色板加载与最近颜色查找

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::Rgb;
use super::palette_data::{BUNDLED_PALETTE_JSON, installed_palette_path, palette_path_in};
use crate::error::{MapperError, Result};

/// xterm 调色板的颜色数量
pub const PALETTE_SIZE: usize = 256;

/// 调色板数据中的一条记录，只关心嵌套的 `rgb` 对象
#[derive(Debug, Deserialize)]
struct PaletteRecord {
    rgb: Rgb,
}

/// 256 色调色板
///
/// 条目顺序即输出的索引空间，加载后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// 从颜色列表创建调色板，数量必须正好是 256
    pub fn from_colors(colors: Vec<Rgb>) -> Result<Self> {
        let colors: [Rgb; PALETTE_SIZE] =
            colors
                .try_into()
                .map_err(|colors: Vec<Rgb>| MapperError::PaletteSize {
                    expected: PALETTE_SIZE,
                    found: colors.len(),
                })?;
        Ok(Self { colors })
    }

    /// 从 JSON 文本解析调色板
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<PaletteRecord> = serde_json::from_str(json)?;
        Self::from_colors(records.into_iter().map(|record| record.rgb).collect())
    }

    /// 从任意读取器解析调色板
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<PaletteRecord> = serde_json::from_reader(reader)?;
        Self::from_colors(records.into_iter().map(|record| record.rgb).collect())
    }

    /// 从 JSON 文件加载调色板，文件不存在时报错
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MapperError::PaletteNotFound(path.to_path_buf()));
        }
        info!("加载调色板: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// 加载目录下的 `colour_data.json`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load(&palette_path_in(dir))
    }

    /// 编译进二进制的调色板，需显式选择（`--bundled`）
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_PALETTE_JSON)
    }

    /// 确定要加载的调色板文件
    ///
    /// 显式指定的路径优先，否则为可执行文件旁边的 `colour_data.json`。
    /// 这里不检查文件是否存在，由 [`Palette::load`] 报告。
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => installed_palette_path(),
        }
    }

    /// 颜色数量
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// 获取指定索引的颜色
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// 调色板迭代器
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// 第一个与 `color` 完全相同的条目索引
    pub fn index_of(&self, color: Rgb) -> Option<u8> {
        self.colors
            .iter()
            .position(|&entry| entry == color)
            .map(|index| index as u8)
    }

    /// 查找最接近的颜色索引
    pub fn find_closest(&self, color: Rgb) -> u8 {
        self.find_closest_with_distance(color).0
    }

    /// 查找最接近的颜色索引，同时返回距离的平方
    ///
    /// 距离相同时保留较小的索引。
    pub fn find_closest_with_distance(&self, color: Rgb) -> (u8, u32) {
        let mut best_index = 0;
        let mut best_distance = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            // 平方距离与欧几里得距离的大小顺序相同
            let distance = entry.distance_squared(color);

            if distance < best_distance {
                best_distance = distance;
                best_index = i;
                if distance == 0 {
                    break;
                }
            }
        }

        debug!("{:x} -> {} (距离平方 {})", color, best_index, best_distance);
        (best_index as u8, best_distance)
    }
}
