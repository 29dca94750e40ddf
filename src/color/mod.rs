//! RGB 颜色与十六进制解析

pub mod palette;
pub mod palette_data;

pub use palette::Palette;

use serde::Deserialize;

use crate::error::{MapperError, Result};

/// 24 位 RGB 颜色
///
/// 字段名与调色板数据中嵌套的 `rgb` 对象一致，可直接反序列化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 创建黑色
    pub const fn black() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }

    /// 创建白色
    pub const fn white() -> Self {
        Self { r: 255, g: 255, b: 255 }
    }

    /// 从 `rrggbb` 形式的字符串解析颜色
    ///
    /// 首尾的空白和 `#` 会被去掉。剩余部分必须正好是 6 个十六进制数字（大小写均可），
    /// 否则返回 [`MapperError::InvalidColor`]，其中携带去除首尾后的原文。
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = strip_input(text);
        let invalid = || MapperError::InvalidColor(hex.to_string());

        // 全部为 ASCII 时字节数等于字符数，下面按字节切片是安全的
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let component = |start: usize| {
            u8::from_str_radix(&hex[start..start + 2], 16).map_err(|_| invalid())
        };

        Ok(Self::new(component(0)?, component(2)?, component(4)?))
    }

    /// 两个颜色在 RGB 空间中欧几里得距离的平方
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// 两个颜色在 RGB 空间中的欧几里得距离
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// 格式化为十六进制颜色字符串 (如 "#FF0000")
    pub fn to_hex_string(self) -> String {
        format!("#{:X}", self)
    }
}

/// 去掉输入行首尾的空白和 `#`
pub fn strip_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '#')
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl std::fmt::LowerHex for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::UpperHex for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
