//! 逐行处理输入的十六进制颜色

use std::io::{BufRead, Write};

use tracing::warn;

use crate::color::{Palette, Rgb};
use crate::error::{MapperError, Result};

/// 一次运行的处理统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// 成功输出索引的行数
    pub matched: usize,
    /// 因格式错误被跳过的行数
    pub skipped: usize,
}

/// 行处理器：每行独立解析并输出最接近的调色板索引
pub struct LineProcessor<'a> {
    palette: &'a Palette,
    summary: Summary,
}

impl<'a> LineProcessor<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            summary: Summary::default(),
        }
    }

    /// 解析一行并返回最接近的调色板索引
    pub fn process_line(&self, line: &str) -> Result<u8> {
        let color = Rgb::from_hex(line)?;
        Ok(self.palette.find_closest(color))
    }

    /// 处理一行并写出结果；格式错误的行写出警告后跳过
    fn handle_line<W: Write>(&mut self, line: &str, writer: &mut W) -> Result<()> {
        match self.process_line(line) {
            Ok(index) => {
                writeln!(writer, "{}", index)?;
                self.summary.matched += 1;
            }
            Err(err @ MapperError::InvalidColor(_)) => {
                warn!("跳过输入行: {:?}", line);
                writeln!(writer, "{}", err)?;
                self.summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// 读取直到输入结束
    ///
    /// 非 UTF-8 的行按有损方式转换，通常会被当作格式错误跳过。
    pub fn run<R: BufRead, W: Write>(mut self, reader: R, mut writer: W) -> Result<Summary> {
        for line in reader.split(b'\n') {
            let line = line?;
            self.handle_line(&String::from_utf8_lossy(&line), &mut writer)?;
        }
        writer.flush()?;
        Ok(self.summary)
    }

    /// 依次处理给定的颜色字符串（如命令行参数）
    pub fn run_all<I, S, W>(mut self, colors: I, mut writer: W) -> Result<Summary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        for color in colors {
            self.handle_line(color.as_ref(), &mut writer)?;
        }
        writer.flush()?;
        Ok(self.summary)
    }
}
