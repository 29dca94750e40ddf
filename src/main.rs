//! map_to_xterm256 - 把 `#rrggbb` 颜色映射到最接近的 xterm 256 色索引
//!
//! 从标准输入逐行读取十六进制颜色，每行输出一个 0-255 的索引。
//! 距离按 RGB 空间中的欧几里得距离计算，适合用来写 Vim 语法高亮配色。
//!
//! 调色板来源：
//! - `--palette <PATH>` 指定的 JSON 文件
//! - 默认为可执行文件旁边的 `colour_data.json`，缺失时启动失败
//! - `--bundled` 显式使用编译进二进制的数据

#![warn(missing_docs)]
#![allow(dead_code)]

mod color;
mod error;
mod processor;

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use color::Palette;
use processor::LineProcessor;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(version, about = "Maps #rrggbb colours to the nearest xterm256 index")]
struct Args {
    /// 调色板 JSON 文件路径（默认使用可执行文件旁边的 colour_data.json）
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// 使用编译进二进制的调色板，不读取文件
    #[arg(long, conflicts_with = "palette")]
    bundled: bool,

    /// 要转换的颜色；为空时从标准输入读取
    colors: Vec<String>,
}

/// 按命令行参数加载调色板，失败时错误信息带上调色板路径
fn load_palette(args: &Args) -> anyhow::Result<Palette> {
    if args.bundled {
        info!("使用内置调色板");
        return Palette::bundled().context("加载内置调色板失败");
    }

    let path = Palette::resolve_path(args.palette.as_deref())?;
    Palette::load(&path).with_context(|| format!("加载调色板失败: {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志，输出到 stderr，stdout 只留给结果
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let palette = load_palette(&args)?;
    info!("调色板已加载: {} 种颜色", palette.len());

    let writer = BufWriter::new(io::stdout().lock());
    let processor = LineProcessor::new(&palette);

    let summary = if args.colors.is_empty() {
        processor.run(io::stdin().lock(), writer)?
    } else {
        processor.run_all(&args.colors, writer)?
    };

    info!("处理完成: 输出 {} 行，跳过 {} 行", summary.matched, summary.skipped);
    Ok(())
}
