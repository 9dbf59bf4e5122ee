//! # 解析器模块
//!
//! 提供 DFT 计算结果文件的解析器：
//! - `xyz`: 原子坐标文件（原子数 / 注释 / `symbol x y z` 数据行）
//! - `bands`: 能带能量文件（费米能级 / 能量列表）
//!
//! 文件在每次调用内一次性读入并关闭，解析本身只作用于字符串内容。
//!
//! ## 依赖关系
//! - 被 `analysis/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz, bands

pub mod bands;
pub mod xyz;

use crate::error::{AnalysisError, AnalysisResult};
use std::fs;
use std::path::Path;

/// 读取整个文本文件
pub(crate) fn read_text(path: &Path) -> AnalysisResult<String> {
    fs::read_to_string(path).map_err(|e| AnalysisError::from_io(e, path.display().to_string()))
}

/// 按空白切分一行（自动去除首尾空白和 `\r`）
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
