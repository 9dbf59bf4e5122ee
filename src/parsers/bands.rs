//! # 能带能量文件解析器
//!
//! ## .bands 格式说明
//! ```text
//! -1.2345                  # 费米能级 (eV)
//! -5.10 -4.80 -2.20        # 任意个能量值/行
//!
//! 0.85 1.40
//! ...
//! ```
//!
//! 空行跳过。某一行只要有一个字段不是数值，整行的值都被丢弃，
//! 不保留该行中已解析的部分。
//!
//! ## 依赖关系
//! - 被 `analysis/gap.rs` 使用
//! - 使用 `models/calculation.rs`

use super::{read_text, split_fields};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::EnergyFile;
use std::path::Path;

/// 解析 .bands 文件
pub fn parse_bands_file(path: &Path) -> AnalysisResult<EnergyFile> {
    let content = read_text(path)?;
    parse_bands_content(&content)
}

/// 从字符串内容解析 .bands 格式
pub fn parse_bands_content(content: &str) -> AnalysisResult<EnergyFile> {
    let header_error = AnalysisError::HeaderParseError {
        format: "bands",
        expected: "Fermi level",
    };

    let mut lines = content.lines();
    let fermi_level = match lines.next() {
        Some(line) => line.trim().parse::<f64>().map_err(|_| header_error)?,
        None => return Err(header_error),
    };

    let mut energies = Vec::new();
    let mut skipped_lines = Vec::new();

    for (idx, line) in lines.enumerate() {
        let fields = split_fields(line);
        if fields.is_empty() {
            continue;
        }
        let values: Result<Vec<f64>, _> = fields.iter().map(|s| s.parse::<f64>()).collect();
        match values {
            Ok(values) => energies.extend(values),
            // 首行是 Line 1，这里的 idx 从 Line 2 开始计
            Err(_) => skipped_lines.push(idx + 2),
        }
    }

    Ok(EnergyFile {
        fermi_level,
        energies,
        skipped_lines,
    })
}
